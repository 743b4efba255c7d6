//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`.
//! This crate contains the post stores and the spreadsheet reader.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory store only
//! - `postgres` - PostgreSQL post store via SeaORM

pub mod database;
pub mod sheet;

// Re-exports
pub use database::{DatabaseConfig, InMemoryPostRepository};
pub use sheet::CalamineSheetReader;

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;
