//! Post stores - PostgreSQL and in-memory.

mod connections;
mod memory;

#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use connections::{connect, ensure_schema};

#[cfg(feature = "postgres")]
pub use postgres_repo::PostgresPostRepository;
