//! # Postboard Core
//!
//! The domain layer of the Postboard backend.
//! This crate contains the post entity, the ports its storage and import
//! adapters implement, and the `PostService` that ties them together.
//! It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::PostService;
