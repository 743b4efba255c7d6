//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod repository;
mod sheet;

pub use repository::{BaseRepository, PostRepository};
pub use sheet::{SheetReader, SheetRow};
