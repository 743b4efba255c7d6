//! Domain entities - the core business objects.

mod page;
mod post;

pub use page::{Page, PageRequest, SortDirection, SortField};
pub use post::{NewPost, Post, PostId};
