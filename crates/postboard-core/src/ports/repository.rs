use async_trait::async_trait;

use crate::domain::{NewPost, Page, PageRequest, Post, PostId};
use crate::error::RepoError;

/// Generic repository trait defining the read and delete operations every
/// keyed store shares.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Every stored entity, in ascending ID order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Delete an entity by its ID. Fails with `RepoError::NotFound` when
    /// nothing was removed.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    /// Persist a new post; the store assigns its id.
    async fn save(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Persist a batch of new posts. Either every post is stored or none is.
    async fn save_all(&self, posts: Vec<NewPost>) -> Result<Vec<Post>, RepoError>;

    /// One page of posts in the requested order, ties broken by id in the
    /// same direction.
    async fn find_page(&self, request: PageRequest) -> Result<Page<Post>, RepoError>;

    /// Atomically add one to a post's view counter and return the updated
    /// post, or `None` when the id does not exist.
    async fn increment_views(&self, id: PostId) -> Result<Option<Post>, RepoError>;
}
