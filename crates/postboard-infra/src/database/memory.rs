//! In-memory post store - used when no database is configured, and in tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::domain::{NewPost, Page, PageRequest, Post, PostId, SortDirection};
use postboard_core::error::RepoError;
use postboard_core::ports::{BaseRepository, PostRepository};

struct Store {
    next_id: PostId,
    posts: BTreeMap<PostId, Post>,
}

impl Store {
    fn insert(&mut self, new_post: NewPost) -> Post {
        let post = new_post.into_post(self.next_id);
        self.next_id += 1;
        self.posts.insert(post.id, post.clone());
        post
    }
}

/// In-memory post repository using a BTreeMap behind an async RwLock.
///
/// Ids start at 1 and are never reused.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                next_id: 1,
                posts: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.values().cloned().collect())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.posts.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn save(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        Ok(store.insert(post))
    }

    async fn save_all(&self, posts: Vec<NewPost>) -> Result<Vec<Post>, RepoError> {
        // One write-lock section, so readers never observe half a batch.
        let mut store = self.store.write().await;
        Ok(posts.into_iter().map(|post| store.insert(post)).collect())
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Post>, RepoError> {
        let store = self.store.read().await;

        let mut posts: Vec<&Post> = store.posts.values().collect();
        posts.sort_by(|a, b| {
            let ascending = request.sort.compare(a, b).then(a.id.cmp(&b.id));
            match request.direction {
                SortDirection::Asc => ascending,
                SortDirection::Desc => ascending.reverse(),
            }
        });

        let total_items = posts.len() as u64;
        let offset = request
            .offset()
            .and_then(|offset| usize::try_from(offset).ok())
            .unwrap_or(usize::MAX);
        let size = usize::try_from(request.size).unwrap_or(usize::MAX);
        let items = posts.into_iter().skip(offset).take(size).cloned().collect();

        Ok(Page::new(items, &request, total_items))
    }

    async fn increment_views(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let mut store = self.store.write().await;
        Ok(store.posts.get_mut(&id).map(|post| {
            post.views += 1;
            post.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_core::domain::SortField;

    fn new_post(title: &str) -> NewPost {
        NewPost::new(
            Some(title.to_string()),
            Some("content".to_string()),
            Some("author".to_string()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryPostRepository::new();
        let first = repo.save(new_post("a")).await.unwrap();
        let second = repo.save(new_post("b")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.views, 0);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let post = repo.save(new_post("a")).await.unwrap();
        repo.delete(post.id).await.unwrap();
        assert!(matches!(repo.delete(post.id).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryPostRepository::new();
        let post = repo.save(new_post("a")).await.unwrap();
        repo.delete(post.id).await.unwrap();
        let next = repo.save(new_post("b")).await.unwrap();
        assert_ne!(next.id, post.id);
    }

    #[tokio::test]
    async fn test_find_page_sorts_descending_with_id_tiebreak() {
        let repo = InMemoryPostRepository::new();
        for title in ["a", "b", "c"] {
            repo.save(new_post(title)).await.unwrap();
        }
        repo.increment_views(1).await.unwrap();

        let page = repo
            .find_page(PageRequest {
                page: 0,
                size: 2,
                sort: SortField::Views,
                direction: SortDirection::Desc,
            })
            .await
            .unwrap();

        let ids: Vec<PostId> = page.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(page.total_items, 3);
        assert_eq!(page.total_pages, 2);
    }

    #[tokio::test]
    async fn test_find_page_beyond_offset_range_is_empty() {
        let repo = InMemoryPostRepository::new();
        repo.save(new_post("a")).await.unwrap();

        let page = repo
            .find_page(PageRequest {
                page: u64::MAX,
                size: 10,
                sort: SortField::Id,
                direction: SortDirection::Desc,
            })
            .await
            .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 1);
    }
}
