//! Post service - the single entry point for post operations.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::{NewPost, Page, PageRequest, Post, PostId, SortDirection, SortField};
use crate::error::{DomainError, RepoError, SheetError};
use crate::ports::{PostRepository, SheetReader, SheetRow};

/// Why a spreadsheet import was rejected. Never shown to clients.
#[derive(Debug, Error)]
enum ImportFailure {
    #[error(transparent)]
    Sheet(#[from] SheetError),

    #[error("row {row}: {source}")]
    InvalidRow { row: usize, source: DomainError },

    #[error(transparent)]
    Store(#[from] RepoError),
}

/// Orchestrates the post store and the spreadsheet reader.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    sheets: Arc<dyn SheetReader>,
}

impl PostService {
    /// Posts per page in sorted listings.
    pub const PAGE_SIZE: u64 = 10;

    pub fn new(posts: Arc<dyn PostRepository>, sheets: Arc<dyn SheetReader>) -> Self {
        Self { posts, sheets }
    }

    /// Import every row of a spreadsheet as a new post.
    ///
    /// Rows are validated before anything is written and the batch is saved
    /// atomically, so a failed import leaves the store untouched. Every
    /// failure is reported as `DomainError::Internal`; the cause is logged.
    pub async fn import_from_file(&self, path: impl AsRef<Path>) -> Result<usize, DomainError> {
        let path = path.as_ref();

        match self.try_import(path).await {
            Ok(imported) => {
                tracing::info!(path = %path.display(), imported, "Imported posts from spreadsheet");
                Ok(imported)
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "Failed to import posts from spreadsheet");
                Err(DomainError::Internal("post import failed".to_string()))
            }
        }
    }

    async fn try_import(&self, path: &Path) -> Result<usize, ImportFailure> {
        let rows = self.sheets.read_rows(path).await?;

        let posts = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                // Header is row 1.
                row_to_post(row).map_err(|source| ImportFailure::InvalidRow {
                    row: index + 2,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if posts.is_empty() {
            return Ok(0);
        }

        let saved = self.posts.save_all(posts).await?;
        Ok(saved.len())
    }

    /// Create a single post.
    pub async fn create(
        &self,
        title: Option<String>,
        content: Option<String>,
        name: Option<String>,
    ) -> Result<Post, DomainError> {
        let new_post = NewPost::new(title, content, name)?;
        let post = self.posts.save(new_post).await?;

        tracing::debug!(post_id = post.id, "Post created");
        Ok(post)
    }

    /// Fetch a post, counting the fetch as one view.
    pub async fn get_by_id(&self, id: PostId) -> Result<Post, DomainError> {
        self.posts
            .increment_views(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    pub async fn delete_by_id(&self, id: PostId) -> Result<(), DomainError> {
        match self.posts.delete(id).await {
            Ok(()) => {
                tracing::debug!(post_id = id, "Post deleted");
                Ok(())
            }
            Err(RepoError::NotFound) => Err(DomainError::post_not_found(id)),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_all().await?)
    }

    /// A page of `PAGE_SIZE` posts sorted descending by `sort_field`.
    pub async fn list_paged(
        &self,
        page_number: i64,
        sort_field: &str,
    ) -> Result<Page<Post>, DomainError> {
        let page = u64::try_from(page_number).map_err(|_| {
            DomainError::InvalidParameter(format!("page must not be negative, got {page_number}"))
        })?;
        let sort: SortField = sort_field.parse()?;

        let request = PageRequest {
            page,
            size: Self::PAGE_SIZE,
            sort,
            direction: SortDirection::Desc,
        };

        Ok(self.posts.find_page(request).await?)
    }
}

fn row_to_post(mut row: SheetRow) -> Result<NewPost, DomainError> {
    NewPost::new(
        row.remove("title"),
        row.remove("content"),
        row.remove("name"),
    )
}
