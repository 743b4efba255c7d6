//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

use postboard_core::domain::{Page, Post, PostId};

/// Request to create a post.
///
/// Fields are optional so that a missing value is reported as a validation
/// failure rather than a malformed body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub name: Option<String>,
}

/// Request to import posts from a spreadsheet on the server's filesystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportPostsRequest {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportPostsResponse {
    pub imported: usize,
}

/// Query string of `GET /api/posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    pub page: Option<i64>,
    pub criteria: Option<String>,
}

impl ListPostsQuery {
    pub const DEFAULT_PAGE: i64 = 0;
    pub const DEFAULT_CRITERIA: &'static str = "views";

    /// A paged listing is requested as soon as either parameter is present.
    pub fn is_paged(&self) -> bool {
        self.page.is_some() || self.criteria.is_some()
    }

    pub fn page(&self) -> i64 {
        self.page.unwrap_or(Self::DEFAULT_PAGE)
    }

    pub fn criteria(&self) -> &str {
        self.criteria.as_deref().unwrap_or(Self::DEFAULT_CRITERIA)
    }
}

/// A post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub name: String,
    pub views: u64,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            name: post.name,
            views: post.views,
        }
    }
}

/// One page of a sorted listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T, U: Into<T>> From<Page<U>> for PageResponse<T> {
    fn from(page: Page<U>) -> Self {
        let page: Page<T> = page.map(Into::into);
        Self {
            items: page.items,
            page: page.page,
            size: page.size,
            total_items: page.total_items,
            total_pages: page.total_pages,
        }
    }
}
