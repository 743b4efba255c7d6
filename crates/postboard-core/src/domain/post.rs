use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Store-assigned post identifier.
pub type PostId = i64;

/// Post entity - a persisted blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub name: String,
    pub views: u64,
}

/// A validated post that has not been persisted yet.
///
/// The store assigns the id and starts the view counter at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub name: String,
}

impl NewPost {
    /// Validate raw field values.
    ///
    /// `None` stands for a value the caller never supplied (a null JSON field
    /// or a missing spreadsheet column) and is rejected like a blank one.
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        name: Option<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            title: required("title", title)?,
            content: required("content", content)?,
            name: required("name", name)?,
        })
    }

    /// Attach a store-assigned id.
    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            name: self.name,
            views: 0,
        }
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(DomainError::Validation(format!("{field} must not be blank"))),
        None => Err(DomainError::Validation(format!("{field} is required"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_new_post_accepts_all_fields() {
        let post = NewPost::new(some("Title"), some("Body"), some("kim")).unwrap();
        assert_eq!(post.title, "Title");
        assert_eq!(post.name, "kim");
    }

    #[test]
    fn test_new_post_rejects_missing_field() {
        let err = NewPost::new(None, some("Body"), some("kim")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("title")));
    }

    #[test]
    fn test_new_post_rejects_blank_field() {
        let err = NewPost::new(some("Title"), some("Body"), some("   ")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("name")));
    }

    #[test]
    fn test_into_post_starts_with_zero_views() {
        let post = NewPost::new(some("T"), some("C"), some("N"))
            .unwrap()
            .into_post(7);
        assert_eq!(post.id, 7);
        assert_eq!(post.views, 0);
    }
}
