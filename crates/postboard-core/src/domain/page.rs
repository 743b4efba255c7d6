//! Sorting and pagination value types.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Post;
use crate::error::DomainError;

/// A post attribute that listings can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Id,
    Title,
    Content,
    Name,
    Views,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Title => "title",
            SortField::Content => "content",
            SortField::Name => "name",
            SortField::Views => "views",
        }
    }

    /// Ascending order of two posts on this attribute.
    pub fn compare(&self, a: &Post, b: &Post) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Title => a.title.cmp(&b.title),
            SortField::Content => a.content.cmp(&b.content),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Views => a.views.cmp(&b.views),
        }
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" | "postId" => Ok(SortField::Id),
            "title" => Ok(SortField::Title),
            "content" => Ok(SortField::Content),
            "name" => Ok(SortField::Name),
            "views" => Ok(SortField::Views),
            other => Err(DomainError::InvalidParameter(format!(
                "cannot sort posts by '{other}'"
            ))),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Zero-indexed page of a sorted listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: SortField,
    pub direction: SortDirection,
}

impl PageRequest {
    /// Number of items preceding this page, or `None` when it does not fit
    /// a signed 64-bit SQL `OFFSET`. Such a page lies past the end of any
    /// store.
    pub fn offset(&self) -> Option<u64> {
        self.page
            .checked_mul(self.size)
            .filter(|offset| i64::try_from(*offset).is_ok())
    }
}

/// One page of results plus the totals needed to navigate the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: &PageRequest, total_items: u64) -> Self {
        let total_pages = if request.size == 0 {
            0
        } else {
            total_items.div_ceil(request.size)
        };

        Self {
            items,
            page: request.page,
            size: request.size,
            total_items,
            total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_field() {
        assert_eq!("views".parse::<SortField>().unwrap(), SortField::Views);
        assert_eq!("postId".parse::<SortField>().unwrap(), SortField::Id);
        assert!(matches!(
            "likes".parse::<SortField>(),
            Err(DomainError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_page_totals() {
        let request = PageRequest {
            page: 1,
            size: 10,
            sort: SortField::Views,
            direction: SortDirection::Desc,
        };
        let page = Page::new(vec![1, 2, 3], &request, 23);
        assert_eq!(request.offset(), Some(10));
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.map(|n| n * 2).items, vec![2, 4, 6]);
    }

    #[test]
    fn test_offset_beyond_sql_range_is_none() {
        let mut request = PageRequest {
            page: i64::MAX as u64,
            size: 10,
            sort: SortField::Views,
            direction: SortDirection::Desc,
        };
        assert_eq!(request.offset(), None);

        request.page = i64::MAX as u64 / 10 + 1;
        assert_eq!(request.offset(), None);

        request.page = i64::MAX as u64 / 10;
        assert!(request.offset().is_some());
    }
}
