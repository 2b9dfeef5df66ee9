//! Pagination types
//!
//! Shared between all paginated list endpoints. Query side defaults to
//! page 1 / 10 items; response side reports totals so clients can render
//! page controls without a second request.

use serde::{Deserialize, Serialize};

/// Query parameters for paginated list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Optional case-insensitive substring filter.
    pub search: Option<String>,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            search: None,
        }
    }
}

impl PageQuery {
    /// Clamped page number (minimum 1).
    pub fn page(&self) -> i64 {
        self.page.max(1)
    }

    /// Clamped page size (1..=100).
    pub fn limit(&self) -> i64 {
        self.limit.clamp(1, 100)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }
}

/// Page metadata attached to paginated responses. Serialized camelCase;
/// the wire shape is `{currentPage, totalPages, totalItems, itemsPerPage}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub items_per_page: i64,
}

impl Pagination {
    pub fn new(query: &PageQuery, total_items: i64) -> Self {
        let limit = query.limit();
        Self {
            current_page: query.page(),
            total_pages: (total_items + limit - 1) / limit,
            total_items,
            items_per_page: limit,
        }
    }
}

/// A page of results plus its metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, query: &PageQuery, total_items: i64) -> Self {
        Self {
            data,
            pagination: Pagination::new(query, total_items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let q = PageQuery {
            page: 1,
            limit: 10,
            search: None,
        };
        assert_eq!(Pagination::new(&q, 0).total_pages, 0);
        assert_eq!(Pagination::new(&q, 10).total_pages, 1);
        assert_eq!(Pagination::new(&q, 11).total_pages, 2);
    }

    #[test]
    fn pagination_serializes_camel_case() {
        let q = PageQuery::default();
        let json = serde_json::to_value(Pagination::new(&q, 3)).unwrap();
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["totalItems"], 3);
        assert_eq!(json["itemsPerPage"], 10);
    }

    #[test]
    fn page_and_limit_are_clamped() {
        let q = PageQuery {
            page: 0,
            limit: 1000,
            search: None,
        };
        assert_eq!(q.page(), 1);
        assert_eq!(q.limit(), 100);
        assert_eq!(q.offset(), 0);
    }
}
