//! Paginated list results.

use serde::{Deserialize, Serialize};

use super::component::DEFAULT_PAGE_SIZE;

/// Pagination block returned alongside list data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: u32,
    pub page_size: u32,
    /// Total number of records across all pages.
    pub total: u64,
    /// Number of pages; computed locally when the backend omits it.
    #[serde(default)]
    pub total_page: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total: 0,
            total_page: 0,
        }
    }
}

impl Pagination {
    /// Number of pages, falling back to `ceil(total / page_size)`.
    pub fn page_count(&self) -> u64 {
        if self.total_page > 0 {
            return self.total_page;
        }
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.page_size))
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.page_count()
    }

    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::default(),
        }
    }
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_fallback() {
        let p = Pagination {
            page: 1,
            page_size: 20,
            total: 41,
            total_page: 0,
        };
        assert_eq!(p.page_count(), 3);
        assert!(p.has_next());
        assert!(!p.has_prev());
    }

    #[test]
    fn test_last_page_has_no_next() {
        let p = Pagination {
            page: 3,
            page_size: 20,
            total: 41,
            total_page: 3,
        };
        assert!(!p.has_next());
        assert!(p.has_prev());
    }

    #[test]
    fn test_zero_page_size() {
        let p = Pagination {
            page_size: 0,
            total: 10,
            ..Pagination::default()
        };
        assert_eq!(p.page_count(), 0);
    }
}
