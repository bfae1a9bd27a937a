//! Page envelope for list endpoints

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

/// One page of results plus navigation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub total_count: i64,
    pub total_pages: i64,
    pub page: i64,
    pub page_size: i64,
    pub next_page: Option<i64>,
    pub previous_page: Option<i64>,
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    pub fn new(total_count: i64, page: i64, page_size: i64, results: Vec<T>) -> Self {
        let total_pages = if total_count == 0 {
            0
        } else {
            (total_count + page_size - 1) / page_size
        };
        let next_page = (page < total_pages).then_some(page + 1);
        let previous_page = (page > 1).then_some(page - 1);
        Self {
            total_count,
            total_pages,
            page,
            page_size,
            next_page,
            previous_page,
            results,
        }
    }
}

/// Clamp raw query parameters to sane bounds.
pub fn normalize(page: Option<i64>, page_size: Option<i64>) -> (i64, i64) {
    let page = page.unwrap_or(1).max(1);
    let page_size = page_size
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    (page, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_middle_page() {
        let page = PaginatedResponse::new(25, 2, 10, vec![0; 10]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.next_page, Some(3));
        assert_eq!(page.previous_page, Some(1));
    }

    #[test]
    fn test_metadata_edges() {
        let first = PaginatedResponse::new(25, 1, 10, vec![0; 10]);
        assert_eq!(first.previous_page, None);
        assert_eq!(first.next_page, Some(2));

        let last = PaginatedResponse::new(25, 3, 10, vec![0; 5]);
        assert_eq!(last.next_page, None);
        assert_eq!(last.previous_page, Some(2));
    }

    #[test]
    fn test_empty_result_set() {
        let page = PaginatedResponse::<i32>::new(0, 1, 10, vec![]);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.next_page, None);
        assert_eq!(page.previous_page, None);
    }

    #[test]
    fn test_normalize_bounds() {
        assert_eq!(normalize(None, None), (1, DEFAULT_PAGE_SIZE));
        assert_eq!(normalize(Some(0), Some(0)), (1, 1));
        assert_eq!(normalize(Some(-3), Some(500)), (1, MAX_PAGE_SIZE));
        assert_eq!(normalize(Some(4), Some(25)), (4, 25));
    }
}
