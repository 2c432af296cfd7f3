use serde::{Deserialize, Serialize};

/// One page of query results plus pre-pagination metadata.
///
/// `total` and `total_pages` always describe the whole filtered set,
/// whatever page was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult<R> {
    pub data: Vec<R>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

impl<R> QueryResult<R> {
    /// `limit` must be non-zero; the engine clamps before calling.
    pub fn new(data: Vec<R>, total: usize, page: usize, limit: usize) -> Self {
        QueryResult {
            data,
            total,
            page,
            limit,
            total_pages: total.div_ceil(limit),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1 && self.total > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_page_counts_as_a_full_page() {
        let result = QueryResult::new(vec![1, 2, 3], 23, 1, 10);
        assert_eq!(result.total_pages, 3);
        assert!(result.has_next_page());
        assert!(!result.has_previous_page());
    }

    #[test]
    fn empty_set_has_zero_pages() {
        let result: QueryResult<u32> = QueryResult::new(Vec::new(), 0, 1, 10);
        assert_eq!(result.total_pages, 0);
        assert!(!result.has_next_page());
        assert!(!result.has_previous_page());
    }
}
