//! Page request and pagination metadata types.

use serde::Deserialize;

use super::FilterSet;

/// Parameters for one page fetch.
///
/// A request is constructed fresh for every fetch from the current
/// page, page size, committed search term, and filter set.
///
/// # Example
///
/// ```
/// use opsboard_api::query::{FilterSet, PageRequest};
///
/// let request = PageRequest::new(2, 25)
///     .search("acme")
///     .filters(FilterSet::new().eq("region_id", 3));
///
/// assert_eq!(request.page, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    /// Records per page.
    pub per_page: u32,
    /// Committed search term; empty means no search.
    pub search: String,
    /// Active filter predicates.
    pub filters: FilterSet,
}

impl PageRequest {
    /// Creates a request for the given page and page size.
    ///
    /// Page numbers below 1 and a zero page size are clamped.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
            search: String::new(),
            filters: FilterSet::new(),
        }
    }

    /// Sets the search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    /// Sets the filter predicates.
    pub fn filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    /// Serializes the request into query pairs.
    ///
    /// `search_param` names the search parameter, which varies per
    /// endpoint (`search`, or a Ransack predicate like `q[name_cont]`).
    pub(crate) fn query_pairs(&self, search_param: &str) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("per_page".to_string(), self.per_page.to_string()),
        ];
        if !self.search.is_empty() {
            pairs.push((search_param.to_string(), self.search.clone()));
        }
        pairs.extend(self.filters.query_pairs());
        pairs
    }
}

/// Pagination metadata for one page of results.
///
/// Endpoints that return a `pagination` object deserialize into this
/// directly; for endpoints that return a bare collection the client
/// computes a single-page fallback instead (see
/// [`PageInfo::single_page`]).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    /// 1-based page number this metadata describes.
    pub current_page: u32,
    /// Records per page.
    pub per_page: u32,
    /// Total number of pages; always at least 1.
    pub total_pages: u32,
    /// Total number of records across all pages.
    pub total_count: u64,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            current_page: 1,
            per_page: 25,
            total_pages: 1,
            total_count: 0,
        }
    }
}

impl PageInfo {
    /// Creates pagination metadata, clamping degenerate values.
    pub fn new(current_page: u32, per_page: u32, total_pages: u32, total_count: u64) -> Self {
        Self {
            current_page: current_page.max(1),
            per_page: per_page.max(1),
            total_pages: total_pages.max(1),
            total_count,
        }
    }

    /// Fallback metadata for an endpoint that returned a bare
    /// collection with no `pagination` object: everything fits on one
    /// page.
    pub fn single_page(count: usize, per_page: u32) -> Self {
        Self::new(1, per_page, 1, count as u64)
    }

    /// Re-clamps metadata that arrived off the wire.
    ///
    /// Some endpoints report `total_pages: 0` for empty result sets.
    pub(crate) fn sanitized(self) -> Self {
        Self::new(
            self.current_page,
            self.per_page,
            self.total_pages,
            self.total_count,
        )
    }

    /// Returns `true` if this is the first page.
    pub fn is_first(&self) -> bool {
        self.current_page <= 1
    }

    /// Returns `true` if this is the last page.
    pub fn is_last(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Returns the next page number, if there is one.
    pub fn next_page(&self) -> Option<u32> {
        (!self.is_last()).then(|| self.current_page + 1)
    }
}

/// One page of fetched records with its pagination metadata.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// The records on this page.
    pub items: Vec<T>,
    /// Pagination metadata.
    pub info: PageInfo,
}

impl<T> Page<T> {
    /// Creates a page from items and metadata.
    pub fn new(items: Vec<T>, info: PageInfo) -> Self {
        Self { items, info }
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of records on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_clamps_degenerate_values() {
        let request = PageRequest::new(0, 0);
        assert_eq!(request.page, 1);
        assert_eq!(request.per_page, 1);
    }

    #[test]
    fn test_request_query_pairs() {
        let request = PageRequest::new(3, 50).search("acme");
        assert_eq!(
            request.query_pairs("search"),
            vec![
                ("page".to_string(), "3".to_string()),
                ("per_page".to_string(), "50".to_string()),
                ("search".to_string(), "acme".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_search_is_omitted() {
        let request = PageRequest::new(1, 25);
        let pairs = request.query_pairs("search");
        assert!(pairs.iter().all(|(name, _)| name != "search"));
    }

    #[test]
    fn test_info_sanitizes_zero_total_pages() {
        let info = PageInfo::new(1, 25, 0, 0);
        assert_eq!(info.total_pages, 1);
        assert!(info.is_last());
    }

    #[test]
    fn test_next_page() {
        let info = PageInfo::new(2, 25, 4, 100);
        assert_eq!(info.next_page(), Some(3));
        assert_eq!(PageInfo::new(4, 25, 4, 100).next_page(), None);
    }
}
