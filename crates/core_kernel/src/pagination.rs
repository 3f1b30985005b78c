//! Offset/limit pagination primitives
//!
//! Listings across the review domain are paged with plain offset/limit
//! rather than cursors; listing is not performance-critical here and the
//! simpler scheme keeps the repositories readable.
//!
//! `PageRequest` carries caller intent with the limit clamped to
//! [`MAX_PAGE_SIZE`]; `Page` carries one page of results plus a `has_more`
//! flag so callers can decide whether to fetch the next page. An
//! out-of-range offset produces an empty page, never an error.

use serde::{Deserialize, Serialize};

/// Page size used when the caller does not specify one
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Upper bound on page size; larger requests are clamped, bounding result size
pub const MAX_PAGE_SIZE: u32 = 100;

/// A validated pagination request
///
/// Offsets and limits are unsigned, so negative values are unrepresentable.
///
/// # Example
///
/// ```rust
/// use core_kernel::PageRequest;
///
/// let page = PageRequest::new(0, 10);
/// assert_eq!(page.limit(), 10);
///
/// // Oversized limits are clamped
/// let page = PageRequest::new(0, 10_000);
/// assert_eq!(page.limit(), core_kernel::MAX_PAGE_SIZE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    offset: u32,
    limit: u32,
}

impl PageRequest {
    /// Creates a request for `limit` items starting at `offset`
    ///
    /// The limit is clamped to [`MAX_PAGE_SIZE`]; a limit of zero is raised
    /// to one so a request always asks for something.
    pub fn new(offset: u32, limit: u32) -> Self {
        Self {
            offset,
            limit: limit.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Creates a request for the first page with the default size
    pub fn first() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }

    /// The starting offset
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// The clamped page size
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// The request for the page following this one
    pub fn next(&self) -> Self {
        Self {
            offset: self.offset.saturating_add(self.limit),
            limit: self.limit,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One page of results plus enough information to know whether more exist
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// The items on this page, in the repository's ordering
    pub items: Vec<T>,
    /// Offset this page started at
    pub offset: u32,
    /// Limit the page was fetched with
    pub limit: u32,
    /// Whether at least one more item exists past this page
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Builds a page from rows fetched with `limit + 1`
    ///
    /// Repositories over-fetch by one row; the extra row, if present, is
    /// dropped here and signals that another page exists.
    pub fn from_overfetched(request: PageRequest, mut items: Vec<T>) -> Self {
        let has_more = items.len() as u32 > request.limit();
        items.truncate(request.limit() as usize);
        Self {
            items,
            offset: request.offset(),
            limit: request.limit(),
            has_more,
        }
    }

    /// An empty page for the given request
    pub fn empty(request: PageRequest) -> Self {
        Self {
            items: Vec::new(),
            offset: request.offset(),
            limit: request.limit(),
            has_more: false,
        }
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maps the page's items, preserving the paging metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            offset: self.offset,
            limit: self.limit,
            has_more: self.has_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_clamped_to_max() {
        let request = PageRequest::new(0, MAX_PAGE_SIZE + 50);
        assert_eq!(request.limit(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_zero_limit_raised_to_one() {
        let request = PageRequest::new(0, 0);
        assert_eq!(request.limit(), 1);
    }

    #[test]
    fn test_next_advances_offset() {
        let request = PageRequest::new(10, 10);
        let next = request.next();
        assert_eq!(next.offset(), 20);
        assert_eq!(next.limit(), 10);
    }

    #[test]
    fn test_overfetch_signals_more() {
        let request = PageRequest::new(0, 3);
        let page = Page::from_overfetched(request, vec![1, 2, 3, 4]);
        assert_eq!(page.items, vec![1, 2, 3]);
        assert!(page.has_more);
    }

    #[test]
    fn test_exact_fetch_signals_no_more() {
        let request = PageRequest::new(0, 3);
        let page = Page::from_overfetched(request, vec![1, 2]);
        assert_eq!(page.items, vec![1, 2]);
        assert!(!page.has_more);
    }

    #[test]
    fn test_map_preserves_metadata() {
        let page = Page::from_overfetched(PageRequest::new(5, 2), vec![1, 2, 3]);
        let mapped = page.map(|n| n * 10);
        assert_eq!(mapped.items, vec![10, 20]);
        assert_eq!(mapped.offset, 5);
        assert!(mapped.has_more);
    }
}
