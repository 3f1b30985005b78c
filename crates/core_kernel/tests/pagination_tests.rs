//! Tests for pagination primitives

use core_kernel::{Page, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use proptest::prelude::*;

#[test]
fn test_default_is_first_page() {
    let request = PageRequest::default();
    assert_eq!(request.offset(), 0);
    assert_eq!(request.limit(), DEFAULT_PAGE_SIZE);
}

#[test]
fn test_empty_page() {
    let page: Page<u32> = Page::empty(PageRequest::new(100, 10));
    assert!(page.is_empty());
    assert_eq!(page.len(), 0);
    assert!(!page.has_more);
    assert_eq!(page.offset, 100);
}

#[test]
fn test_next_saturates_at_u32_max() {
    let request = PageRequest::new(u32::MAX - 5, 100);
    let next = request.next();
    assert_eq!(next.offset(), u32::MAX);
}

proptest! {
    #[test]
    fn prop_limit_always_within_bounds(offset in 0u32..=u32::MAX, limit in 0u32..=u32::MAX) {
        let request = PageRequest::new(offset, limit);
        prop_assert!(request.limit() >= 1);
        prop_assert!(request.limit() <= MAX_PAGE_SIZE);
        prop_assert_eq!(request.offset(), offset);
    }

    #[test]
    fn prop_page_never_exceeds_limit(limit in 1u32..=20, extra in 0usize..=30) {
        let request = PageRequest::new(0, limit);
        let fetched: Vec<usize> = (0..(limit as usize + extra)).collect();
        let page = Page::from_overfetched(request, fetched);
        prop_assert!(page.len() <= limit as usize);
        prop_assert_eq!(page.has_more, extra > 0);
    }
}
