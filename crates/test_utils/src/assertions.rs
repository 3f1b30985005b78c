//! Custom assertion helpers for domain types

use chrono::{DateTime, Utc};

use core_kernel::PortError;

/// Asserts that a freshly created entity's timestamps are initialized
/// correctly: both populated and equal
pub fn assert_fresh_timestamps(created_at: DateTime<Utc>, updated_at: DateTime<Utc>) {
    assert_eq!(
        created_at, updated_at,
        "expected updated_at == created_at on a fresh entity"
    );
}

/// Asserts that timestamps are ordered newest first
pub fn assert_newest_first(timestamps: &[DateTime<Utc>]) {
    for window in timestamps.windows(2) {
        assert!(
            window[0] >= window[1],
            "expected newest-first ordering, got {} before {}",
            window[0],
            window[1]
        );
    }
}

/// Asserts that the error is `NotFound`
pub fn assert_not_found(error: &PortError) {
    assert!(error.is_not_found(), "expected NotFound, got: {error}");
}

/// Asserts that the error is `Validation`
pub fn assert_validation(error: &PortError) {
    assert!(error.is_validation(), "expected Validation, got: {error}");
}

/// Asserts that the error is `DuplicateKey`
pub fn assert_duplicate_key(error: &PortError) {
    assert!(
        matches!(error, PortError::DuplicateKey { .. }),
        "expected DuplicateKey, got: {error}"
    );
}

/// Asserts that the error is `ForeignKey`
pub fn assert_foreign_key(error: &PortError) {
    assert!(
        matches!(error, PortError::ForeignKey { .. }),
        "expected ForeignKey, got: {error}"
    );
}

/// Asserts that the error is `DeleteConflict`
pub fn assert_delete_conflict(error: &PortError) {
    assert!(
        matches!(error, PortError::DeleteConflict { .. }),
        "expected DeleteConflict, got: {error}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_newest_first_accepts_sorted() {
        let later = Utc.with_ymd_and_hms(2024, 5, 2, 12, 0, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_newest_first(&[later, earlier]);
        assert_newest_first(&[later, later]);
    }

    #[test]
    #[should_panic(expected = "newest-first")]
    fn test_newest_first_rejects_unsorted() {
        let later = Utc.with_ymd_and_hms(2024, 5, 2, 12, 0, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_newest_first(&[earlier, later]);
    }

    #[test]
    fn test_error_assertions() {
        assert_not_found(&PortError::not_found("Reviewer", "x"));
        assert_validation(&PortError::validation("bad"));
        assert_duplicate_key(&PortError::duplicate_key("dup"));
        assert_foreign_key(&PortError::foreign_key("missing"));
        assert_delete_conflict(&PortError::delete_conflict("dependents"));
    }
}
