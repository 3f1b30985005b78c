//! Review domain errors
//!
//! Typed failures raised by entity construction and validation, independent
//! of any storage backend. Store-level failures use the shared
//! [`PortError`](core_kernel::PortError) taxonomy; this enum converts into
//! it where the two overlap.

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the review domain
#[derive(Debug, Error)]
pub enum ReviewDomainError {
    /// Reviewer with the given ID was not found
    #[error("Reviewer not found: {0}")]
    ReviewerNotFound(String),

    /// Reviewed object with the given ID was not found
    #[error("Reviewed object not found: {0}")]
    ObjectNotFound(String),

    /// Review with the given ID was not found
    #[error("Review not found: {0}")]
    ReviewNotFound(String),

    /// The reviewer has already reviewed this object
    #[error("Duplicate review: reviewer {reviewer_id} already reviewed object {object_id}")]
    DuplicateReview {
        reviewer_id: String,
        object_id: String,
    },

    /// Star rating outside the 0-5 range
    #[error("Star rating {0} is out of range (0-5)")]
    StarRatingOutOfRange(i16),

    /// Thumbs value other than up/down
    #[error("Unknown thumbs rating: {0}")]
    InvalidThumbsRating(String),

    /// Review carries neither text nor stars nor thumbs
    #[error("A review needs text, a star rating, or a thumbs rating")]
    MissingContent,

    /// Text review present but blank
    #[error("Text review must not be blank")]
    BlankTextReview,

    /// Input failed one or more validation rules
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ReviewDomainError {
    /// Creates a ValidationFailed error from collected rule violations
    pub fn validation_failed(errors: Vec<String>) -> Self {
        ReviewDomainError::ValidationFailed(errors.join("; "))
    }
}

impl From<ReviewDomainError> for PortError {
    fn from(error: ReviewDomainError) -> Self {
        match error {
            ReviewDomainError::ReviewerNotFound(id) => PortError::not_found("Reviewer", id),
            ReviewDomainError::ObjectNotFound(id) => PortError::not_found("ReviewedObject", id),
            ReviewDomainError::ReviewNotFound(id) => PortError::not_found("Review", id),
            error @ ReviewDomainError::DuplicateReview { .. } => {
                PortError::duplicate_key(error.to_string())
            }
            error @ ReviewDomainError::StarRatingOutOfRange(_) => {
                PortError::validation_field(error.to_string(), "star_rating")
            }
            error @ ReviewDomainError::InvalidThumbsRating(_) => {
                PortError::validation_field(error.to_string(), "thumbs_rating")
            }
            error @ (ReviewDomainError::MissingContent
            | ReviewDomainError::BlankTextReview
            | ReviewDomainError::ValidationFailed(_)) => PortError::validation(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_port_not_found() {
        let error: PortError = ReviewDomainError::ReviewerNotFound("RVR-1".to_string()).into();
        assert!(error.is_not_found());
    }

    #[test]
    fn test_duplicate_maps_to_duplicate_key() {
        let error: PortError = ReviewDomainError::DuplicateReview {
            reviewer_id: "a".to_string(),
            object_id: "b".to_string(),
        }
        .into();
        assert!(error.is_constraint_violation());
    }

    #[test]
    fn test_content_rules_map_to_validation() {
        let error: PortError = ReviewDomainError::MissingContent.into();
        assert!(error.is_validation());

        let error: PortError = ReviewDomainError::StarRatingOutOfRange(6).into();
        assert!(error.is_validation());
    }
}
