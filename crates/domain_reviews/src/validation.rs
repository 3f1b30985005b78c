//! Write-time validation for review entities
//!
//! All checks here run before any store interaction, so malformed input
//! never reaches the database. The database repeats the structural rules as
//! CHECK constraints; this module exists so a bad payload fails fast with a
//! field-level message instead of a constraint-violation translation.
//!
//! # Validation Rules
//!
//! ## Reviewers
//! - Username required, 1-50 characters
//! - Email required, valid format, at most 255 characters
//!
//! ## Reviewed Objects
//! - object_type, external_id, and object_name required and bounded
//!
//! ## Reviews
//! - star_rating, when present, within 0-5
//! - text_review, when present, not blank
//! - At least one of text, stars, thumbs present on create

use validator::Validate;

use crate::error::ReviewDomainError;
use crate::review::{NewReview, ThumbsRating, UpdateReview};
use crate::reviewed_object::{NewReviewedObject, UpdateReviewedObject};
use crate::reviewer::{NewReviewer, UpdateReviewer};

/// Result of validating one input payload
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the payload is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Creates a failed validation result with errors
    pub fn fail(errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
    }

    /// Converts into a `Result`, folding all errors into one failure
    pub fn into_result(self) -> Result<(), ReviewDomainError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(ReviewDomainError::validation_failed(self.errors))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for review-domain write payloads
///
/// # Examples
///
/// ```rust
/// use domain_reviews::{NewReviewer, ReviewValidator};
///
/// let result = ReviewValidator::validate_new_reviewer(&NewReviewer::new("ada", "not-an-email"));
/// assert!(!result.is_valid);
/// ```
pub struct ReviewValidator;

impl ReviewValidator {
    /// Validates a reviewer creation payload
    pub fn validate_new_reviewer(input: &NewReviewer) -> ValidationResult {
        let mut result = ValidationResult::ok();
        Self::collect_rule_errors(input, &mut result);
        result
    }

    /// Validates a reviewer patch
    pub fn validate_update_reviewer(patch: &UpdateReviewer) -> ValidationResult {
        let mut result = ValidationResult::ok();
        Self::collect_rule_errors(patch, &mut result);
        result
    }

    /// Validates an object creation payload
    pub fn validate_new_object(input: &NewReviewedObject) -> ValidationResult {
        let mut result = ValidationResult::ok();
        Self::collect_rule_errors(input, &mut result);
        result
    }

    /// Validates an object patch
    pub fn validate_update_object(patch: &UpdateReviewedObject) -> ValidationResult {
        let mut result = ValidationResult::ok();
        Self::collect_rule_errors(patch, &mut result);
        result
    }

    /// Validates a review creation payload, including the content requirement
    pub fn validate_new_review(input: &NewReview) -> ValidationResult {
        let mut result = ValidationResult::ok();
        Self::collect_rule_errors(input, &mut result);
        Self::check_content(
            input.text_review.as_deref(),
            input.star_rating,
            input.thumbs_rating,
            &mut result,
        );
        result
    }

    /// Validates a review patch
    ///
    /// A patch cannot clear fields, so the content requirement cannot be
    /// broken here; only field-level rules apply.
    pub fn validate_update_review(patch: &UpdateReview) -> ValidationResult {
        let mut result = ValidationResult::ok();
        Self::collect_rule_errors(patch, &mut result);
        if let Some(text) = patch.text_review.as_deref() {
            if text.trim().is_empty() {
                result.add_error("text_review: must not be blank");
            }
        }
        result
    }

    fn check_content(
        text: Option<&str>,
        star_rating: Option<i16>,
        thumbs_rating: Option<ThumbsRating>,
        result: &mut ValidationResult,
    ) {
        let has_text = match text {
            Some(t) if t.trim().is_empty() => {
                result.add_error("text_review: must not be blank");
                false
            }
            Some(_) => true,
            None => false,
        };

        if !has_text && star_rating.is_none() && thumbs_rating.is_none() {
            result.add_error("a review needs text, a star rating, or a thumbs rating");
        }
    }

    fn collect_rule_errors<T: Validate>(input: &T, result: &mut ValidationResult) {
        if let Err(errors) = input.validate() {
            for (field, field_errors) in errors.field_errors() {
                for error in field_errors {
                    result.add_error(format!("{field}: {}", error.code));
                }
            }
        }
    }
}
