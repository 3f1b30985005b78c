//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant fields
//! while using defaults for everything else.

use serde_json::Value;

use core_kernel::{ReviewedObjectId, ReviewerId};
use domain_reviews::{NewReview, NewReviewedObject, NewReviewer, ThumbsRating};

use crate::fixtures::StringFixtures;

/// Builder for reviewer creation payloads
///
/// Defaults to unique username/email so repeated builds do not collide on
/// the store's uniqueness constraints.
pub struct TestReviewerBuilder {
    username: String,
    email: String,
    full_name: Option<String>,
}

impl Default for TestReviewerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestReviewerBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            username: StringFixtures::unique_username(),
            email: StringFixtures::unique_email(),
            full_name: Some(StringFixtures::full_name().to_string()),
        }
    }

    /// Sets the username
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the display name
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Clears the display name
    pub fn without_full_name(mut self) -> Self {
        self.full_name = None;
        self
    }

    /// Builds the creation payload
    pub fn build(self) -> NewReviewer {
        NewReviewer {
            username: self.username,
            email: self.email,
            full_name: self.full_name,
        }
    }
}

/// Builder for reviewed-object creation payloads
pub struct TestReviewedObjectBuilder {
    object_type: String,
    external_id: String,
    object_name: String,
    description: Option<String>,
    metadata: Option<Value>,
}

impl Default for TestReviewedObjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestReviewedObjectBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            object_type: StringFixtures::object_type().to_string(),
            external_id: StringFixtures::unique_external_id(),
            object_name: StringFixtures::object_name().to_string(),
            description: None,
            metadata: None,
        }
    }

    /// Sets the object category
    pub fn with_object_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_type = object_type.into();
        self
    }

    /// Sets the external reference
    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = external_id.into();
        self
    }

    /// Sets the display name
    pub fn with_object_name(mut self, object_name: impl Into<String>) -> Self {
        self.object_name = object_name.into();
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches a metadata document
    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Builds the creation payload
    pub fn build(self) -> NewReviewedObject {
        NewReviewedObject {
            object_type: self.object_type,
            external_id: self.external_id,
            object_name: self.object_name,
            description: self.description,
            metadata: self.metadata,
        }
    }
}

/// Builder for review creation payloads
///
/// Defaults to a four-star review so the payload satisfies the content
/// requirement out of the box.
pub struct TestReviewBuilder {
    reviewer_id: ReviewerId,
    reviewed_object_id: ReviewedObjectId,
    text_review: Option<String>,
    star_rating: Option<i16>,
    thumbs_rating: Option<ThumbsRating>,
}

impl TestReviewBuilder {
    /// Creates a new builder for the given pair
    pub fn new(reviewer_id: ReviewerId, reviewed_object_id: ReviewedObjectId) -> Self {
        Self {
            reviewer_id,
            reviewed_object_id,
            text_review: None,
            star_rating: Some(4),
            thumbs_rating: None,
        }
    }

    /// Sets the free text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_review = Some(text.into());
        self
    }

    /// Sets the star rating
    pub fn with_stars(mut self, rating: i16) -> Self {
        self.star_rating = Some(rating);
        self
    }

    /// Sets the thumbs verdict
    pub fn with_thumbs(mut self, thumbs: ThumbsRating) -> Self {
        self.thumbs_rating = Some(thumbs);
        self
    }

    /// Clears every content field, producing an invalid payload
    pub fn without_content(mut self) -> Self {
        self.text_review = None;
        self.star_rating = None;
        self.thumbs_rating = None;
        self
    }

    /// Builds the creation payload
    pub fn build(self) -> NewReview {
        NewReview {
            reviewer_id: self.reviewer_id,
            reviewed_object_id: self.reviewed_object_id,
            text_review: self.text_review,
            star_rating: self.star_rating,
            thumbs_rating: self.thumbs_rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_reviews::ReviewValidator;

    #[test]
    fn test_default_reviewer_is_valid() {
        let input = TestReviewerBuilder::new().build();
        assert!(ReviewValidator::validate_new_reviewer(&input).is_valid);
    }

    #[test]
    fn test_default_object_is_valid() {
        let input = TestReviewedObjectBuilder::new().build();
        assert!(ReviewValidator::validate_new_object(&input).is_valid);
    }

    #[test]
    fn test_default_review_is_valid() {
        let input = TestReviewBuilder::new(ReviewerId::new(), ReviewedObjectId::new()).build();
        assert!(ReviewValidator::validate_new_review(&input).is_valid);
    }

    #[test]
    fn test_without_content_is_invalid() {
        let input = TestReviewBuilder::new(ReviewerId::new(), ReviewedObjectId::new())
            .without_content()
            .build();
        assert!(!ReviewValidator::validate_new_review(&input).is_valid);
    }
}
