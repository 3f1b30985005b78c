//! Review entity
//!
//! One reviewer's evaluation of one object. A review can carry free text, a
//! star rating, a thumbs verdict, or any combination - but never none of
//! them. The (reviewer, object) pair is unique: the store's uniqueness
//! constraint decides races between concurrent writers, so exactly one of
//! two simultaneous creates for the same pair succeeds.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{ReviewId, ReviewedObjectId, ReviewerId};

use crate::error::ReviewDomainError;

/// Lowest allowed star rating
pub const MIN_STAR_RATING: i16 = 0;

/// Highest allowed star rating
pub const MAX_STAR_RATING: i16 = 5;

/// A thumbs up/down verdict
///
/// Unknown values are unrepresentable; parsing anything other than `up` or
/// `down` fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbsRating {
    Up,
    Down,
}

impl ThumbsRating {
    /// The wire/storage form of the verdict
    pub fn as_str(&self) -> &'static str {
        match self {
            ThumbsRating::Up => "up",
            ThumbsRating::Down => "down",
        }
    }
}

impl fmt::Display for ThumbsRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThumbsRating {
    type Err = ReviewDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(ThumbsRating::Up),
            "down" => Ok(ThumbsRating::Down),
            other => Err(ReviewDomainError::InvalidThumbsRating(other.to_string())),
        }
    }
}

/// A review as read back from the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub reviewer_id: ReviewerId,
    pub reviewed_object_id: ReviewedObjectId,
    pub text_review: Option<String>,
    pub star_rating: Option<i16>,
    pub thumbs_rating: Option<ThumbsRating>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// True when the review carries at least one form of content
    pub fn has_content(&self) -> bool {
        self.text_review.as_deref().is_some_and(|t| !t.trim().is_empty())
            || self.star_rating.is_some()
            || self.thumbs_rating.is_some()
    }
}

/// Fields required to create a review
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
pub struct NewReview {
    pub reviewer_id: ReviewerId,
    pub reviewed_object_id: ReviewedObjectId,
    pub text_review: Option<String>,
    #[validate(range(min = 0, max = 5))]
    pub star_rating: Option<i16>,
    pub thumbs_rating: Option<ThumbsRating>,
}

impl NewReview {
    /// Creates an empty review input for the given pair
    ///
    /// The result has no content yet; add text, stars, or a thumbs verdict
    /// before handing it to a store, or creation fails validation.
    pub fn for_pair(reviewer_id: ReviewerId, reviewed_object_id: ReviewedObjectId) -> Self {
        Self {
            reviewer_id,
            reviewed_object_id,
            text_review: None,
            star_rating: None,
            thumbs_rating: None,
        }
    }

    /// Adds free text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_review = Some(text.into());
        self
    }

    /// Adds a star rating
    pub fn with_stars(mut self, rating: i16) -> Self {
        self.star_rating = Some(rating);
        self
    }

    /// Adds a thumbs verdict
    pub fn with_thumbs(mut self, thumbs: ThumbsRating) -> Self {
        self.thumbs_rating = Some(thumbs);
        self
    }

    /// True when at least one content field is populated with substance
    pub fn has_content(&self) -> bool {
        self.text_review.as_deref().is_some_and(|t| !t.trim().is_empty())
            || self.star_rating.is_some()
            || self.thumbs_rating.is_some()
    }
}

/// Partial patch for a review; present-means-set
#[derive(Debug, Clone, Default, Validate, Serialize, Deserialize)]
pub struct UpdateReview {
    pub text_review: Option<String>,
    #[validate(range(min = 0, max = 5))]
    pub star_rating: Option<i16>,
    pub thumbs_rating: Option<ThumbsRating>,
}

impl UpdateReview {
    /// True when the patch carries no field at all
    pub fn is_empty(&self) -> bool {
        self.text_review.is_none() && self.star_rating.is_none() && self.thumbs_rating.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbs_round_trip() {
        assert_eq!("up".parse::<ThumbsRating>().unwrap(), ThumbsRating::Up);
        assert_eq!("down".parse::<ThumbsRating>().unwrap(), ThumbsRating::Down);
        assert_eq!(ThumbsRating::Up.to_string(), "up");
    }

    #[test]
    fn test_thumbs_rejects_unknown() {
        assert!("sideways".parse::<ThumbsRating>().is_err());
        assert!("UP".parse::<ThumbsRating>().is_err());
    }

    #[test]
    fn test_thumbs_serde_lowercase() {
        let json = serde_json::to_string(&ThumbsRating::Down).unwrap();
        assert_eq!(json, "\"down\"");
    }

    #[test]
    fn test_new_review_content() {
        let empty = NewReview::for_pair(ReviewerId::new(), ReviewedObjectId::new());
        assert!(!empty.has_content());
        assert!(empty.clone().with_stars(4).has_content());
        assert!(empty.clone().with_thumbs(ThumbsRating::Up).has_content());
        assert!(empty.clone().with_text("solid").has_content());
        // Blank text is not content
        assert!(!empty.with_text("   ").has_content());
    }
}
