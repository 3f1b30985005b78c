//! Derived review statistics
//!
//! Aggregates computed per reviewed object on every call - nothing here is
//! stored or cached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::ReviewedObjectId;

/// Aggregate review figures for one reviewed object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewStatistics {
    pub reviewed_object_id: ReviewedObjectId,
    /// Total number of reviews, rated or not
    pub total_reviews: u64,
    /// Mean star rating over reviews that carry one; `None` when no review
    /// has a star rating
    pub average_rating: Option<f64>,
    pub thumbs_up_count: u64,
    pub thumbs_down_count: u64,
    /// Creation time of the most recent review, if any
    pub latest_review_at: Option<DateTime<Utc>>,
}

impl ReviewStatistics {
    /// Statistics for an object with no reviews at all
    pub fn empty(reviewed_object_id: ReviewedObjectId) -> Self {
        Self {
            reviewed_object_id,
            total_reviews: 0,
            average_rating: None,
            thumbs_up_count: 0,
            thumbs_down_count: 0,
            latest_review_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_statistics() {
        let stats = ReviewStatistics::empty(ReviewedObjectId::new());
        assert_eq!(stats.total_reviews, 0);
        assert!(stats.average_rating.is_none());
        assert!(stats.latest_review_at.is_none());
    }
}
