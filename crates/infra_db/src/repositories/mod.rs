//! Repository implementations for the review domain
//!
//! One repository per entity. Each owns the SQL for its table, holds a
//! handle to the shared connection pool, and returns plain row types; the
//! adapter layer converts rows to domain entities and database errors to
//! the domain taxonomy.

pub mod review;
pub mod reviewed_object;
pub mod reviewer;

pub use review::{
    InsertReview, ReviewPatch, ReviewRepository, ReviewRow, ReviewStatisticsRow, ThumbsRating,
};
pub use reviewed_object::{
    InsertReviewedObject, ReviewedObjectPatch, ReviewedObjectRepository, ReviewedObjectRow,
};
pub use reviewer::{InsertReviewer, ReviewerPatch, ReviewerRepository, ReviewerRow};
