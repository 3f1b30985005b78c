//! Review Management Domain
//!
//! This crate defines the entity model for the review service: reviewers,
//! the objects they review, and the reviews themselves (free text, 0-5 star
//! ratings, thumbs up/down), together with the port traits that any storage
//! backend must satisfy.
//!
//! Entities are transient value objects materialized per query; the store
//! behind the port is the single source of truth and nothing is cached in
//! process.

pub mod error;
pub mod ports;
pub mod review;
pub mod reviewed_object;
pub mod reviewer;
pub mod statistics;
pub mod validation;

pub use error::ReviewDomainError;
pub use ports::{
    DeletePolicy, ReviewQuery, ReviewStore, ReviewStoreExt, ReviewedObjectQuery,
    ReviewedObjectStore, ReviewerStore,
};
pub use review::{NewReview, Review, ThumbsRating, UpdateReview, MAX_STAR_RATING, MIN_STAR_RATING};
pub use reviewed_object::{NewReviewedObject, ReviewedObject, UpdateReviewedObject};
pub use reviewer::{NewReviewer, Reviewer, UpdateReviewer};
pub use statistics::ReviewStatistics;
pub use validation::{ReviewValidator, ValidationResult};
