//! Review Domain Ports
//!
//! This module defines the port interfaces for the review domain, enabling
//! swappable storage implementations (PostgreSQL, in-memory mock).
//!
//! # Architecture
//!
//! One trait per entity defines every operation callers need from the
//! store. Multiple adapters can implement these traits:
//!
//! - **Internal Adapter**: PostgreSQL via `infra_db`
//! - **Mock Adapter**: in-memory, for testing without a database
//!
//! All write operations validate their payload before touching the store
//! and surface failures through the [`PortError`] taxonomy. Duplicate
//! prevention is always insert-and-translate: implementations attempt the
//! write and map the store's constraint-violation signal to
//! [`PortError::DuplicateKey`], never check-then-insert.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_reviews::{ReviewerStore, NewReviewer};
//! use std::sync::Arc;
//!
//! pub struct ReviewerService {
//!     store: Arc<dyn ReviewerStore>,
//! }
//!
//! impl ReviewerService {
//!     pub async fn register(&self, input: NewReviewer) -> Result<Reviewer, PortError> {
//!         self.store.create_reviewer(input).await
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use core_kernel::{
    DomainPort, HealthCheckable, Page, PageRequest, PortError, ReviewId, ReviewedObjectId,
    ReviewerId,
};

use crate::review::{NewReview, Review, UpdateReview};
use crate::reviewed_object::{NewReviewedObject, ReviewedObject, UpdateReviewedObject};
use crate::reviewer::{NewReviewer, Reviewer, UpdateReviewer};
use crate::statistics::ReviewStatistics;

/// Policy applied when deleting a reviewer or reviewed object that still
/// has dependent reviews
///
/// The default is `Restrict`: the delete fails with
/// [`PortError::DeleteConflict`] while dependents exist, mirroring the
/// schema's foreign-key behavior. `Cascade` must be chosen explicitly at
/// store construction; under it the dependents and the parent are removed
/// in one atomic unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    #[default]
    Restrict,
    Cascade,
}

/// Query parameters for listing reviewed objects
#[derive(Debug, Clone, Default)]
pub struct ReviewedObjectQuery {
    /// Filter by object category
    pub object_type: Option<String>,
}

impl ReviewedObjectQuery {
    /// Matches every object
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches objects of one category
    pub fn by_type(object_type: impl Into<String>) -> Self {
        Self {
            object_type: Some(object_type.into()),
        }
    }
}

/// Query parameters for listing reviews
#[derive(Debug, Clone, Default)]
pub struct ReviewQuery {
    /// Filter by authoring reviewer
    pub reviewer_id: Option<ReviewerId>,
    /// Filter by reviewed object
    pub reviewed_object_id: Option<ReviewedObjectId>,
}

impl ReviewQuery {
    /// Matches every review
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches reviews authored by one reviewer
    pub fn by_reviewer(reviewer_id: ReviewerId) -> Self {
        Self {
            reviewer_id: Some(reviewer_id),
            ..Self::default()
        }
    }

    /// Matches reviews of one object
    pub fn by_object(reviewed_object_id: ReviewedObjectId) -> Self {
        Self {
            reviewed_object_id: Some(reviewed_object_id),
            ..Self::default()
        }
    }
}

/// Port for reviewer persistence
///
/// All listings are ordered by creation time descending. Offsets past the
/// end of the data yield an empty page, not an error.
#[async_trait]
pub trait ReviewerStore: DomainPort + HealthCheckable {
    /// Validates and inserts a new reviewer, returning it with generated
    /// id and timestamps
    ///
    /// Fails with `DuplicateKey` when the username or email is taken.
    async fn create_reviewer(&self, input: NewReviewer) -> Result<Reviewer, PortError>;

    /// Retrieves a reviewer by id, or `NotFound`
    async fn get_reviewer(&self, id: ReviewerId) -> Result<Reviewer, PortError>;

    /// Looks a reviewer up by exact username
    async fn find_reviewer_by_username(&self, username: &str)
        -> Result<Option<Reviewer>, PortError>;

    /// Looks a reviewer up by exact email
    async fn find_reviewer_by_email(&self, email: &str) -> Result<Option<Reviewer>, PortError>;

    /// Returns one page of reviewers, newest first
    async fn list_reviewers(&self, page: PageRequest) -> Result<Page<Reviewer>, PortError>;

    /// Applies a partial patch; `updated_at` is recomputed even for an
    /// empty patch
    ///
    /// Fails with `NotFound` when the id does not resolve and with
    /// `DuplicateKey` when the patch would take a username or email that is
    /// already in use.
    async fn update_reviewer(
        &self,
        id: ReviewerId,
        patch: UpdateReviewer,
    ) -> Result<Reviewer, PortError>;

    /// Deletes a reviewer
    ///
    /// Fails with `NotFound` when absent. When the reviewer still has
    /// reviews the outcome is governed by the store's [`DeletePolicy`]:
    /// `DeleteConflict` under Restrict, atomic removal of the reviewer and
    /// all their reviews under Cascade.
    async fn delete_reviewer(&self, id: ReviewerId) -> Result<(), PortError>;
}

/// Port for reviewed-object persistence
#[async_trait]
pub trait ReviewedObjectStore: DomainPort + HealthCheckable {
    /// Validates and inserts a new object
    ///
    /// Fails with `DuplicateKey` when (object_type, external_id) is taken.
    async fn create_reviewed_object(
        &self,
        input: NewReviewedObject,
    ) -> Result<ReviewedObject, PortError>;

    /// Retrieves an object by id, or `NotFound`
    async fn get_reviewed_object(&self, id: ReviewedObjectId)
        -> Result<ReviewedObject, PortError>;

    /// Looks an object up by its caller-side reference
    async fn find_reviewed_object_by_external_id(
        &self,
        object_type: &str,
        external_id: &str,
    ) -> Result<Option<ReviewedObject>, PortError>;

    /// Returns one page of objects matching the query, newest first
    async fn list_reviewed_objects(
        &self,
        query: ReviewedObjectQuery,
        page: PageRequest,
    ) -> Result<Page<ReviewedObject>, PortError>;

    /// Applies a partial patch
    async fn update_reviewed_object(
        &self,
        id: ReviewedObjectId,
        patch: UpdateReviewedObject,
    ) -> Result<ReviewedObject, PortError>;

    /// Deletes an object, subject to the store's [`DeletePolicy`] when
    /// dependent reviews exist
    async fn delete_reviewed_object(&self, id: ReviewedObjectId) -> Result<(), PortError>;
}

/// Port for review persistence and aggregation
#[async_trait]
pub trait ReviewStore: DomainPort + HealthCheckable {
    /// Validates and inserts a new review
    ///
    /// Fails with `ForeignKey` when the reviewer or object does not exist
    /// and with `DuplicateKey` when this reviewer already reviewed this
    /// object. Concurrent creates for the same pair race at the store's
    /// uniqueness constraint: exactly one succeeds.
    async fn create_review(&self, input: NewReview) -> Result<Review, PortError>;

    /// Retrieves a review by id, or `NotFound`
    async fn get_review(&self, id: ReviewId) -> Result<Review, PortError>;

    /// Looks up the unique review one reviewer wrote for one object
    async fn find_review_by_reviewer_and_object(
        &self,
        reviewer_id: ReviewerId,
        reviewed_object_id: ReviewedObjectId,
    ) -> Result<Option<Review>, PortError>;

    /// Returns one page of reviews matching the query, newest first
    async fn list_reviews(
        &self,
        query: ReviewQuery,
        page: PageRequest,
    ) -> Result<Page<Review>, PortError>;

    /// Applies a partial patch; the (reviewer, object) pair itself is not
    /// patchable
    async fn update_review(&self, id: ReviewId, patch: UpdateReview)
        -> Result<Review, PortError>;

    /// Deletes a review, or `NotFound`
    async fn delete_review(&self, id: ReviewId) -> Result<(), PortError>;

    /// Computes aggregate statistics for one reviewed object
    ///
    /// Pure read, recomputed on every call. Fails with `NotFound` when the
    /// object itself does not exist; an existing object with no reviews
    /// yields zero counts.
    async fn statistics(&self, reviewed_object_id: ReviewedObjectId)
        -> Result<ReviewStatistics, PortError>;
}

/// Extension trait for [`ReviewStore`] with convenience methods
#[async_trait]
pub trait ReviewStoreExt: ReviewStore {
    /// True when the reviewer has already reviewed the object
    async fn has_reviewed(
        &self,
        reviewer_id: ReviewerId,
        reviewed_object_id: ReviewedObjectId,
    ) -> Result<bool, PortError> {
        Ok(self
            .find_review_by_reviewer_and_object(reviewer_id, reviewed_object_id)
            .await?
            .is_some())
    }
}

// Blanket implementation for all ReviewStore implementors
impl<T: ReviewStore> ReviewStoreExt for T {}

/// Mock implementation of the three store ports for testing
///
/// Stores everything in memory and enforces the same constraint semantics
/// as the PostgreSQL schema (unique username/email, unique
/// (object_type, external_id), unique (reviewer, object) pair, foreign
/// keys, delete policy), so port contract tests run without a database.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use core_kernel::{AdapterHealth, HealthCheckResult};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use crate::validation::ReviewValidator;

    #[derive(Debug, Default)]
    struct MockState {
        // Insertion order; created_at is assigned monotonically, so
        // iterating in reverse yields creation-time-descending order.
        reviewers: Vec<Reviewer>,
        objects: Vec<ReviewedObject>,
        reviews: Vec<Review>,
    }

    /// In-memory implementation of all three store ports
    #[derive(Debug, Default)]
    pub struct MockReviewStore {
        state: Arc<RwLock<MockState>>,
        delete_policy: DeletePolicy,
    }

    impl MockReviewStore {
        /// Creates a mock store with the default Restrict delete policy
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a mock store with an explicit delete policy
        pub fn with_delete_policy(delete_policy: DeletePolicy) -> Self {
            Self {
                state: Arc::default(),
                delete_policy,
            }
        }

        fn paginate<T: Clone>(items: Vec<T>, page: PageRequest) -> Page<T> {
            let fetched: Vec<T> = items
                .into_iter()
                .skip(page.offset() as usize)
                .take(page.limit() as usize + 1)
                .collect();
            Page::from_overfetched(page, fetched)
        }
    }

    impl DomainPort for MockReviewStore {}

    #[async_trait]
    impl HealthCheckable for MockReviewStore {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "mock-review-store".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms: 0,
                message: Some("Mock adapter always healthy".to_string()),
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl ReviewerStore for MockReviewStore {
        async fn create_reviewer(&self, input: NewReviewer) -> Result<Reviewer, PortError> {
            ReviewValidator::validate_new_reviewer(&input)
                .into_result()
                .map_err(PortError::from)?;

            let mut state = self.state.write().await;
            if state.reviewers.iter().any(|r| r.username == input.username) {
                return Err(PortError::duplicate_key(format!(
                    "reviewer with username '{}' already exists",
                    input.username
                )));
            }
            if state.reviewers.iter().any(|r| r.email == input.email) {
                return Err(PortError::duplicate_key(format!(
                    "reviewer with email '{}' already exists",
                    input.email
                )));
            }

            let now = Utc::now();
            let reviewer = Reviewer {
                id: ReviewerId::new(),
                username: input.username,
                email: input.email,
                full_name: input.full_name,
                created_at: now,
                updated_at: now,
            };
            state.reviewers.push(reviewer.clone());
            Ok(reviewer)
        }

        async fn get_reviewer(&self, id: ReviewerId) -> Result<Reviewer, PortError> {
            self.state
                .read()
                .await
                .reviewers
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Reviewer", id))
        }

        async fn find_reviewer_by_username(
            &self,
            username: &str,
        ) -> Result<Option<Reviewer>, PortError> {
            Ok(self
                .state
                .read()
                .await
                .reviewers
                .iter()
                .find(|r| r.username == username)
                .cloned())
        }

        async fn find_reviewer_by_email(&self, email: &str) -> Result<Option<Reviewer>, PortError> {
            Ok(self
                .state
                .read()
                .await
                .reviewers
                .iter()
                .find(|r| r.email == email)
                .cloned())
        }

        async fn list_reviewers(&self, page: PageRequest) -> Result<Page<Reviewer>, PortError> {
            let state = self.state.read().await;
            let newest_first: Vec<Reviewer> = state.reviewers.iter().rev().cloned().collect();
            Ok(Self::paginate(newest_first, page))
        }

        async fn update_reviewer(
            &self,
            id: ReviewerId,
            patch: UpdateReviewer,
        ) -> Result<Reviewer, PortError> {
            ReviewValidator::validate_update_reviewer(&patch)
                .into_result()
                .map_err(PortError::from)?;

            let mut state = self.state.write().await;
            if let Some(ref username) = patch.username {
                if state
                    .reviewers
                    .iter()
                    .any(|r| r.id != id && &r.username == username)
                {
                    return Err(PortError::duplicate_key(format!(
                        "reviewer with username '{username}' already exists"
                    )));
                }
            }
            if let Some(ref email) = patch.email {
                if state.reviewers.iter().any(|r| r.id != id && &r.email == email) {
                    return Err(PortError::duplicate_key(format!(
                        "reviewer with email '{email}' already exists"
                    )));
                }
            }

            let reviewer = state
                .reviewers
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| PortError::not_found("Reviewer", id))?;

            if let Some(username) = patch.username {
                reviewer.username = username;
            }
            if let Some(email) = patch.email {
                reviewer.email = email;
            }
            if let Some(full_name) = patch.full_name {
                reviewer.full_name = Some(full_name);
            }
            reviewer.updated_at = Utc::now();
            Ok(reviewer.clone())
        }

        async fn delete_reviewer(&self, id: ReviewerId) -> Result<(), PortError> {
            let mut state = self.state.write().await;
            let position = state
                .reviewers
                .iter()
                .position(|r| r.id == id)
                .ok_or_else(|| PortError::not_found("Reviewer", id))?;

            let has_reviews = state.reviews.iter().any(|r| r.reviewer_id == id);
            if has_reviews {
                match self.delete_policy {
                    DeletePolicy::Restrict => {
                        return Err(PortError::delete_conflict(format!(
                            "reviewer {id} still has reviews"
                        )));
                    }
                    DeletePolicy::Cascade => {
                        state.reviews.retain(|r| r.reviewer_id != id);
                    }
                }
            }
            state.reviewers.remove(position);
            Ok(())
        }
    }

    #[async_trait]
    impl ReviewedObjectStore for MockReviewStore {
        async fn create_reviewed_object(
            &self,
            input: NewReviewedObject,
        ) -> Result<ReviewedObject, PortError> {
            ReviewValidator::validate_new_object(&input)
                .into_result()
                .map_err(PortError::from)?;

            let mut state = self.state.write().await;
            if state
                .objects
                .iter()
                .any(|o| o.object_type == input.object_type && o.external_id == input.external_id)
            {
                return Err(PortError::duplicate_key(format!(
                    "object '{}/{}' already exists",
                    input.object_type, input.external_id
                )));
            }

            let now = Utc::now();
            let object = ReviewedObject {
                id: ReviewedObjectId::new(),
                object_type: input.object_type,
                external_id: input.external_id,
                object_name: input.object_name,
                description: input.description,
                metadata: input.metadata,
                created_at: now,
                updated_at: now,
            };
            state.objects.push(object.clone());
            Ok(object)
        }

        async fn get_reviewed_object(
            &self,
            id: ReviewedObjectId,
        ) -> Result<ReviewedObject, PortError> {
            self.state
                .read()
                .await
                .objects
                .iter()
                .find(|o| o.id == id)
                .cloned()
                .ok_or_else(|| PortError::not_found("ReviewedObject", id))
        }

        async fn find_reviewed_object_by_external_id(
            &self,
            object_type: &str,
            external_id: &str,
        ) -> Result<Option<ReviewedObject>, PortError> {
            Ok(self
                .state
                .read()
                .await
                .objects
                .iter()
                .find(|o| o.object_type == object_type && o.external_id == external_id)
                .cloned())
        }

        async fn list_reviewed_objects(
            &self,
            query: ReviewedObjectQuery,
            page: PageRequest,
        ) -> Result<Page<ReviewedObject>, PortError> {
            let state = self.state.read().await;
            let newest_first: Vec<ReviewedObject> = state
                .objects
                .iter()
                .rev()
                .filter(|o| {
                    query
                        .object_type
                        .as_deref()
                        .is_none_or(|t| o.object_type == t)
                })
                .cloned()
                .collect();
            Ok(Self::paginate(newest_first, page))
        }

        async fn update_reviewed_object(
            &self,
            id: ReviewedObjectId,
            patch: UpdateReviewedObject,
        ) -> Result<ReviewedObject, PortError> {
            ReviewValidator::validate_update_object(&patch)
                .into_result()
                .map_err(PortError::from)?;

            let mut state = self.state.write().await;
            let position = state
                .objects
                .iter()
                .position(|o| o.id == id)
                .ok_or_else(|| PortError::not_found("ReviewedObject", id))?;

            // Work out what the (type, external_id) pair would become
            let next_type = patch
                .object_type
                .clone()
                .unwrap_or_else(|| state.objects[position].object_type.clone());
            let next_external = patch
                .external_id
                .clone()
                .unwrap_or_else(|| state.objects[position].external_id.clone());
            if state
                .objects
                .iter()
                .any(|o| o.id != id && o.object_type == next_type && o.external_id == next_external)
            {
                return Err(PortError::duplicate_key(format!(
                    "object '{next_type}/{next_external}' already exists"
                )));
            }

            let object = &mut state.objects[position];

            if let Some(object_type) = patch.object_type {
                object.object_type = object_type;
            }
            if let Some(external_id) = patch.external_id {
                object.external_id = external_id;
            }
            if let Some(object_name) = patch.object_name {
                object.object_name = object_name;
            }
            if let Some(description) = patch.description {
                object.description = Some(description);
            }
            if let Some(metadata) = patch.metadata {
                object.metadata = Some(metadata);
            }
            object.updated_at = Utc::now();
            Ok(object.clone())
        }

        async fn delete_reviewed_object(&self, id: ReviewedObjectId) -> Result<(), PortError> {
            let mut state = self.state.write().await;
            let position = state
                .objects
                .iter()
                .position(|o| o.id == id)
                .ok_or_else(|| PortError::not_found("ReviewedObject", id))?;

            let has_reviews = state.reviews.iter().any(|r| r.reviewed_object_id == id);
            if has_reviews {
                match self.delete_policy {
                    DeletePolicy::Restrict => {
                        return Err(PortError::delete_conflict(format!(
                            "reviewed object {id} still has reviews"
                        )));
                    }
                    DeletePolicy::Cascade => {
                        state.reviews.retain(|r| r.reviewed_object_id != id);
                    }
                }
            }
            state.objects.remove(position);
            Ok(())
        }
    }

    #[async_trait]
    impl ReviewStore for MockReviewStore {
        async fn create_review(&self, input: NewReview) -> Result<Review, PortError> {
            ReviewValidator::validate_new_review(&input)
                .into_result()
                .map_err(PortError::from)?;

            let mut state = self.state.write().await;
            if !state.reviewers.iter().any(|r| r.id == input.reviewer_id) {
                return Err(PortError::foreign_key(format!(
                    "reviewer {} does not exist",
                    input.reviewer_id
                )));
            }
            if !state
                .objects
                .iter()
                .any(|o| o.id == input.reviewed_object_id)
            {
                return Err(PortError::foreign_key(format!(
                    "reviewed object {} does not exist",
                    input.reviewed_object_id
                )));
            }
            if state.reviews.iter().any(|r| {
                r.reviewer_id == input.reviewer_id
                    && r.reviewed_object_id == input.reviewed_object_id
            }) {
                return Err(PortError::duplicate_key(format!(
                    "reviewer {} already reviewed object {}",
                    input.reviewer_id, input.reviewed_object_id
                )));
            }

            let now = Utc::now();
            let review = Review {
                id: ReviewId::new(),
                reviewer_id: input.reviewer_id,
                reviewed_object_id: input.reviewed_object_id,
                text_review: input.text_review,
                star_rating: input.star_rating,
                thumbs_rating: input.thumbs_rating,
                created_at: now,
                updated_at: now,
            };
            state.reviews.push(review.clone());
            Ok(review)
        }

        async fn get_review(&self, id: ReviewId) -> Result<Review, PortError> {
            self.state
                .read()
                .await
                .reviews
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Review", id))
        }

        async fn find_review_by_reviewer_and_object(
            &self,
            reviewer_id: ReviewerId,
            reviewed_object_id: ReviewedObjectId,
        ) -> Result<Option<Review>, PortError> {
            Ok(self
                .state
                .read()
                .await
                .reviews
                .iter()
                .find(|r| {
                    r.reviewer_id == reviewer_id && r.reviewed_object_id == reviewed_object_id
                })
                .cloned())
        }

        async fn list_reviews(
            &self,
            query: ReviewQuery,
            page: PageRequest,
        ) -> Result<Page<Review>, PortError> {
            let state = self.state.read().await;
            let newest_first: Vec<Review> = state
                .reviews
                .iter()
                .rev()
                .filter(|r| {
                    query.reviewer_id.is_none_or(|id| r.reviewer_id == id)
                        && query
                            .reviewed_object_id
                            .is_none_or(|id| r.reviewed_object_id == id)
                })
                .cloned()
                .collect();
            Ok(Self::paginate(newest_first, page))
        }

        async fn update_review(
            &self,
            id: ReviewId,
            patch: UpdateReview,
        ) -> Result<Review, PortError> {
            ReviewValidator::validate_update_review(&patch)
                .into_result()
                .map_err(PortError::from)?;

            let mut state = self.state.write().await;
            let review = state
                .reviews
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| PortError::not_found("Review", id))?;

            if let Some(text_review) = patch.text_review {
                review.text_review = Some(text_review);
            }
            if let Some(star_rating) = patch.star_rating {
                review.star_rating = Some(star_rating);
            }
            if let Some(thumbs_rating) = patch.thumbs_rating {
                review.thumbs_rating = Some(thumbs_rating);
            }
            review.updated_at = Utc::now();
            Ok(review.clone())
        }

        async fn delete_review(&self, id: ReviewId) -> Result<(), PortError> {
            let mut state = self.state.write().await;
            let position = state
                .reviews
                .iter()
                .position(|r| r.id == id)
                .ok_or_else(|| PortError::not_found("Review", id))?;
            state.reviews.remove(position);
            Ok(())
        }

        async fn statistics(
            &self,
            reviewed_object_id: ReviewedObjectId,
        ) -> Result<ReviewStatistics, PortError> {
            let state = self.state.read().await;
            if !state.objects.iter().any(|o| o.id == reviewed_object_id) {
                return Err(PortError::not_found("ReviewedObject", reviewed_object_id));
            }

            let mut stats = ReviewStatistics::empty(reviewed_object_id);
            let mut rating_sum: i64 = 0;
            let mut rated_count: u64 = 0;

            for review in state
                .reviews
                .iter()
                .filter(|r| r.reviewed_object_id == reviewed_object_id)
            {
                stats.total_reviews += 1;
                if let Some(rating) = review.star_rating {
                    rating_sum += i64::from(rating);
                    rated_count += 1;
                }
                match review.thumbs_rating {
                    Some(crate::review::ThumbsRating::Up) => stats.thumbs_up_count += 1,
                    Some(crate::review::ThumbsRating::Down) => stats.thumbs_down_count += 1,
                    None => {}
                }
                stats.latest_review_at = Some(
                    stats
                        .latest_review_at
                        .map_or(review.created_at, |latest| latest.max(review.created_at)),
                );
            }

            if rated_count > 0 {
                stats.average_rating = Some(rating_sum as f64 / rated_count as f64);
            }
            Ok(stats)
        }
    }
}
