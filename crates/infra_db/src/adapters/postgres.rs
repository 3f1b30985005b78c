//! PostgreSQL review-store adapter
//!
//! This module provides the database-backed implementation of the review
//! domain's port traits, built on the per-entity repositories.
//!
//! # Overview
//!
//! The `PostgresReviewStore`:
//!
//! - Validates write payloads before any store interaction
//! - Translates repository row types back to domain entities
//! - Maps [`DatabaseError`] to the [`PortError`] taxonomy, adding
//!   per-operation context (a foreign-key violation raised by a DELETE is a
//!   delete conflict; the same code on INSERT is a bad reference)
//! - Applies the configured [`DeletePolicy`] for deletes with dependents
//!
//! No error leaves this layer while a transaction is open: single-statement
//! operations roll back implicitly, and the cascading deletes run inside an
//! explicit transaction that commits last.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool_from_url, PostgresReviewStore};
//! use domain_reviews::{ReviewerStore, NewReviewer};
//!
//! let pool = create_pool_from_url("postgres://localhost/reviews").await?;
//! let store = PostgresReviewStore::new(pool);
//! let reviewer = store.create_reviewer(NewReviewer::new("ada", "ada@example.com")).await?;
//! ```

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use sqlx::PgPool;

use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, Page, PageRequest, PortError,
    ReviewId, ReviewedObjectId, ReviewerId,
};
use domain_reviews::{
    DeletePolicy, NewReview, NewReviewedObject, NewReviewer, Review, ReviewQuery, ReviewStatistics,
    ReviewStore, ReviewValidator, ReviewedObject, ReviewedObjectQuery, ReviewedObjectStore,
    Reviewer, ReviewerStore, ThumbsRating, UpdateReview, UpdateReviewedObject, UpdateReviewer,
};

use crate::error::DatabaseError;
use crate::repositories::{
    InsertReview, InsertReviewedObject, InsertReviewer, ReviewPatch, ReviewRepository, ReviewRow,
    ReviewedObjectPatch, ReviewedObjectRepository, ReviewedObjectRow, ReviewerPatch,
    ReviewerRepository, ReviewerRow, ThumbsRating as DbThumbsRating,
};

/// PostgreSQL-backed implementation of the review store ports
///
/// Cloning is cheap; all clones share the same pool.
#[derive(Debug, Clone)]
pub struct PostgresReviewStore {
    reviewers: ReviewerRepository,
    objects: ReviewedObjectRepository,
    reviews: ReviewRepository,
    pool: PgPool,
    delete_policy: DeletePolicy,
}

impl PostgresReviewStore {
    /// Creates a store with the default Restrict delete policy
    pub fn new(pool: PgPool) -> Self {
        Self::with_delete_policy(pool, DeletePolicy::default())
    }

    /// Creates a store with an explicit delete policy
    pub fn with_delete_policy(pool: PgPool, delete_policy: DeletePolicy) -> Self {
        Self {
            reviewers: ReviewerRepository::new(pool.clone()),
            objects: ReviewedObjectRepository::new(pool.clone()),
            reviews: ReviewRepository::new(pool.clone()),
            pool,
            delete_policy,
        }
    }

    /// The delete policy this store was configured with
    pub fn delete_policy(&self) -> DeletePolicy {
        self.delete_policy
    }

    fn page_args(page: PageRequest) -> (i64, i64) {
        // Over-fetch by one row so the page can report has_more
        (i64::from(page.offset()), i64::from(page.limit()) + 1)
    }
}

impl DomainPort for PostgresReviewStore {}

#[async_trait]
impl HealthCheckable for PostgresReviewStore {
    /// Checks database connectivity with a trivial query
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;
        match result {
            Ok(_) => HealthCheckResult {
                adapter_id: "postgres-review-store".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms,
                message: None,
                checked_at: Utc::now(),
            },
            Err(e) => HealthCheckResult {
                adapter_id: "postgres-review-store".to_string(),
                status: AdapterHealth::Unhealthy,
                latency_ms,
                message: Some(e.to_string()),
                checked_at: Utc::now(),
            },
        }
    }
}

#[async_trait]
impl ReviewerStore for PostgresReviewStore {
    async fn create_reviewer(&self, input: NewReviewer) -> Result<Reviewer, PortError> {
        ReviewValidator::validate_new_reviewer(&input)
            .into_result()
            .map_err(PortError::from)?;

        let row = self
            .reviewers
            .insert(InsertReviewer {
                username: input.username,
                email: input.email,
                full_name: input.full_name,
            })
            .await?;
        Ok(reviewer_from_row(row))
    }

    async fn get_reviewer(&self, id: ReviewerId) -> Result<Reviewer, PortError> {
        self.reviewers
            .get_by_id(id.into())
            .await?
            .map(reviewer_from_row)
            .ok_or_else(|| PortError::not_found("Reviewer", id))
    }

    async fn find_reviewer_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Reviewer>, PortError> {
        Ok(self
            .reviewers
            .find_by_username(username)
            .await?
            .map(reviewer_from_row))
    }

    async fn find_reviewer_by_email(&self, email: &str) -> Result<Option<Reviewer>, PortError> {
        Ok(self
            .reviewers
            .find_by_email(email)
            .await?
            .map(reviewer_from_row))
    }

    async fn list_reviewers(&self, page: PageRequest) -> Result<Page<Reviewer>, PortError> {
        let (offset, limit) = Self::page_args(page);
        let rows = self.reviewers.list(offset, limit).await?;
        Ok(Page::from_overfetched(page, rows).map(reviewer_from_row))
    }

    async fn update_reviewer(
        &self,
        id: ReviewerId,
        patch: UpdateReviewer,
    ) -> Result<Reviewer, PortError> {
        ReviewValidator::validate_update_reviewer(&patch)
            .into_result()
            .map_err(PortError::from)?;

        self.reviewers
            .update(
                id.into(),
                ReviewerPatch {
                    username: patch.username,
                    email: patch.email,
                    full_name: patch.full_name,
                },
            )
            .await?
            .map(reviewer_from_row)
            .ok_or_else(|| PortError::not_found("Reviewer", id))
    }

    async fn delete_reviewer(&self, id: ReviewerId) -> Result<(), PortError> {
        let deleted = match self.delete_policy {
            DeletePolicy::Restrict => self
                .reviewers
                .delete(id.into())
                .await
                .map_err(|e| delete_error(e, "Reviewer", id))?,
            DeletePolicy::Cascade => self.reviewers.delete_cascading(id.into()).await?,
        };
        if deleted == 0 {
            return Err(PortError::not_found("Reviewer", id));
        }
        Ok(())
    }
}

#[async_trait]
impl ReviewedObjectStore for PostgresReviewStore {
    async fn create_reviewed_object(
        &self,
        input: NewReviewedObject,
    ) -> Result<ReviewedObject, PortError> {
        ReviewValidator::validate_new_object(&input)
            .into_result()
            .map_err(PortError::from)?;

        let row = self
            .objects
            .insert(InsertReviewedObject {
                object_type: input.object_type,
                external_id: input.external_id,
                object_name: input.object_name,
                description: input.description,
                metadata: input.metadata,
            })
            .await?;
        Ok(object_from_row(row))
    }

    async fn get_reviewed_object(
        &self,
        id: ReviewedObjectId,
    ) -> Result<ReviewedObject, PortError> {
        self.objects
            .get_by_id(id.into())
            .await?
            .map(object_from_row)
            .ok_or_else(|| PortError::not_found("ReviewedObject", id))
    }

    async fn find_reviewed_object_by_external_id(
        &self,
        object_type: &str,
        external_id: &str,
    ) -> Result<Option<ReviewedObject>, PortError> {
        Ok(self
            .objects
            .find_by_type_and_external_id(object_type, external_id)
            .await?
            .map(object_from_row))
    }

    async fn list_reviewed_objects(
        &self,
        query: ReviewedObjectQuery,
        page: PageRequest,
    ) -> Result<Page<ReviewedObject>, PortError> {
        let (offset, limit) = Self::page_args(page);
        let rows = match query.object_type.as_deref() {
            Some(object_type) => self.objects.list_by_type(object_type, offset, limit).await?,
            None => self.objects.list(offset, limit).await?,
        };
        Ok(Page::from_overfetched(page, rows).map(object_from_row))
    }

    async fn update_reviewed_object(
        &self,
        id: ReviewedObjectId,
        patch: UpdateReviewedObject,
    ) -> Result<ReviewedObject, PortError> {
        ReviewValidator::validate_update_object(&patch)
            .into_result()
            .map_err(PortError::from)?;

        self.objects
            .update(
                id.into(),
                ReviewedObjectPatch {
                    object_type: patch.object_type,
                    external_id: patch.external_id,
                    object_name: patch.object_name,
                    description: patch.description,
                    metadata: patch.metadata,
                },
            )
            .await?
            .map(object_from_row)
            .ok_or_else(|| PortError::not_found("ReviewedObject", id))
    }

    async fn delete_reviewed_object(&self, id: ReviewedObjectId) -> Result<(), PortError> {
        let deleted = match self.delete_policy {
            DeletePolicy::Restrict => self
                .objects
                .delete(id.into())
                .await
                .map_err(|e| delete_error(e, "ReviewedObject", id))?,
            DeletePolicy::Cascade => self.objects.delete_cascading(id.into()).await?,
        };
        if deleted == 0 {
            return Err(PortError::not_found("ReviewedObject", id));
        }
        Ok(())
    }
}

#[async_trait]
impl ReviewStore for PostgresReviewStore {
    async fn create_review(&self, input: NewReview) -> Result<Review, PortError> {
        ReviewValidator::validate_new_review(&input)
            .into_result()
            .map_err(PortError::from)?;

        let row = self
            .reviews
            .insert(InsertReview {
                reviewer_id: input.reviewer_id.into(),
                reviewed_object_id: input.reviewed_object_id.into(),
                text_review: input.text_review,
                star_rating: input.star_rating,
                thumbs_rating: input.thumbs_rating.map(thumbs_to_db),
            })
            .await?;
        Ok(review_from_row(row))
    }

    async fn get_review(&self, id: ReviewId) -> Result<Review, PortError> {
        self.reviews
            .get_by_id(id.into())
            .await?
            .map(review_from_row)
            .ok_or_else(|| PortError::not_found("Review", id))
    }

    async fn find_review_by_reviewer_and_object(
        &self,
        reviewer_id: ReviewerId,
        reviewed_object_id: ReviewedObjectId,
    ) -> Result<Option<Review>, PortError> {
        Ok(self
            .reviews
            .find_by_pair(reviewer_id.into(), reviewed_object_id.into())
            .await?
            .map(review_from_row))
    }

    async fn list_reviews(
        &self,
        query: ReviewQuery,
        page: PageRequest,
    ) -> Result<Page<Review>, PortError> {
        let (offset, limit) = Self::page_args(page);
        let rows = match (query.reviewer_id, query.reviewed_object_id) {
            (Some(reviewer_id), None) => {
                self.reviews
                    .list_by_reviewer(reviewer_id.into(), offset, limit)
                    .await?
            }
            (None, Some(reviewed_object_id)) => {
                self.reviews
                    .list_by_object(reviewed_object_id.into(), offset, limit)
                    .await?
            }
            (Some(reviewer_id), Some(reviewed_object_id)) => {
                // At most one review exists for a pair
                self.reviews
                    .find_by_pair(reviewer_id.into(), reviewed_object_id.into())
                    .await?
                    .into_iter()
                    .collect()
            }
            (None, None) => self.reviews.list(offset, limit).await?,
        };
        Ok(Page::from_overfetched(page, rows).map(review_from_row))
    }

    async fn update_review(
        &self,
        id: ReviewId,
        patch: UpdateReview,
    ) -> Result<Review, PortError> {
        ReviewValidator::validate_update_review(&patch)
            .into_result()
            .map_err(PortError::from)?;

        self.reviews
            .update(
                id.into(),
                ReviewPatch {
                    text_review: patch.text_review,
                    star_rating: patch.star_rating,
                    thumbs_rating: patch.thumbs_rating.map(thumbs_to_db),
                },
            )
            .await?
            .map(review_from_row)
            .ok_or_else(|| PortError::not_found("Review", id))
    }

    async fn delete_review(&self, id: ReviewId) -> Result<(), PortError> {
        let deleted = self.reviews.delete(id.into()).await?;
        if deleted == 0 {
            return Err(PortError::not_found("Review", id));
        }
        Ok(())
    }

    async fn statistics(
        &self,
        reviewed_object_id: ReviewedObjectId,
    ) -> Result<ReviewStatistics, PortError> {
        // The aggregate alone cannot distinguish "no reviews" from "no such
        // object", so resolve the object first
        if self
            .objects
            .get_by_id(reviewed_object_id.into())
            .await?
            .is_none()
        {
            return Err(PortError::not_found("ReviewedObject", reviewed_object_id));
        }

        let row = self.reviews.statistics(reviewed_object_id.into()).await?;
        Ok(ReviewStatistics {
            reviewed_object_id,
            total_reviews: row.total_reviews.max(0) as u64,
            average_rating: row.average_rating.and_then(|d| d.to_f64()),
            thumbs_up_count: row.thumbs_up_count.max(0) as u64,
            thumbs_down_count: row.thumbs_down_count.max(0) as u64,
            latest_review_at: row.latest_review_at,
        })
    }
}

// ============================================================================
// Row/domain conversions
// ============================================================================

fn reviewer_from_row(row: ReviewerRow) -> Reviewer {
    Reviewer {
        id: ReviewerId::from_uuid(row.id),
        username: row.username,
        email: row.email,
        full_name: row.full_name,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

fn object_from_row(row: ReviewedObjectRow) -> ReviewedObject {
    ReviewedObject {
        id: ReviewedObjectId::from_uuid(row.id),
        object_type: row.object_type,
        external_id: row.external_id,
        object_name: row.object_name,
        description: row.description,
        metadata: row.metadata,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

fn review_from_row(row: ReviewRow) -> Review {
    Review {
        id: ReviewId::from_uuid(row.id),
        reviewer_id: ReviewerId::from_uuid(row.reviewer_id),
        reviewed_object_id: ReviewedObjectId::from_uuid(row.reviewed_object_id),
        text_review: row.text_review,
        star_rating: row.star_rating,
        thumbs_rating: row.thumbs_rating.map(thumbs_from_db),
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

fn thumbs_to_db(thumbs: ThumbsRating) -> DbThumbsRating {
    match thumbs {
        ThumbsRating::Up => DbThumbsRating::Up,
        ThumbsRating::Down => DbThumbsRating::Down,
    }
}

fn thumbs_from_db(thumbs: DbThumbsRating) -> ThumbsRating {
    match thumbs {
        DbThumbsRating::Up => ThumbsRating::Up,
        DbThumbsRating::Down => ThumbsRating::Down,
    }
}

/// Maps a delete-time database error to the domain taxonomy
///
/// A foreign-key violation raised by a DELETE means dependents still point
/// at the row; under the Restrict policy that is a delete conflict, not a
/// bad reference.
fn delete_error(error: DatabaseError, entity: &str, id: impl std::fmt::Display) -> PortError {
    match error {
        DatabaseError::ForeignKeyViolation(_) => PortError::delete_conflict(format!(
            "{entity} {id} still has dependent reviews"
        )),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbs_conversions_are_inverse() {
        for thumbs in [ThumbsRating::Up, ThumbsRating::Down] {
            assert_eq!(thumbs_from_db(thumbs_to_db(thumbs)), thumbs);
        }
    }

    #[test]
    fn test_delete_error_maps_fk_to_conflict() {
        let error = delete_error(
            DatabaseError::ForeignKeyViolation("fk_reviews_reviewer".into()),
            "Reviewer",
            "RVR-1",
        );
        assert!(matches!(error, PortError::DeleteConflict { .. }));

        let error = delete_error(DatabaseError::PoolExhausted, "Reviewer", "RVR-1");
        assert!(error.is_transient());
    }
}
