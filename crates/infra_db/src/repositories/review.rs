//! Review repository implementation
//!
//! Database access for reviews, including the per-object statistics
//! aggregate. Duplicate reviews by the same reviewer on the same object are
//! prevented by the `uq_reviewer_object` constraint: concurrent creates for
//! the same pair race at the constraint and exactly one insert wins, the
//! other surfacing as [`DatabaseError::DuplicateEntry`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DatabaseError;

/// Repository for managing review rows
#[derive(Debug, Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    /// Creates a new ReviewRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new review
    ///
    /// Missing reviewer/object references trip the foreign keys
    /// (`fk_reviews_reviewer`, `fk_reviews_reviewed_object`); a repeat
    /// review of the same object by the same reviewer trips
    /// `uq_reviewer_object`.
    pub async fn insert(&self, review: InsertReview) -> Result<ReviewRow, DatabaseError> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        debug!(%id, reviewer_id = %review.reviewer_id, reviewed_object_id = %review.reviewed_object_id, "inserting review");

        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            INSERT INTO reviews
                (id, reviewer_id, reviewed_object_id, text_review, star_rating, thumbs_rating,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING id, reviewer_id, reviewed_object_id, text_review, star_rating,
                      thumbs_rating, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(review.reviewer_id)
        .bind(review.reviewed_object_id)
        .bind(review.text_review)
        .bind(review.star_rating)
        .bind(review.thumbs_rating)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Retrieves a review by id
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<ReviewRow>, DatabaseError> {
        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT id, reviewer_id, reviewed_object_id, text_review, star_rating,
                   thumbs_rating, created_at, updated_at
            FROM reviews
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Looks up the unique review one reviewer wrote for one object
    pub async fn find_by_pair(
        &self,
        reviewer_id: Uuid,
        reviewed_object_id: Uuid,
    ) -> Result<Option<ReviewRow>, DatabaseError> {
        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT id, reviewer_id, reviewed_object_id, text_review, star_rating,
                   thumbs_rating, created_at, updated_at
            FROM reviews
            WHERE reviewer_id = $1 AND reviewed_object_id = $2
            "#,
        )
        .bind(reviewer_id)
        .bind(reviewed_object_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Returns reviews ordered by creation time descending
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<ReviewRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT id, reviewer_id, reviewed_object_id, text_review, star_rating,
                   thumbs_rating, created_at, updated_at
            FROM reviews
            ORDER BY created_at DESC, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Returns one reviewer's reviews, newest first
    pub async fn list_by_reviewer(
        &self,
        reviewer_id: Uuid,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<ReviewRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT id, reviewer_id, reviewed_object_id, text_review, star_rating,
                   thumbs_rating, created_at, updated_at
            FROM reviews
            WHERE reviewer_id = $1
            ORDER BY created_at DESC, id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(reviewer_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Returns one object's reviews, newest first
    pub async fn list_by_object(
        &self,
        reviewed_object_id: Uuid,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<ReviewRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT id, reviewer_id, reviewed_object_id, text_review, star_rating,
                   thumbs_rating, created_at, updated_at
            FROM reviews
            WHERE reviewed_object_id = $1
            ORDER BY created_at DESC, id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(reviewed_object_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Applies a partial patch, recomputing `updated_at`
    ///
    /// The (reviewer, object) pair is not patchable.
    pub async fn update(
        &self,
        id: Uuid,
        patch: ReviewPatch,
    ) -> Result<Option<ReviewRow>, DatabaseError> {
        debug!(%id, "updating review");

        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            UPDATE reviews
            SET text_review = COALESCE($2, text_review),
                star_rating = COALESCE($3, star_rating),
                thumbs_rating = COALESCE($4, thumbs_rating),
                updated_at = $5
            WHERE id = $1
            RETURNING id, reviewer_id, reviewed_object_id, text_review, star_rating,
                      thumbs_rating, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.text_review)
        .bind(patch.star_rating)
        .bind(patch.thumbs_rating)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Deletes a review
    pub async fn delete(&self, id: Uuid) -> Result<u64, DatabaseError> {
        debug!(%id, "deleting review");

        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Computes aggregate statistics for one reviewed object
    ///
    /// Single aggregate query, recomputed on each call; nothing is cached.
    /// Reviews without a star rating are excluded from the average, which
    /// is NULL when no review carries a rating.
    pub async fn statistics(
        &self,
        reviewed_object_id: Uuid,
    ) -> Result<ReviewStatisticsRow, DatabaseError> {
        let row = sqlx::query_as::<_, ReviewStatisticsRow>(
            r#"
            SELECT
                COUNT(*) AS total_reviews,
                AVG(star_rating) AS average_rating,
                COUNT(*) FILTER (WHERE thumbs_rating = 'up') AS thumbs_up_count,
                COUNT(*) FILTER (WHERE thumbs_rating = 'down') AS thumbs_down_count,
                MAX(created_at) AS latest_review_at
            FROM reviews
            WHERE reviewed_object_id = $1
            "#,
        )
        .bind(reviewed_object_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}

// ============================================================================
// Type definitions
// ============================================================================

/// Thumbs verdict as stored in the `thumbs_rating` PostgreSQL enum type
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "thumbs_rating", rename_all = "lowercase")]
pub enum ThumbsRating {
    Up,
    Down,
}

// ============================================================================
// Row and input types
// ============================================================================

/// Database row representation of a review
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReviewRow {
    pub id: Uuid,
    pub reviewer_id: Uuid,
    pub reviewed_object_id: Uuid,
    pub text_review: Option<String>,
    pub star_rating: Option<i16>,
    pub thumbs_rating: Option<ThumbsRating>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Aggregate row computed by [`ReviewRepository::statistics`]
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReviewStatisticsRow {
    pub total_reviews: i64,
    pub average_rating: Option<Decimal>,
    pub thumbs_up_count: i64,
    pub thumbs_down_count: i64,
    pub latest_review_at: Option<DateTime<Utc>>,
}

/// Data for inserting a new review
#[derive(Debug, Clone)]
pub struct InsertReview {
    pub reviewer_id: Uuid,
    pub reviewed_object_id: Uuid,
    pub text_review: Option<String>,
    pub star_rating: Option<i16>,
    pub thumbs_rating: Option<ThumbsRating>,
}

/// Partial update for a review; `None` fields keep their stored value
#[derive(Debug, Clone, Default)]
pub struct ReviewPatch {
    pub text_review: Option<String>,
    pub star_rating: Option<i16>,
    pub thumbs_rating: Option<ThumbsRating>,
}
