//! Reviewer repository implementation
//!
//! Database access for reviewer accounts. Username and email uniqueness is
//! enforced by the `uq_reviewers_username` / `uq_reviewers_email`
//! constraints; inserts and updates always attempt the write and let the
//! error translation layer turn a violation into
//! [`DatabaseError::DuplicateEntry`].

use chrono::Utc;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DatabaseError;

/// Repository for managing reviewer rows
#[derive(Debug, Clone)]
pub struct ReviewerRepository {
    pool: PgPool,
}

impl ReviewerRepository {
    /// Creates a new ReviewerRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new reviewer
    ///
    /// # Returns
    ///
    /// The created row with generated id and timestamps;
    /// `updated_at == created_at` on insert.
    pub async fn insert(&self, reviewer: InsertReviewer) -> Result<ReviewerRow, DatabaseError> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        debug!(%id, username = %reviewer.username, "inserting reviewer");

        let row = sqlx::query_as::<_, ReviewerRow>(
            r#"
            INSERT INTO reviewers (id, username, email, full_name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING id, username, email, full_name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(reviewer.username)
        .bind(reviewer.email)
        .bind(reviewer.full_name)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Retrieves a reviewer by id
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<ReviewerRow>, DatabaseError> {
        let row = sqlx::query_as::<_, ReviewerRow>(
            r#"
            SELECT id, username, email, full_name, created_at, updated_at
            FROM reviewers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Looks a reviewer up by exact username
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<ReviewerRow>, DatabaseError> {
        let row = sqlx::query_as::<_, ReviewerRow>(
            r#"
            SELECT id, username, email, full_name, created_at, updated_at
            FROM reviewers
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Looks a reviewer up by exact email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<ReviewerRow>, DatabaseError> {
        let row = sqlx::query_as::<_, ReviewerRow>(
            r#"
            SELECT id, username, email, full_name, created_at, updated_at
            FROM reviewers
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Returns reviewers ordered by creation time descending
    ///
    /// Callers over-fetch by one row to learn whether more pages exist.
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<ReviewerRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, ReviewerRow>(
            r#"
            SELECT id, username, email, full_name, created_at, updated_at
            FROM reviewers
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

    /// Applies a partial patch, recomputing `updated_at`
    ///
    /// Fields absent from the patch keep their stored value. Returns `None`
    /// when the id does not resolve.
    pub async fn update(
        &self,
        id: Uuid,
        patch: ReviewerPatch,
    ) -> Result<Option<ReviewerRow>, DatabaseError> {
        debug!(%id, "updating reviewer");

        let row = sqlx::query_as::<_, ReviewerRow>(
            r#"
            UPDATE reviewers
            SET username = COALESCE($2, username),
                email = COALESCE($3, email),
                full_name = COALESCE($4, full_name),
                updated_at = $5
            WHERE id = $1
            RETURNING id, username, email, full_name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.username)
        .bind(patch.email)
        .bind(patch.full_name)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Deletes a reviewer
    ///
    /// A reviewer with dependent reviews trips the restricting foreign key,
    /// which surfaces as [`DatabaseError::ForeignKeyViolation`].
    ///
    /// # Returns
    ///
    /// The number of rows removed (0 when the id did not resolve)
    pub async fn delete(&self, id: Uuid) -> Result<u64, DatabaseError> {
        debug!(%id, "deleting reviewer");

        let result = sqlx::query("DELETE FROM reviewers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a reviewer and all their reviews in one transaction
    ///
    /// Used when the store is configured for cascading deletes; the removal
    /// is all-or-nothing.
    pub async fn delete_cascading(&self, id: Uuid) -> Result<u64, DatabaseError> {
        debug!(%id, "deleting reviewer with cascade");

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM reviews WHERE reviewer_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM reviewers WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }
}

// ============================================================================
// Row and input types
// ============================================================================

/// Database row representation of a reviewer
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReviewerRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Data for inserting a new reviewer
#[derive(Debug, Clone)]
pub struct InsertReviewer {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
}

/// Partial update for a reviewer; `None` fields keep their stored value
#[derive(Debug, Clone, Default)]
pub struct ReviewerPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
}
