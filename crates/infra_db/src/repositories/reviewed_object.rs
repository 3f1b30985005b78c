//! Reviewed-object repository implementation
//!
//! Database access for the generic "thing being reviewed". The
//! (object_type, external_id) pair is unique (`uq_object_type_id`); the
//! `metadata` column is schemaless JSONB stored and returned verbatim.

use chrono::Utc;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DatabaseError;

/// Repository for managing reviewed-object rows
#[derive(Debug, Clone)]
pub struct ReviewedObjectRepository {
    pool: PgPool,
}

impl ReviewedObjectRepository {
    /// Creates a new ReviewedObjectRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new reviewed object
    pub async fn insert(
        &self,
        object: InsertReviewedObject,
    ) -> Result<ReviewedObjectRow, DatabaseError> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        debug!(%id, object_type = %object.object_type, external_id = %object.external_id, "inserting reviewed object");

        let row = sqlx::query_as::<_, ReviewedObjectRow>(
            r#"
            INSERT INTO reviewed_objects
                (id, object_type, external_id, object_name, description, metadata, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING id, object_type, external_id, object_name, description, metadata,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(object.object_type)
        .bind(object.external_id)
        .bind(object.object_name)
        .bind(object.description)
        .bind(object.metadata)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Retrieves a reviewed object by id
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<ReviewedObjectRow>, DatabaseError> {
        let row = sqlx::query_as::<_, ReviewedObjectRow>(
            r#"
            SELECT id, object_type, external_id, object_name, description, metadata,
                   created_at, updated_at
            FROM reviewed_objects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Looks an object up by category and caller-side reference
    pub async fn find_by_type_and_external_id(
        &self,
        object_type: &str,
        external_id: &str,
    ) -> Result<Option<ReviewedObjectRow>, DatabaseError> {
        let row = sqlx::query_as::<_, ReviewedObjectRow>(
            r#"
            SELECT id, object_type, external_id, object_name, description, metadata,
                   created_at, updated_at
            FROM reviewed_objects
            WHERE object_type = $1 AND external_id = $2
            "#,
        )
        .bind(object_type)
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Returns objects ordered by creation time descending
    pub async fn list(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<ReviewedObjectRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, ReviewedObjectRow>(
            r#"
            SELECT id, object_type, external_id, object_name, description, metadata,
                   created_at, updated_at
            FROM reviewed_objects
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

    /// Returns objects of one category, newest first
    pub async fn list_by_type(
        &self,
        object_type: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<ReviewedObjectRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, ReviewedObjectRow>(
            r#"
            SELECT id, object_type, external_id, object_name, description, metadata,
                   created_at, updated_at
            FROM reviewed_objects
            WHERE object_type = $1
            ORDER BY created_at DESC, id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(object_type)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Applies a partial patch, recomputing `updated_at`
    pub async fn update(
        &self,
        id: Uuid,
        patch: ReviewedObjectPatch,
    ) -> Result<Option<ReviewedObjectRow>, DatabaseError> {
        debug!(%id, "updating reviewed object");

        let row = sqlx::query_as::<_, ReviewedObjectRow>(
            r#"
            UPDATE reviewed_objects
            SET object_type = COALESCE($2, object_type),
                external_id = COALESCE($3, external_id),
                object_name = COALESCE($4, object_name),
                description = COALESCE($5, description),
                metadata = COALESCE($6, metadata),
                updated_at = $7
            WHERE id = $1
            RETURNING id, object_type, external_id, object_name, description, metadata,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.object_type)
        .bind(patch.external_id)
        .bind(patch.object_name)
        .bind(patch.description)
        .bind(patch.metadata)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Deletes a reviewed object
    ///
    /// Dependent reviews trip the restricting foreign key, surfacing as
    /// [`DatabaseError::ForeignKeyViolation`].
    pub async fn delete(&self, id: Uuid) -> Result<u64, DatabaseError> {
        debug!(%id, "deleting reviewed object");

        let result = sqlx::query("DELETE FROM reviewed_objects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a reviewed object and all its reviews in one transaction
    pub async fn delete_cascading(&self, id: Uuid) -> Result<u64, DatabaseError> {
        debug!(%id, "deleting reviewed object with cascade");

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM reviews WHERE reviewed_object_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM reviewed_objects WHERE id = $1")
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

/// Database row representation of a reviewed object
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReviewedObjectRow {
    pub id: Uuid,
    pub object_type: String,
    pub external_id: String,
    pub object_name: String,
    pub description: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Data for inserting a new reviewed object
#[derive(Debug, Clone)]
pub struct InsertReviewedObject {
    pub object_type: String,
    pub external_id: String,
    pub object_name: String,
    pub description: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

/// Partial update for a reviewed object; `None` fields keep their stored value
#[derive(Debug, Clone, Default)]
pub struct ReviewedObjectPatch {
    pub object_type: Option<String>,
    pub external_id: Option<String>,
    pub object_name: Option<String>,
    pub description: Option<String>,
    pub metadata: Option<serde_json::Value>,
}
