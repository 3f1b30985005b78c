//! Reviewed object entity
//!
//! The generic "thing being reviewed" - a product, an event, a movie.
//! `object_type` categorizes it, `external_id` is the caller's own
//! reference for it (unique per type), and `metadata` is an opaque JSON
//! document the core stores without interpreting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::ReviewedObjectId;

/// A reviewable object as read back from the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewedObject {
    pub id: ReviewedObjectId,
    pub object_type: String,
    pub external_id: String,
    pub object_name: String,
    pub description: Option<String>,
    /// Schemaless payload; anything that is a valid JSON document
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a reviewable object
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
pub struct NewReviewedObject {
    #[validate(length(min = 1, max = 50))]
    pub object_type: String,
    #[validate(length(min = 1, max = 255))]
    pub external_id: String,
    #[validate(length(min = 1, max = 255))]
    pub object_name: String,
    pub description: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

impl NewReviewedObject {
    /// Creates an object input with the required fields
    pub fn new(
        object_type: impl Into<String>,
        external_id: impl Into<String>,
        object_name: impl Into<String>,
    ) -> Self {
        Self {
            object_type: object_type.into(),
            external_id: external_id.into(),
            object_name: object_name.into(),
            description: None,
            metadata: None,
        }
    }

    /// Sets the optional description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches a metadata document
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Partial patch for a reviewable object; present-means-set
#[derive(Debug, Clone, Default, Validate, Serialize, Deserialize)]
pub struct UpdateReviewedObject {
    #[validate(length(min = 1, max = 50))]
    pub object_type: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub external_id: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub object_name: Option<String>,
    pub description: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

impl UpdateReviewedObject {
    /// True when the patch carries no field at all
    pub fn is_empty(&self) -> bool {
        self.object_type.is_none()
            && self.external_id.is_none()
            && self.object_name.is_none()
            && self.description.is_none()
            && self.metadata.is_none()
    }
}
