//! Pre-built test data for common entities

use once_cell::sync::Lazy;
use serde_json::{json, Value};
use uuid::Uuid;

use core_kernel::{ReviewId, ReviewedObjectId, ReviewerId};

/// Canonical string values used across tests
pub struct StringFixtures;

impl StringFixtures {
    pub fn username() -> &'static str {
        "ada_lovelace"
    }

    pub fn email() -> &'static str {
        "ada@example.com"
    }

    pub fn full_name() -> &'static str {
        "Ada Lovelace"
    }

    pub fn object_type() -> &'static str {
        "movie"
    }

    pub fn external_id() -> &'static str {
        "tt0133093"
    }

    pub fn object_name() -> &'static str {
        "The Matrix"
    }

    pub fn review_text() -> &'static str {
        "Exceeded every expectation; would watch again."
    }

    /// A username unique per call, for tests that hit uniqueness constraints
    pub fn unique_username() -> String {
        format!("user_{}", short_suffix())
    }

    /// An email unique per call
    pub fn unique_email() -> String {
        format!("user_{}@example.com", short_suffix())
    }

    /// An external object reference unique per call
    pub fn unique_external_id() -> String {
        format!("ext-{}", short_suffix())
    }
}

/// Canonical identifier values
pub struct IdFixtures;

impl IdFixtures {
    pub fn reviewer_id() -> ReviewerId {
        ReviewerId::new()
    }

    pub fn reviewed_object_id() -> ReviewedObjectId {
        ReviewedObjectId::new()
    }

    pub fn review_id() -> ReviewId {
        ReviewId::new()
    }
}

/// A representative schemaless metadata document
pub static SAMPLE_METADATA: Lazy<Value> = Lazy::new(|| {
    json!({
        "genre": "sci-fi",
        "year": 1999,
        "tags": ["dystopia", "cyberpunk"],
        "runtime_minutes": 136
    })
});

fn short_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}
