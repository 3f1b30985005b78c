//! Reviewer entity
//!
//! A reviewer is any account that can author reviews. Usernames and email
//! addresses are unique across the system; the store enforces both with
//! uniqueness constraints rather than a check-then-insert pattern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::ReviewerId;

/// A reviewer as read back from the store, including generated fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reviewer {
    pub id: ReviewerId,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a reviewer
///
/// Excludes generated fields (id, timestamps); those are populated by the
/// store on insert.
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
pub struct NewReviewer {
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    #[validate(length(max = 255))]
    pub full_name: Option<String>,
}

impl NewReviewer {
    /// Creates a reviewer input with the required fields
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            full_name: None,
        }
    }

    /// Sets the optional display name
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }
}

/// Partial patch for a reviewer
///
/// Only fields present in the patch are applied; a `None` leaves the stored
/// value untouched. `updated_at` is recomputed by the store on every patch,
/// including an empty one.
#[derive(Debug, Clone, Default, Validate, Serialize, Deserialize)]
pub struct UpdateReviewer {
    #[validate(length(min = 1, max = 50))]
    pub username: Option<String>,
    #[validate(email, length(max = 255))]
    pub email: Option<String>,
    #[validate(length(max = 255))]
    pub full_name: Option<String>,
}

impl UpdateReviewer {
    /// True when the patch carries no field at all
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.full_name.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reviewer_builder() {
        let input = NewReviewer::new("ada", "ada@example.com").with_full_name("Ada Lovelace");
        assert_eq!(input.username, "ada");
        assert_eq!(input.full_name.as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_empty_patch() {
        assert!(UpdateReviewer::default().is_empty());
        let patch = UpdateReviewer {
            username: Some("grace".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
