//! Ports and Adapters Infrastructure
//!
//! This module provides the foundational types for implementing the hexagonal
//! architecture (ports and adapters) pattern across the review domain.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Callers                               │
//! │        (application services, batch jobs, test code)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Port Traits                             │
//! │   (ReviewerStore, ReviewedObjectStore, ReviewStore)          │
//! │   Defined in the domain crate, depend only on core_kernel    │
//! └─────────────────────────────────────────────────────────────┘
//!                    ▲                         ▲
//!                    │                         │
//!         ┌─────────┴─────────┐     ┌────────┴────────┐
//!         │  Internal Adapter │     │   Mock Adapter   │
//!         │   (PostgreSQL)    │     │   (in-memory,    │
//!         │                   │     │    for tests)    │
//!         └───────────────────┘     └──────────────────┘
//! ```
//!
//! # Usage
//!
//! Each domain defines its port traits extending the marker traits here.
//! Adapters implement these traits to provide either the database-backed or
//! the in-memory implementation.
//!
//! ```rust,ignore
//! // In domain_reviews/src/ports.rs
//! #[async_trait]
//! pub trait ReviewerStore: DomainPort + HealthCheckable {
//!     async fn get_reviewer(&self, id: ReviewerId) -> Result<Reviewer, PortError>;
//! }
//!
//! // In infra_db - internal adapter
//! impl ReviewerStore for PostgresReviewStore { ... }
//! ```

use std::fmt;
use thiserror::Error;
use serde::{Deserialize, Serialize};

/// Error type for port operations
///
/// Provides the unified domain error taxonomy that all port implementations
/// must use, independent of the underlying store's native error
/// representation. Every variant corresponds to one stable, caller-visible
/// failure kind.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// Input failed validation before any store interaction
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// A uniqueness constraint was violated
    #[error("Duplicate key: {message}")]
    DuplicateKey {
        message: String,
    },

    /// A referenced entity does not exist
    #[error("Foreign key violation: {message}")]
    ForeignKey {
        message: String,
    },

    /// A delete was blocked by dependent entities
    #[error("Delete conflict: {message}")]
    DeleteConflict {
        message: String,
    },

    /// The underlying store is unreachable
    #[error("Connectivity error: {message}")]
    Connectivity {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An unexpected internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a Validation error with field information
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a DuplicateKey error
    pub fn duplicate_key(message: impl Into<String>) -> Self {
        PortError::DuplicateKey {
            message: message.into(),
        }
    }

    /// Creates a ForeignKey error
    pub fn foreign_key(message: impl Into<String>) -> Self {
        PortError::ForeignKey {
            message: message.into(),
        }
    }

    /// Creates a DeleteConflict error
    pub fn delete_conflict(message: impl Into<String>) -> Self {
        PortError::DeleteConflict {
            message: message.into(),
        }
    }

    /// Creates a Connectivity error
    pub fn connectivity(message: impl Into<String>) -> Self {
        PortError::Connectivity {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    ///
    /// The core itself never retries; callers own retry policy.
    pub fn is_transient(&self) -> bool {
        matches!(self, PortError::Connectivity { .. })
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }

    /// Returns true if this error is a store-constraint violation
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            PortError::DuplicateKey { .. }
                | PortError::ForeignKey { .. }
                | PortError::DeleteConflict { .. }
        )
    }

    /// Returns true if this error was raised before any store interaction
    pub fn is_validation(&self) -> bool {
        matches!(self, PortError::Validation { .. })
    }
}

/// Marker trait for all domain ports
///
/// All port traits should extend this marker to ensure they are
/// thread-safe and can be used in async contexts.
pub trait DomainPort: Send + Sync + 'static {}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    /// Adapter is healthy and operational
    Healthy,
    /// Adapter is degraded but operational
    Degraded,
    /// Adapter is unhealthy and not operational
    Unhealthy,
    /// Health status is unknown
    Unknown,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Latency of the health check in milliseconds
    pub latency_ms: u64,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

/// Trait for adapters that support health checks
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    ///
    /// # Returns
    ///
    /// A `HealthCheckResult` indicating the current health status
    async fn health_check(&self) -> HealthCheckResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_not_found() {
        let error = PortError::not_found("Reviewer", "123");
        assert!(error.is_not_found());
        assert!(!error.is_transient());
        assert!(error.to_string().contains("Reviewer"));
        assert!(error.to_string().contains("123"));
    }

    #[test]
    fn test_port_error_constraint_violation() {
        assert!(PortError::duplicate_key("username taken").is_constraint_violation());
        assert!(PortError::foreign_key("reviewer missing").is_constraint_violation());
        assert!(PortError::delete_conflict("has reviews").is_constraint_violation());
        assert!(!PortError::validation("bad input").is_constraint_violation());
    }

    #[test]
    fn test_port_error_transient() {
        let connectivity = PortError::connectivity("store unreachable");
        assert!(connectivity.is_transient());

        let validation = PortError::validation("Invalid email");
        assert!(!validation.is_transient());
        assert!(validation.is_validation());
    }

    #[test]
    fn test_validation_field() {
        let error = PortError::validation_field("out of range", "star_rating");
        match error {
            PortError::Validation { field, .. } => {
                assert_eq!(field.as_deref(), Some("star_rating"));
            }
            _ => panic!("expected validation error"),
        }
    }
}
