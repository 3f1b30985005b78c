//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL backing for the review service,
//! implemented with SQLx on the repository pattern.
//!
//! # Architecture
//!
//! Per-entity repositories own the SQL; the [`PostgresReviewStore`] adapter
//! implements the domain port traits on top of them, translating database
//! errors into the domain taxonomy. Callers construct the pool explicitly at
//! process start and pass it in - there is no ambient global engine.
//!
//! # Constraint handling
//!
//! Uniqueness and referential integrity are enforced by the database.
//! Repositories always attempt the write and translate the resulting
//! constraint-violation signal ([`DatabaseError`]) rather than pre-checking,
//! so concurrent writers race at the constraint and exactly one wins.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, PostgresReviewStore};
//!
//! let pool = create_pool(DatabaseConfig::from_env()?).await?;
//! let store = PostgresReviewStore::new(pool);
//! ```

pub mod adapters;
pub mod error;
pub mod pool;
pub mod repositories;

pub use adapters::PostgresReviewStore;
pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
