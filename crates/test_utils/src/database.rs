//! Database Test Utilities
//!
//! Boots a disposable PostgreSQL container with the review schema applied,
//! for integration tests. Tests that use these helpers require a local
//! Docker daemon.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

const POSTGRES_TAG: &str = "16-alpine";

/// A PostgreSQL test container with the review schema applied and a pool
/// connected to it
///
/// The container lives as long as this value; dropping it tears the
/// database down.
pub struct TestDatabase {
    _container: ContainerAsync<Postgres>,
    /// Connection string for the containerized database
    pub url: String,
    /// Pool connected to the containerized database
    pub pool: PgPool,
}

impl TestDatabase {
    /// Starts a fresh container, connects a pool, and applies the schema
    ///
    /// # Errors
    ///
    /// Returns an error if the container fails to start or the schema fails
    /// to apply
    pub async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let container = Postgres::default()
            .with_db_name("reviews_test")
            .with_tag(POSTGRES_TAG)
            .start()
            .await?;

        let url = format!(
            "postgres://postgres:postgres@{}:{}/reviews_test",
            container.get_host().await?,
            container.get_host_port_ipv4(5432).await?,
        );

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect(&url)
            .await?;

        let schema = include_str!("../../../migrations/20240101_000001_initial_schema.sql");
        sqlx::raw_sql(schema).execute(&pool).await?;

        Ok(Self {
            _container: container,
            url,
            pool,
        })
    }

    /// Removes all rows from every table, keeping the schema
    ///
    /// Lets tests that share a container start from a clean slate.
    pub async fn truncate_all(&self) -> Result<(), sqlx::Error> {
        sqlx::raw_sql("TRUNCATE reviews, reviewed_objects, reviewers CASCADE")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

static SHARED_DATABASE: OnceCell<Arc<TestDatabase>> = OnceCell::const_new();

/// Returns a process-wide shared test database, starting it on first use
///
/// Sharing one container keeps integration suites fast; tests are expected
/// to use unique usernames/external ids (see the builders) so they do not
/// collide.
pub async fn shared_database(
) -> Result<Arc<TestDatabase>, Box<dyn std::error::Error + Send + Sync>> {
    SHARED_DATABASE
        .get_or_try_init(|| async { TestDatabase::new().await.map(Arc::new) })
        .await
        .cloned()
}
