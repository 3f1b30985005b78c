//! Database error types
//!
//! This module is the single constraint-violation translation boundary for
//! the repositories: every SQLx error funnels through
//! [`DatabaseError::from`], which inspects the PostgreSQL error code and
//! maps it to a specific variant. Adapters then lift those variants into the
//! domain taxonomy ([`PortError`]) - with per-operation context where the
//! raw code is ambiguous (a foreign-key violation on DELETE is a delete
//! conflict, on INSERT a bad reference).

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Entity not found in database
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Unique constraint violation
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Foreign key constraint violation
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Check constraint violation
    #[error("Constraint violation: {0}")]
    CheckViolation(String),

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,
}

impl DatabaseError {
    /// Creates a not found error for a specific entity type and identifier
    ///
    /// # Example
    ///
    /// ```rust
    /// use infra_db::DatabaseError;
    ///
    /// let error = DatabaseError::not_found("Reviewer", "RVR-123");
    /// assert!(error.to_string().contains("Reviewer"));
    /// ```
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        DatabaseError::NotFound(format!("{} with id '{}' not found", entity, id))
    }

    /// Checks if this error indicates a record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, DatabaseError::NotFound(_))
    }

    /// Checks if this error is a constraint violation
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            DatabaseError::DuplicateEntry(_)
                | DatabaseError::ForeignKeyViolation(_)
                | DatabaseError::CheckViolation(_)
        )
    }

    /// Checks if this error is a connection-related issue
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted
        )
    }
}

/// Converts SQLx errors to specific DatabaseError variants
///
/// Analyzes the SQLx error and maps it based on the PostgreSQL error code,
/// so repositories can use `?` and still get the translated variant.
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => DatabaseError::NotFound("Record not found".to_string()),
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::PoolClosed => {
                DatabaseError::ConnectionFailed("connection pool closed".to_string())
            }
            sqlx::Error::Io(e) => DatabaseError::ConnectionFailed(e.to_string()),
            sqlx::Error::Tls(e) => DatabaseError::ConnectionFailed(e.to_string()),
            sqlx::Error::Database(db_err) => {
                // PostgreSQL error codes
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                if let Some(code) = db_err.code() {
                    match code.as_ref() {
                        "23505" => DatabaseError::DuplicateEntry(db_err.message().to_string()),
                        "23503" => {
                            DatabaseError::ForeignKeyViolation(db_err.message().to_string())
                        }
                        "23514" => DatabaseError::CheckViolation(db_err.message().to_string()),
                        _ => DatabaseError::QueryFailed(db_err.message().to_string()),
                    }
                } else {
                    DatabaseError::QueryFailed(db_err.message().to_string())
                }
            }
            other => DatabaseError::QueryFailed(other.to_string()),
        }
    }
}

/// Lifts database errors into the domain taxonomy
///
/// `NotFound` carries no entity context at this level, so adapters raise
/// their own `PortError::not_found` with the entity name instead of relying
/// on this conversion for lookups.
impl From<DatabaseError> for PortError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::DuplicateEntry(message) => PortError::duplicate_key(message),
            DatabaseError::ForeignKeyViolation(message) => PortError::foreign_key(message),
            DatabaseError::CheckViolation(message) => PortError::validation(message),
            DatabaseError::ConnectionFailed(message) => PortError::connectivity(message),
            DatabaseError::PoolExhausted => {
                PortError::connectivity("connection pool exhausted")
            }
            error @ DatabaseError::NotFound(_) => PortError::internal(error.to_string()),
            error @ DatabaseError::QueryFailed(_) => PortError::internal(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_helper() {
        let error = DatabaseError::not_found("Review", "REV-42");
        assert!(error.is_not_found());
        assert!(error.to_string().contains("REV-42"));
    }

    #[test]
    fn test_predicates() {
        assert!(DatabaseError::DuplicateEntry("dup".into()).is_constraint_violation());
        assert!(DatabaseError::ForeignKeyViolation("fk".into()).is_constraint_violation());
        assert!(DatabaseError::CheckViolation("check".into()).is_constraint_violation());
        assert!(DatabaseError::PoolExhausted.is_connection_error());
        assert!(!DatabaseError::QueryFailed("q".into()).is_connection_error());
    }

    #[test]
    fn test_row_not_found_translation() {
        let error = DatabaseError::from(sqlx::Error::RowNotFound);
        assert!(error.is_not_found());
    }

    #[test]
    fn test_pool_timeout_translation() {
        let error = DatabaseError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(error, DatabaseError::PoolExhausted));
    }

    #[test]
    fn test_port_error_lifting() {
        let duplicate: PortError = DatabaseError::DuplicateEntry("username taken".into()).into();
        assert!(duplicate.is_constraint_violation());

        let connectivity: PortError = DatabaseError::PoolExhausted.into();
        assert!(connectivity.is_transient());

        let check: PortError = DatabaseError::CheckViolation("star range".into()).into();
        assert!(check.is_validation());
    }
}
