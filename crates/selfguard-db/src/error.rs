//! Error types for the selfguard-db crate.

use thiserror::Error;

/// Database operation errors.
///
/// Model methods return raw `sqlx::Error`; this wrapper exists for the
/// crate-level operations (connecting, migrating) that callers handle
/// differently from per-query failures.
#[derive(Debug, Error)]
pub enum DbError {
    /// Failed to establish or acquire a database connection.
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[source] sqlx::Error),

    /// A database migration failed to apply.
    #[error("Migration failed: {0}")]
    MigrationFailed(#[source] sqlx::migrate::MigrateError),

    /// A database query failed to execute.
    #[error("Query failed: {0}")]
    QueryFailed(#[source] sqlx::Error),
}
