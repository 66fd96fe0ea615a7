//! Error types for the photark-db crate.
//!
//! Provides a unified error type for store operations.

use thiserror::Error;

/// Store operation errors.
///
/// Failures from the underlying database propagate unchanged inside
/// `Database`; the store layer adds no retries.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The email address is already taken by another user.
    #[error("Email already exists")]
    EmailConflict,

    /// A database query failed to execute.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A JSON value could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Password hashing failed while persisting a credential.
    #[error("Password hashing failed: {0}")]
    Hashing(#[from] photark_auth::AuthError),

    /// A database migration failed to apply.
    #[error("Migration failed: {0}")]
    MigrationFailed(#[from] sqlx::migrate::MigrateError),
}
