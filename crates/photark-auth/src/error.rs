//! Error types for authentication operations.
//!
//! Provides explicit error variants for all authentication failures.

use thiserror::Error;

/// Authentication error types.
///
/// This enum provides explicit error variants for precise error handling.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Password hashing operation failed.
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Password hash format is invalid.
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}
