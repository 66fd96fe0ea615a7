//! Database migration management.
//!
//! Provides functions to run and manage versioned SQL migrations.

use crate::error::StoreError;
use sqlx::PgPool;

/// Run all pending database migrations.
///
/// Migrations are embedded at compile time from the `migrations/` directory.
/// Each migration is run in order based on its filename prefix (0001_, ...).
///
/// # Example
///
/// ```rust,ignore
/// use photark_db::run_migrations;
///
/// let pool = sqlx::PgPool::connect("postgres://localhost/photark").await?;
/// run_migrations(&pool).await?;
/// ```
///
/// # Errors
///
/// Returns `StoreError::MigrationFailed` if any migration fails to apply.
pub async fn run_migrations(pool: &PgPool) -> Result<(), StoreError> {
    tracing::info!("Running database migrations...");

    sqlx::migrate!("./migrations").run(pool).await?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}
