//! Postgres-backed album store.
//!
//! Only the bulk owner-scoped operations the user lifecycle needs live here;
//! per-album CRUD belongs to the albums slice.

use crate::error::StoreError;
use crate::stores::AlbumStore;
use async_trait::async_trait;
use photark_core::UserId;
use sqlx::PgPool;

/// Album persistence on Postgres.
#[derive(Clone)]
pub struct PgAlbumStore {
    pool: PgPool,
}

impl PgAlbumStore {
    /// Create a new album store.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlbumStore for PgAlbumStore {
    async fn soft_delete_all(&self, owner_id: UserId) -> Result<(), StoreError> {
        let now = chrono::Utc::now();
        let result = sqlx::query(
            "UPDATE albums SET deleted_at = $2, updated_at = $2 \
             WHERE owner_id = $1 AND deleted_at IS NULL",
        )
        .bind(owner_id.as_uuid())
        .bind(now)
        .execute(&self.pool)
        .await?;

        tracing::debug!(
            owner_id = %owner_id,
            albums = result.rows_affected(),
            "Soft-deleted user albums"
        );
        Ok(())
    }

    async fn restore_all(&self, owner_id: UserId) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE albums SET deleted_at = NULL, updated_at = $2 \
             WHERE owner_id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(owner_id.as_uuid())
        .bind(chrono::Utc::now())
        .execute(&self.pool)
        .await?;

        tracing::debug!(
            owner_id = %owner_id,
            albums = result.rows_affected(),
            "Restored user albums"
        );
        Ok(())
    }
}
