//! Store interfaces.
//!
//! Services depend on these traits, not on concrete Postgres types, so they
//! can be wired with test doubles. Implementations must provide row-level
//! atomicity for single-record updates; callers hold no locks.

pub mod pg_album_store;
pub mod pg_job_queue;
pub mod pg_user_store;

pub use pg_album_store::PgAlbumStore;
pub use pg_job_queue::PgJobQueue;
pub use pg_user_store::PgUserStore;

use crate::error::StoreError;
use crate::models::{Job, User, UserStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use photark_core::UserId;

/// Keys under which auxiliary user metadata is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMetadataKey {
    /// Sparse preference patch, merged with defaults at read time.
    Preferences,
}

impl UserMetadataKey {
    /// The key's stored string form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            UserMetadataKey::Preferences => "preferences",
        }
    }
}

/// Fields for creating a user.
///
/// The password is plaintext here; hashing happens inside the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub quota_size_in_bytes: Option<i64>,
    pub should_change_password: bool,
}

/// Field-level patch for updating a user.
///
/// `None` leaves a field untouched. Nullable columns use a nested `Option`:
/// `Some(None)` writes NULL, `Some(Some(v))` writes the value.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub email: Option<String>,
    pub name: Option<String>,
    /// Plaintext; hashed by the store before persisting.
    pub password: Option<String>,
    pub is_admin: Option<bool>,
    pub should_change_password: Option<bool>,
    pub quota_size_in_bytes: Option<Option<i64>>,
    pub status: Option<UserStatus>,
    pub deleted_at: Option<Option<DateTime<Utc>>>,
}

impl UserPatch {
    /// Whether the patch modifies nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.name.is_none()
            && self.password.is_none()
            && self.is_admin.is_none()
            && self.should_change_password.is_none()
            && self.quota_size_in_bytes.is_none()
            && self.status.is_none()
            && self.deleted_at.is_none()
    }
}

/// Persistence operations for user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a user by ID. Soft-deleted users are only visible when
    /// `with_deleted` is set.
    async fn get(&self, id: UserId, with_deleted: bool) -> Result<Option<User>, StoreError>;

    /// List all users, optionally including soft-deleted ones.
    async fn list(&self, with_deleted: bool) -> Result<Vec<User>, StoreError>;

    /// Create a user. Fails with [`StoreError::EmailConflict`] when the email
    /// is already taken.
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// Apply a field-level patch and return the updated user.
    async fn update(&self, id: UserId, patch: UserPatch) -> Result<User, StoreError>;

    /// Replace the metadata value stored under `key` for the user.
    async fn upsert_metadata(
        &self,
        id: UserId,
        key: UserMetadataKey,
        value: serde_json::Value,
    ) -> Result<(), StoreError>;

    /// Recompute the user's storage usage from their owned assets.
    async fn sync_usage(&self, id: UserId) -> Result<(), StoreError>;
}

/// Bulk album operations keyed by owner.
#[async_trait]
pub trait AlbumStore: Send + Sync {
    /// Soft-delete every album owned by the user.
    async fn soft_delete_all(&self, owner_id: UserId) -> Result<(), StoreError>;

    /// Restore every soft-deleted album owned by the user.
    async fn restore_all(&self, owner_id: UserId) -> Result<(), StoreError>;
}

/// Fire-and-forget job submission.
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Enqueue a job. Callers do not wait for execution.
    async fn queue(&self, job: Job) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_key_str() {
        assert_eq!(UserMetadataKey::Preferences.as_str(), "preferences");
    }

    #[test]
    fn test_empty_patch() {
        assert!(UserPatch::default().is_empty());

        let patch = UserPatch {
            name: Some("New Name".to_string()),
            ..UserPatch::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_nullable_quota_patch_distinguishes_clear_from_untouched() {
        let untouched = UserPatch::default();
        assert!(untouched.quota_size_in_bytes.is_none());

        let cleared = UserPatch {
            quota_size_in_bytes: Some(None),
            ..UserPatch::default()
        };
        assert_eq!(cleared.quota_size_in_bytes, Some(None));
    }
}
