//! User entity model.
//!
//! Represents a user account in the photark backend.

use chrono::{DateTime, Utc};
use photark_core::{Preferences, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Account lifecycle status.
///
/// `Removing` marks a user whose data is being purged by the asynchronous
/// hard-deletion job; once the purge completes the row is physically removed
/// (a terminal state outside this backend slice). Modeled as a closed enum
/// rather than a boolean precisely because of that third state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Normal, usable account.
    Active,
    /// Soft-deleted; recoverable via restore.
    Deleted,
    /// Queued for asynchronous hard deletion; not recoverable here.
    Removing,
}

/// A user account.
///
/// Invariant maintained by the stores: `deleted_at` is non-null exactly when
/// `status` is `Deleted` or `Removing`.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Unique identifier for the user.
    pub id: Uuid,

    /// User's email address (unique).
    pub email: String,

    /// User's display name.
    pub name: String,

    /// Argon2id password hash. Opaque above the store layer.
    pub password: String,

    /// Whether the user is an administrator.
    pub is_admin: bool,

    /// Account lifecycle status.
    pub status: UserStatus,

    /// Storage quota in bytes. `None` means unlimited.
    pub quota_size_in_bytes: Option<i64>,

    /// Current storage usage in bytes, recomputed by `sync_usage`.
    pub quota_usage_in_bytes: i64,

    /// Whether the user must change their password on next login.
    pub should_change_password: bool,

    /// Path to the user's profile image, empty when unset.
    pub profile_image_path: String,

    /// When the user was soft-deleted (None for active users).
    pub deleted_at: Option<DateTime<Utc>>,

    /// When the user was created.
    pub created_at: DateTime<Utc>,

    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,

    /// The stored sparse preferences patch from user metadata
    /// (`{}`/null when the user never changed a preference).
    #[sqlx(default)]
    pub preferences_patch: serde_json::Value,
}

impl User {
    /// Get the user ID as a typed `UserId`.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        UserId::from_uuid(self.id)
    }

    /// The user's effective preferences: defaults overlaid with the stored
    /// patch.
    #[must_use]
    pub fn preferences(&self) -> Preferences {
        Preferences::from_patch(&self.preferences_patch)
    }

    /// Whether the user is soft-deleted or queued for removal.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        !matches!(self.status, UserStatus::Active)
    }
}
