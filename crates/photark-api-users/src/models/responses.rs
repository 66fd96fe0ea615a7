//! Response models for the admin user management API.

use chrono::{DateTime, Utc};
use photark_core::UserAvatarColor;
use photark_db::UserStatus;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// User information visible to any authenticated caller.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Unique identifier for the user.
    pub id: Uuid,

    /// User's email address.
    pub email: String,

    /// Display name.
    pub name: String,

    /// Path to the profile image, empty when unset.
    pub profile_image_path: String,

    /// Effective avatar color preference.
    #[schema(value_type = String, example = "primary")]
    pub avatar_color: UserAvatarColor,
}

/// Full user record visible to admins.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserAdminResponse {
    /// Unique identifier for the user.
    pub id: Uuid,

    /// User's email address.
    pub email: String,

    /// Display name.
    pub name: String,

    /// Path to the profile image, empty when unset.
    pub profile_image_path: String,

    /// Effective avatar color preference.
    #[schema(value_type = String, example = "primary")]
    pub avatar_color: UserAvatarColor,

    /// Whether the account has admin rights.
    pub is_admin: bool,

    /// Whether a password change is required at next login.
    pub should_change_password: bool,

    /// Account lifecycle status.
    #[schema(value_type = String, example = "active")]
    pub status: UserStatus,

    /// Storage quota in bytes, `null` means unlimited.
    pub quota_size_in_bytes: Option<i64>,

    /// Current storage usage in bytes.
    pub quota_usage_in_bytes: i64,

    /// When the account was soft-deleted, if it was.
    pub deleted_at: Option<DateTime<Utc>>,

    /// When the account was created.
    pub created_at: DateTime<Utc>,

    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}
