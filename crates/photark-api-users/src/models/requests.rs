//! Request models for the admin user management API.

use photark_core::UserAvatarColor;
use serde::{Deserialize, Deserializer};
use utoipa::{IntoParams, ToSchema};

fn default_true() -> bool {
    true
}

/// Deserialize a field that distinguishes absent from explicit `null`.
///
/// `Some(None)` means the client sent `null` (clear the value);
/// `None` means the field was omitted (leave unchanged).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Request to create a new user account.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Email address; must be unique across all accounts.
    pub email: String,

    /// Initial password (will be hashed).
    pub password: String,

    /// Display name.
    pub name: String,

    /// Storage quota in bytes. `null` or absent means unlimited.
    #[serde(default)]
    pub quota_size_in_bytes: Option<i64>,

    /// Force a password change on first login.
    #[serde(default)]
    pub should_change_password: bool,

    /// Initial memories preference. Absent leaves the default (enabled).
    #[serde(default)]
    pub memories_enabled: Option<bool>,

    /// Queue a signup notification email (default true).
    #[serde(default = "default_true")]
    pub notify: bool,
}

/// Request to update an existing user account. All fields optional.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// New email address.
    #[serde(default)]
    pub email: Option<String>,

    /// New display name.
    #[serde(default)]
    pub name: Option<String>,

    /// New password (will be hashed).
    #[serde(default)]
    pub password: Option<String>,

    /// Grant or revoke admin rights.
    #[serde(default)]
    pub is_admin: Option<bool>,

    /// Force a password change on next login.
    #[serde(default)]
    pub should_change_password: Option<bool>,

    /// New storage quota. Explicit `null` clears the quota (unlimited);
    /// absent leaves it unchanged.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i64>)]
    pub quota_size_in_bytes: Option<Option<i64>>,

    /// New memories preference.
    #[serde(default)]
    pub memories_enabled: Option<bool>,

    /// New avatar color preference.
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "blue")]
    pub avatar_color: Option<UserAvatarColor>,
}

impl UpdateUserRequest {
    /// Whether any account column (not preference metadata) is being changed.
    #[must_use]
    pub fn has_account_changes(&self) -> bool {
        self.email.is_some()
            || self.name.is_some()
            || self.password.is_some()
            || self.is_admin.is_some()
            || self.should_change_password.is_some()
            || self.quota_size_in_bytes.is_some()
    }
}

/// Request body for deleting a user. The body is optional; an absent body
/// means a plain soft delete.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserRequest {
    /// Queue immediate permanent removal instead of a recoverable soft delete.
    #[serde(default)]
    pub force: bool,
}

/// Query parameters for searching users.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SearchUsersQuery {
    /// Include soft-deleted accounts in the result (default false).
    #[serde(default)]
    pub with_deleted: bool,
}
