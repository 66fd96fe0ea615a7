//! User lifecycle orchestration.
//!
//! Sequences store and queue calls for create/update/delete/restore/search.
//! Holds no state of its own; all persistent state lives behind the injected
//! store traits.

use crate::error::{ApiUsersError, FieldValidationError};
use crate::models::{
    CreateUserRequest, DeleteUserRequest, SearchUsersQuery, UpdateUserRequest, UserAdminResponse,
    UserResponse,
};
use crate::validation::{
    validate_email, validate_name, validate_password, validate_quota, ValidationError,
};
use chrono::Utc;
use photark_core::{preferences_patch, UserAvatarColor, UserId};
use photark_db::{
    AlbumStore, Job, JobQueue, NewUser, User, UserMetadataKey, UserPatch, UserStatus, UserStore,
};
use std::sync::Arc;

/// Service for admin user management operations.
///
/// Collaborators are injected as trait objects so tests can wire in-memory
/// doubles. Enqueue calls are fire-and-forget; failures propagate without
/// rolling back prior writes.
#[derive(Clone)]
pub struct UserAdminService {
    users: Arc<dyn UserStore>,
    albums: Arc<dyn AlbumStore>,
    jobs: Arc<dyn JobQueue>,
}

impl UserAdminService {
    /// Create a new service over the given stores.
    #[must_use]
    pub fn new(users: Arc<dyn UserStore>, albums: Arc<dyn AlbumStore>, jobs: Arc<dyn JobQueue>) -> Self {
        Self { users, albums, jobs }
    }

    /// List all users as admin views, optionally including soft-deleted ones.
    ///
    /// # Errors
    ///
    /// Returns `ApiUsersError::Store` if the store query fails.
    pub async fn search(
        &self,
        query: &SearchUsersQuery,
    ) -> Result<Vec<UserAdminResponse>, ApiUsersError> {
        let users = self.users.list(query.with_deleted).await?;
        Ok(users.iter().map(map_user_admin).collect())
    }

    /// Fetch a single user as an admin view, including soft-deleted records.
    ///
    /// # Errors
    ///
    /// Returns `ApiUsersError::NotFound` if no user exists with that id.
    pub async fn get(&self, id: UserId) -> Result<UserAdminResponse, ApiUsersError> {
        let user = self
            .users
            .get(id, true)
            .await?
            .ok_or(ApiUsersError::NotFound)?;
        Ok(map_user_admin(&user))
    }

    /// Create a new user account.
    ///
    /// When the request disables memories, a preferences metadata record is
    /// upserted right after creation and the user re-fetched so the returned
    /// view reflects it. When `notify` is set, a signup notification job is
    /// enqueued carrying the plaintext password as a one-time temporary
    /// password if the account must change it on first login.
    ///
    /// # Errors
    ///
    /// Returns `ApiUsersError::ValidationErrors` for invalid fields and
    /// `ApiUsersError::EmailConflict` when the email is already taken.
    pub async fn create(&self, request: CreateUserRequest) -> Result<UserResponse, ApiUsersError> {
        let mut errors = Vec::new();
        collect(&mut errors, validate_email(&request.email));
        collect(&mut errors, validate_name(&request.name));
        collect(&mut errors, validate_password(&request.password));
        collect(&mut errors, validate_quota(request.quota_size_in_bytes));
        if !errors.is_empty() {
            return Err(ApiUsersError::ValidationErrors { errors });
        }

        let mut user = self
            .users
            .create(NewUser {
                email: request.email.trim().to_string(),
                password: request.password.clone(),
                name: request.name.trim().to_string(),
                quota_size_in_bytes: request.quota_size_in_bytes,
                should_change_password: request.should_change_password,
            })
            .await?;
        let id = user.user_id();

        tracing::info!(user_id = %id, "Created user");

        // Legacy shortcut: only an explicit false writes a preference patch.
        if request.memories_enabled == Some(false) {
            let mut prefs = user.preferences();
            prefs.memories.enabled = false;
            self.users
                .upsert_metadata(id, UserMetadataKey::Preferences, preferences_patch(&prefs))
                .await?;
            user = self
                .users
                .get(id, false)
                .await?
                .ok_or(ApiUsersError::NotFound)?;
        }

        if request.notify {
            let temp_password = user
                .should_change_password
                .then(|| request.password.clone());
            self.jobs
                .queue(Job::NotifySignup {
                    id: user.id,
                    temp_password,
                })
                .await?;
        }

        Ok(map_user(&user))
    }

    /// Apply a partial update to a user account.
    ///
    /// Quota changes trigger a usage resync before the patch lands, since the
    /// resync compares the old quota against the requested one. Preference
    /// shortcuts (`memoriesEnabled`, `avatarColor`) go to metadata and are
    /// never applied as account columns.
    ///
    /// # Errors
    ///
    /// Returns `ApiUsersError::NotFound` if the user does not exist or is
    /// soft-deleted, `ApiUsersError::ValidationErrors` for invalid fields,
    /// and `ApiUsersError::EmailConflict` when the new email is taken.
    pub async fn update(
        &self,
        id: UserId,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, ApiUsersError> {
        let user = self
            .users
            .get(id, false)
            .await?
            .ok_or(ApiUsersError::NotFound)?;

        let mut errors = Vec::new();
        if let Some(ref email) = request.email {
            collect(&mut errors, validate_email(email));
        }
        if let Some(ref name) = request.name {
            collect(&mut errors, validate_name(name));
        }
        if let Some(ref password) = request.password {
            collect(&mut errors, validate_password(password));
        }
        if let Some(quota) = request.quota_size_in_bytes {
            collect(&mut errors, validate_quota(quota));
        }
        if !errors.is_empty() {
            return Err(ApiUsersError::ValidationErrors { errors });
        }

        // Resync must see the old quota, so it runs before the patch.
        if let Some(new_quota) = request.quota_size_in_bytes {
            if new_quota != user.quota_size_in_bytes {
                self.users.sync_usage(id).await?;
            }
        }

        if request.memories_enabled.is_some() || request.avatar_color.is_some() {
            let mut prefs = user.preferences();
            if let Some(enabled) = request.memories_enabled {
                prefs.memories.enabled = enabled;
            }
            if let Some(color) = request.avatar_color {
                prefs.avatar.color = Some(color);
            }
            self.users
                .upsert_metadata(id, UserMetadataKey::Preferences, preferences_patch(&prefs))
                .await?;
        }

        let updated = if request.has_account_changes() {
            self.users
                .update(
                    id,
                    UserPatch {
                        email: request.email.map(|e| e.trim().to_string()),
                        name: request.name.map(|n| n.trim().to_string()),
                        password: request.password,
                        is_admin: request.is_admin,
                        should_change_password: request.should_change_password,
                        quota_size_in_bytes: request.quota_size_in_bytes,
                        ..UserPatch::default()
                    },
                )
                .await?
        } else {
            self.users
                .get(id, false)
                .await?
                .ok_or(ApiUsersError::NotFound)?
        };

        tracing::info!(user_id = %id, "Updated user");
        Ok(map_user(&updated))
    }

    /// Soft-delete a user, or queue a hard delete when `force` is set.
    ///
    /// The user's albums are soft-deleted first, then the account status and
    /// deletion timestamp are written. A forced delete additionally enqueues
    /// the purge job; the actual data removal happens asynchronously.
    ///
    /// # Errors
    ///
    /// Returns `ApiUsersError::NotFound` for missing or already-deleted
    /// users and `ApiUsersError::Forbidden` for admin accounts.
    pub async fn delete(
        &self,
        id: UserId,
        request: DeleteUserRequest,
    ) -> Result<UserResponse, ApiUsersError> {
        let user = self
            .users
            .get(id, false)
            .await?
            .ok_or(ApiUsersError::NotFound)?;

        // Hard invariant, no override.
        if user.is_admin {
            return Err(ApiUsersError::Forbidden(
                "Cannot delete admin user".to_string(),
            ));
        }

        self.albums.soft_delete_all(id).await?;

        let status = if request.force {
            UserStatus::Removing
        } else {
            UserStatus::Deleted
        };
        let updated = self
            .users
            .update(
                id,
                UserPatch {
                    status: Some(status),
                    deleted_at: Some(Some(Utc::now())),
                    ..UserPatch::default()
                },
            )
            .await?;

        if request.force {
            self.jobs
                .queue(Job::UserDelete {
                    id: user.id,
                    force: true,
                })
                .await?;
        }

        tracing::info!(user_id = %id, force = request.force, "Deleted user");
        Ok(map_user(&updated))
    }

    /// Restore a soft-deleted user and their albums.
    ///
    /// Restoring an already-active user is an idempotent no-op that succeeds
    /// with the current record.
    ///
    /// # Errors
    ///
    /// Returns `ApiUsersError::NotFound` if no user exists with that id.
    pub async fn restore(&self, id: UserId) -> Result<UserResponse, ApiUsersError> {
        self.users
            .get(id, true)
            .await?
            .ok_or(ApiUsersError::NotFound)?;

        self.albums.restore_all(id).await?;

        let updated = self
            .users
            .update(
                id,
                UserPatch {
                    status: Some(UserStatus::Active),
                    deleted_at: Some(None),
                    ..UserPatch::default()
                },
            )
            .await?;

        tracing::info!(user_id = %id, "Restored user");
        Ok(map_user(&updated))
    }
}

/// Map a user record to the standard view.
fn map_user(user: &User) -> UserResponse {
    let prefs = user.preferences();
    UserResponse {
        id: user.id,
        email: user.email.clone(),
        name: user.name.clone(),
        profile_image_path: user.profile_image_path.clone(),
        avatar_color: prefs.avatar.color.unwrap_or(UserAvatarColor::Primary),
    }
}

/// Map a user record to the admin view with operator-only fields.
fn map_user_admin(user: &User) -> UserAdminResponse {
    let prefs = user.preferences();
    UserAdminResponse {
        id: user.id,
        email: user.email.clone(),
        name: user.name.clone(),
        profile_image_path: user.profile_image_path.clone(),
        avatar_color: prefs.avatar.color.unwrap_or(UserAvatarColor::Primary),
        is_admin: user.is_admin,
        should_change_password: user.should_change_password,
        status: user.status,
        quota_size_in_bytes: user.quota_size_in_bytes,
        quota_usage_in_bytes: user.quota_usage_in_bytes,
        deleted_at: user.deleted_at,
        created_at: user.created_at,
        updated_at: user.updated_at,
    }
}

fn collect(errors: &mut Vec<FieldValidationError>, result: Result<(), ValidationError>) {
    if let Err(err) = result {
        errors.push(err.into());
    }
}
