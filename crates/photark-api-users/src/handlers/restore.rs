//! Restore user endpoint handler.
//!
//! POST /admin/users/:id/restore - Restore a soft-deleted user.

use crate::error::ApiUsersError;
use crate::models::UserResponse;
use crate::services::UserAdminService;
use axum::{extract::Path, Extension, Json};
use photark_auth::AuthClaims;
use photark_core::UserId;
use std::sync::Arc;
use uuid::Uuid;

/// Restores a soft-deleted user and their albums.
#[utoipa::path(
    post,
    path = "/admin/users/{id}/restore",
    params(
        ("id" = String, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User restored", body = UserResponse),
        (status = 400, description = "Invalid user ID format"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not authorized"),
        (status = 404, description = "User not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Users (admin)"
)]
pub async fn restore_user_handler(
    Extension(claims): Extension<AuthClaims>,
    Extension(service): Extension<Arc<UserAdminService>>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiUsersError> {
    let user_uuid = Uuid::parse_str(&id)
        .map_err(|_| ApiUsersError::Validation("Invalid user ID format".to_string()))?;
    let user_id = UserId::from_uuid(user_uuid);

    tracing::info!(admin_id = %claims.sub, user_id = %user_id, "Restoring user");

    let response = service.restore(user_id).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    // Handler tests run against the assembled router with in-memory stores.
    // See crates/photark-api-users/tests/admin_users_api_tests.rs
}
