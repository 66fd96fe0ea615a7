//! Update user endpoint handler.
//!
//! PUT /admin/users/:id - Apply a partial update to a user account.

use crate::error::ApiUsersError;
use crate::models::{UpdateUserRequest, UserResponse};
use crate::services::UserAdminService;
use axum::{extract::Path, Extension, Json};
use photark_auth::AuthClaims;
use photark_core::UserId;
use std::sync::Arc;
use uuid::Uuid;

/// Updates a user account. Absent fields are left unchanged.
#[utoipa::path(
    put,
    path = "/admin/users/{id}",
    params(
        ("id" = String, Path, description = "User ID"),
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation error or invalid user ID format"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not authorized"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already in use"),
    ),
    security(("bearerAuth" = [])),
    tag = "Users (admin)"
)]
pub async fn update_user_handler(
    Extension(claims): Extension<AuthClaims>,
    Extension(service): Extension<Arc<UserAdminService>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiUsersError> {
    let user_uuid = Uuid::parse_str(&id)
        .map_err(|_| ApiUsersError::Validation("Invalid user ID format".to_string()))?;
    let user_id = UserId::from_uuid(user_uuid);

    tracing::info!(admin_id = %claims.sub, user_id = %user_id, "Updating user");

    let response = service.update(user_id, request).await?;
    Ok(Json(response))
}
