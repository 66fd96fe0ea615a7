//! Delete user endpoint handler.
//!
//! DELETE /admin/users/:id - Soft-delete a user, or queue a hard delete.

use crate::error::ApiUsersError;
use crate::models::{DeleteUserRequest, UserResponse};
use crate::services::UserAdminService;
use axum::extract::rejection::JsonRejection;
use axum::{extract::Path, Extension, Json};
use photark_auth::AuthClaims;
use photark_core::UserId;
use std::sync::Arc;
use uuid::Uuid;

/// Soft-deletes a user. With `force` set, queues permanent removal instead.
///
/// The request body is optional; an absent body means a plain soft delete.
#[utoipa::path(
    delete,
    path = "/admin/users/{id}",
    params(
        ("id" = String, Path, description = "User ID"),
    ),
    request_body = DeleteUserRequest,
    responses(
        (status = 200, description = "User deleted", body = UserResponse),
        (status = 400, description = "Invalid user ID format"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not authorized, or target is an admin"),
        (status = 404, description = "User not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Users (admin)"
)]
pub async fn delete_user_handler(
    Extension(claims): Extension<AuthClaims>,
    Extension(service): Extension<Arc<UserAdminService>>,
    Path(id): Path<String>,
    request: Result<Json<DeleteUserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiUsersError> {
    let user_uuid = Uuid::parse_str(&id)
        .map_err(|_| ApiUsersError::Validation("Invalid user ID format".to_string()))?;
    let user_id = UserId::from_uuid(user_uuid);

    // Absent body means a plain soft delete; a body that is present but
    // unparseable is a client error.
    let request = match request {
        Ok(Json(request)) => request,
        Err(JsonRejection::MissingJsonContentType(_)) => DeleteUserRequest::default(),
        Err(rejection) => return Err(ApiUsersError::Validation(rejection.body_text())),
    };

    tracing::info!(
        admin_id = %claims.sub,
        user_id = %user_id,
        force = request.force,
        "Deleting user"
    );

    let response = service.delete(user_id, request).await?;
    Ok(Json(response))
}
