//! Get user endpoint handler.
//!
//! GET /admin/users/:id - Fetch a single user as an admin view.

use crate::error::ApiUsersError;
use crate::models::UserAdminResponse;
use crate::services::UserAdminService;
use axum::{extract::Path, Extension, Json};
use photark_auth::AuthClaims;
use photark_core::UserId;
use std::sync::Arc;
use uuid::Uuid;

/// Fetches a user by ID, including soft-deleted accounts.
#[utoipa::path(
    get,
    path = "/admin/users/{id}",
    params(
        ("id" = String, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User details", body = UserAdminResponse),
        (status = 400, description = "Invalid user ID format"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not authorized"),
        (status = 404, description = "User not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Users (admin)"
)]
pub async fn get_user_handler(
    Extension(claims): Extension<AuthClaims>,
    Extension(service): Extension<Arc<UserAdminService>>,
    Path(id): Path<String>,
) -> Result<Json<UserAdminResponse>, ApiUsersError> {
    let user_uuid = Uuid::parse_str(&id)
        .map_err(|_| ApiUsersError::Validation("Invalid user ID format".to_string()))?;
    let user_id = UserId::from_uuid(user_uuid);

    tracing::debug!(admin_id = %claims.sub, user_id = %user_id, "Fetching user");

    let response = service.get(user_id).await?;
    Ok(Json(response))
}
