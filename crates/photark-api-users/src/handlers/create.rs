//! Create user endpoint handler.
//!
//! POST /admin/users - Create a new user account.

use crate::error::ApiUsersError;
use crate::models::{CreateUserRequest, UserResponse};
use crate::services::UserAdminService;
use axum::{http::StatusCode, Extension, Json};
use photark_auth::AuthClaims;
use std::sync::Arc;

/// Creates a new user account.
#[utoipa::path(
    post,
    path = "/admin/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not authorized"),
        (status = 409, description = "Email already in use"),
    ),
    security(("bearerAuth" = [])),
    tag = "Users (admin)"
)]
pub async fn create_user_handler(
    Extension(claims): Extension<AuthClaims>,
    Extension(service): Extension<Arc<UserAdminService>>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiUsersError> {
    tracing::info!(admin_id = %claims.sub, "Creating user");

    let response = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
