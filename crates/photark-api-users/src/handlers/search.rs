//! Search users endpoint handler.
//!
//! GET /admin/users - List all users as admin views.

use crate::error::ApiUsersError;
use crate::models::{SearchUsersQuery, UserAdminResponse};
use crate::services::UserAdminService;
use axum::{extract::Query, Extension, Json};
use photark_auth::AuthClaims;
use std::sync::Arc;

/// Lists all user accounts, optionally including soft-deleted ones.
#[utoipa::path(
    get,
    path = "/admin/users",
    params(SearchUsersQuery),
    responses(
        (status = 200, description = "List of users", body = Vec<UserAdminResponse>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not authorized"),
    ),
    security(("bearerAuth" = [])),
    tag = "Users (admin)"
)]
pub async fn search_users_handler(
    Extension(claims): Extension<AuthClaims>,
    Extension(service): Extension<Arc<UserAdminService>>,
    Query(query): Query<SearchUsersQuery>,
) -> Result<Json<Vec<UserAdminResponse>>, ApiUsersError> {
    tracing::debug!(
        admin_id = %claims.sub,
        with_deleted = query.with_deleted,
        "Searching users"
    );

    let users = service.search(&query).await?;
    Ok(Json(users))
}
