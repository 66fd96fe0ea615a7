//! Admin guard middleware.
//!
//! Checks that the authenticated caller has admin rights before allowing
//! access to protected endpoints.

use crate::error::ApiUsersError;
use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use photark_auth::AuthClaims;

/// Middleware that requires the authenticated caller to be an admin.
///
/// Extracts [`AuthClaims`] from request extensions and verifies the caller
/// has admin rights. The claims are inserted by a prior authentication
/// middleware; if no claims are found, 401 is returned.
///
/// # Usage
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use photark_api_users::middleware::admin_guard;
///
/// let router = Router::new()
///     .route("/admin/users", get(search_users_handler))
///     .layer(middleware::from_fn(admin_guard));
/// ```
///
/// # Errors
///
/// - `ApiUsersError::Unauthorized` (401): no claims in request extensions,
///   or the token is expired
/// - `ApiUsersError::Forbidden` (403): caller is not an admin
pub async fn admin_guard(request: Request<Body>, next: Next) -> Result<Response, ApiUsersError> {
    let claims = request
        .extensions()
        .get::<AuthClaims>()
        .ok_or(ApiUsersError::Unauthorized)?;

    // An expired token should never reach admin handlers.
    if claims.is_expired() {
        tracing::warn!(user_id = %claims.sub, "Access denied: expired token");
        return Err(ApiUsersError::Unauthorized);
    }

    if !claims.is_admin {
        tracing::warn!(user_id = %claims.sub, "Access denied: admin rights required");
        return Err(ApiUsersError::Forbidden(
            "Admin rights required for this operation".to_string(),
        ));
    }

    tracing::debug!(user_id = %claims.sub, "Admin access granted");

    Ok(next.run(request).await)
}
