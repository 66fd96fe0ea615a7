//! Admin user management router configuration.
//!
//! Configures routes for the admin user endpoints:
//! - GET /admin/users - List users (optionally including soft-deleted)
//! - POST /admin/users - Create a new user
//! - GET /admin/users/:id - Get user details
//! - PUT /admin/users/:id - Update user
//! - DELETE /admin/users/:id - Soft-delete user (or queue hard delete)
//! - POST /admin/users/:id/restore - Restore a soft-deleted user

use crate::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, restore_user_handler,
    search_users_handler, update_user_handler,
};
use crate::middleware::admin_guard;
use crate::services::UserAdminService;
use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use photark_db::{AlbumStore, JobQueue, PgAlbumStore, PgJobQueue, PgUserStore, UserStore};
use sqlx::PgPool;
use std::sync::Arc;

/// Application state for the admin user routes.
#[derive(Clone)]
pub struct AdminUsersState {
    /// User lifecycle orchestration service.
    pub service: Arc<UserAdminService>,
}

impl AdminUsersState {
    /// Create state over explicit store implementations.
    ///
    /// Used by tests to inject in-memory doubles.
    #[must_use]
    pub fn new(
        users: Arc<dyn UserStore>,
        albums: Arc<dyn AlbumStore>,
        jobs: Arc<dyn JobQueue>,
    ) -> Self {
        Self {
            service: Arc::new(UserAdminService::new(users, albums, jobs)),
        }
    }

    /// Create state backed by Postgres stores over the given pool.
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgUserStore::new(pool.clone())),
            Arc::new(PgAlbumStore::new(pool.clone())),
            Arc::new(PgJobQueue::new(pool)),
        )
    }
}

/// Create the admin user management router.
///
/// All endpoints require an authenticated admin; the guard reads
/// `AuthClaims` inserted by the authentication middleware.
///
/// The router is mounted at `/admin/users` by the application.
pub fn admin_users_router(state: AdminUsersState) -> Router {
    Router::new()
        .route("/", get(search_users_handler))
        .route("/", post(create_user_handler))
        .route("/:id", get(get_user_handler))
        .route("/:id", put(update_user_handler))
        .route("/:id", delete(delete_user_handler))
        .route("/:id/restore", post(restore_user_handler))
        .layer(middleware::from_fn(admin_guard))
        .layer(axum::Extension(state.service))
}
