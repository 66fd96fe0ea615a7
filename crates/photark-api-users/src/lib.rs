//! Admin user management API.
//!
//! Endpoints to search, create, update, soft-delete, hard-delete, and
//! restore user accounts, with the album cascade and background-job side
//! effects those operations carry.
//!
//! # Modules
//!
//! - [`router`] - Route configuration and state wiring
//! - [`handlers`] - HTTP endpoint handlers
//! - [`services`] - User lifecycle orchestration
//! - [`middleware`] - Admin guard
//! - [`models`] - Request/response DTOs
//! - [`validation`] - Input validation
//! - [`error`] - `ApiUsersError` and problem-details rendering

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;
pub mod validation;

pub use error::ApiUsersError;
pub use router::{admin_users_router, AdminUsersState};
pub use services::UserAdminService;
