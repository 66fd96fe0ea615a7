//! Services for the admin user management API.

mod user_admin_service;

pub use user_admin_service::UserAdminService;
