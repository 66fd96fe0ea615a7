//! Middleware for the admin user management API.

mod admin_guard;

pub use admin_guard::admin_guard;
