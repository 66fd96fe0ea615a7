//! Input validation for the admin user management API.

mod email;
mod error;
mod user_fields;

pub use email::validate_email;
pub use error::ValidationError;
pub use user_fields::{validate_name, validate_password, validate_quota};
