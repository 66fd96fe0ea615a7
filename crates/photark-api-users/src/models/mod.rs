//! Request and response models for the admin user management API.

mod requests;
mod responses;

pub use requests::{CreateUserRequest, DeleteUserRequest, SearchUsersQuery, UpdateUserRequest};
pub use responses::{UserAdminResponse, UserResponse};
