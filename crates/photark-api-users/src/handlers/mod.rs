//! HTTP handlers for the admin user management API.

pub mod create;
pub mod delete;
pub mod get;
pub mod restore;
pub mod search;
pub mod update;

pub use create::create_user_handler;
pub use delete::delete_user_handler;
pub use get::get_user_handler;
pub use restore::restore_user_handler;
pub use search::search_users_handler;
pub use update::update_user_handler;
