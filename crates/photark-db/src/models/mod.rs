//! Entity models for the photark backend.

pub mod job;
pub mod user;

pub use job::Job;
pub use user::{User, UserStatus};
