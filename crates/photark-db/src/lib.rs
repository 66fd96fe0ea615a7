//! photark database layer.
//!
//! Entities, store interfaces, and their Postgres implementations.
//!
//! # Modules
//!
//! - [`models`] - Entity types (`User`, `Job`)
//! - [`stores`] - Store traits (`UserStore`, `AlbumStore`, `JobQueue`) and
//!   Postgres implementations
//! - [`migrations`] - Embedded SQL migrations
//! - [`error`] - `StoreError`

pub mod error;
pub mod migrations;
pub mod models;
pub mod stores;

pub use error::StoreError;
pub use migrations::run_migrations;
pub use models::{Job, User, UserStatus};
pub use stores::{
    AlbumStore, JobQueue, NewUser, PgAlbumStore, PgJobQueue, PgUserStore, UserMetadataKey,
    UserPatch, UserStore,
};
