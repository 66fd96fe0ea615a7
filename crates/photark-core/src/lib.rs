//! photark Core Library
//!
//! Shared types for the photark media backend.
//!
//! # Modules
//!
//! - [`ids`] - Strongly typed identifiers (`UserId`)
//! - [`preferences`] - Effective user preferences and sparse patch utilities
//!
//! # Example
//!
//! ```
//! use photark_core::{Preferences, UserId};
//!
//! let user_id = UserId::new();
//! let prefs = Preferences::default();
//! assert!(prefs.memories.enabled);
//! ```

pub mod ids;
pub mod preferences;

// Re-export main types for convenient access
pub use ids::{ParseIdError, UserId};
pub use preferences::{preferences_patch, Preferences, UserAvatarColor};
