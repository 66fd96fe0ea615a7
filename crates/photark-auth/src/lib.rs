//! Authentication building blocks for photark.
//!
//! This crate provides:
//! - `AuthClaims`, the authenticated principal inserted into request
//!   extensions by the authentication middleware
//! - Argon2id password hashing with OWASP-recommended parameters
//!
//! # Example
//!
//! ```rust
//! use photark_auth::{hash_password, verify_password, AuthClaims};
//! use photark_core::UserId;
//!
//! let claims = AuthClaims::builder()
//!     .subject(UserId::new().to_string())
//!     .email("admin@example.com")
//!     .is_admin(true)
//!     .expires_in_secs(3600)
//!     .build();
//! assert!(claims.is_admin);
//!
//! let hash = hash_password("my-secure-password").unwrap();
//! assert!(verify_password("my-secure-password", &hash).unwrap());
//! ```

mod claims;
mod error;
mod password;

pub use claims::{AuthClaims, AuthClaimsBuilder};
pub use error::AuthError;
pub use password::{hash_password, verify_password, PasswordHasher};
