//! Authenticated principal claims.
//!
//! `AuthClaims` is what the authentication middleware inserts into request
//! extensions after validating a session token. Downstream handlers and
//! guards read the claims to decide authorization; they never touch raw
//! credentials.

use chrono::{Duration, Utc};
use photark_core::UserId;
use serde::{Deserialize, Serialize};

/// Claims describing the authenticated principal.
///
/// # Example
///
/// ```rust
/// use photark_auth::AuthClaims;
/// use photark_core::UserId;
///
/// let claims = AuthClaims::builder()
///     .subject(UserId::new().to_string())
///     .email("admin@example.com")
///     .is_admin(true)
///     .expires_in_secs(3600)
///     .build();
///
/// assert!(claims.is_admin);
/// assert!(claims.user_id().is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthClaims {
    /// Subject - the authenticated user's ID.
    pub sub: String,

    /// The authenticated user's email address.
    pub email: String,

    /// Whether the principal is an administrator.
    #[serde(default)]
    pub is_admin: bool,

    /// Expiration time as Unix timestamp.
    pub exp: i64,

    /// Issued-at time as Unix timestamp.
    pub iat: i64,
}

impl AuthClaims {
    /// Create a builder for constructing claims.
    #[must_use]
    pub fn builder() -> AuthClaimsBuilder {
        AuthClaimsBuilder::default()
    }

    /// The subject parsed as a typed [`UserId`], if it is a valid UUID.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.sub.parse().ok()
    }

    /// Whether the claims have expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.exp <= Utc::now().timestamp()
    }
}

/// Builder for [`AuthClaims`].
#[derive(Debug, Default)]
pub struct AuthClaimsBuilder {
    sub: String,
    email: String,
    is_admin: bool,
    expires_in_secs: i64,
}

impl AuthClaimsBuilder {
    /// Set the subject (user ID).
    #[must_use]
    pub fn subject(mut self, sub: impl Into<String>) -> Self {
        self.sub = sub.into();
        self
    }

    /// Set the principal's email address.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Mark the principal as an administrator.
    #[must_use]
    pub fn is_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    /// Set the token lifetime in seconds from now.
    #[must_use]
    pub fn expires_in_secs(mut self, secs: i64) -> Self {
        self.expires_in_secs = secs;
        self
    }

    /// Build the claims, stamping `iat` with the current time.
    #[must_use]
    pub fn build(self) -> AuthClaims {
        let now = Utc::now();
        AuthClaims {
            sub: self.sub,
            email: self.email,
            is_admin: self.is_admin,
            exp: (now + Duration::seconds(self.expires_in_secs)).timestamp(),
            iat: now.timestamp(),
        }
    }
}
