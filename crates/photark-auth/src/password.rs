//! Password hashing with Argon2id.
//!
//! Provides secure password hashing and verification using Argon2id
//! with OWASP-recommended parameters.

use crate::error::AuthError;
use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

/// Password hasher configuration.
///
/// Uses OWASP 2024 recommended parameters for Argon2id:
/// - Memory: 19456 KiB (19 MiB)
/// - Iterations: 2
/// - Parallelism: 1
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    /// Create a new password hasher with OWASP-recommended parameters.
    #[must_use]
    pub fn new() -> Self {
        // OWASP 2024 recommended parameters: m=19456 (19 MiB), t=2, p=1.
        // These are hardcoded constants that are always valid - the expect() is
        // acceptable since failure indicates a bug in the Argon2 library.
        let params = Params::new(
            19456, // m_cost: memory in KiB
            2,     // t_cost: iterations
            1,     // p_cost: parallelism
            None,  // output_len: default (32 bytes)
        )
        .expect("OWASP 2024 Argon2 parameters are valid constants");

        Self { params }
    }

    /// Create a password hasher with custom parameters.
    ///
    /// # Errors
    ///
    /// Returns error if parameters are invalid.
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, AuthError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AuthError::HashingFailed(format!("Invalid parameters: {e}")))?;

        Ok(Self { params })
    }

    /// Hash a password using Argon2id.
    ///
    /// # Returns
    ///
    /// A PHC-formatted hash string.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::HashingFailed` if hashing fails.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashingFailed(format!("Hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verify a password against a hash.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if password matches, `Ok(false)` if not.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidHashFormat` if the hash format is invalid.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidHashFormat)?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        match argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(_) => Ok(false),
        }
    }
}

/// Hash a password using Argon2id with OWASP-recommended parameters.
///
/// This is a convenience function using the default `PasswordHasher`.
///
/// # Example
///
/// ```rust
/// use photark_auth::hash_password;
///
/// let hash = hash_password("my-secure-password").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    PasswordHasher::new().hash(password)
}

/// Verify a password against an Argon2id hash.
///
/// This is a convenience function using the default `PasswordHasher`.
///
/// # Example
///
/// ```rust
/// use photark_auth::{hash_password, verify_password};
///
/// let hash = hash_password("my-password").unwrap();
/// assert!(verify_password("my-password", &hash).unwrap());
/// assert!(!verify_password("wrong-password", &hash).unwrap());
/// ```
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    PasswordHasher::new().verify(password, hash)
}
