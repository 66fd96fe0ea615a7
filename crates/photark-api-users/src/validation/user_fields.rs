//! Validation for user profile fields: display name, password, storage quota.

use super::error::ValidationError;
use serde_json::json;

/// Maximum display name length.
const MAX_NAME_LENGTH: usize = 255;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length (argon2 input cap, well above any sane password).
const MAX_PASSWORD_LENGTH: usize = 128;

/// Validate a display name.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::new("name", "required", "Name is required"));
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::with_constraints(
            "name",
            "too_long",
            format!("Name must not exceed {MAX_NAME_LENGTH} characters"),
            json!({"max_length": MAX_NAME_LENGTH, "actual": name.chars().count()}),
        ));
    }

    Ok(())
}

/// Validate a plaintext password before hashing.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let len = password.chars().count();

    if len < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::with_constraints(
            "password",
            "too_short",
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
            json!({"min_length": MIN_PASSWORD_LENGTH, "actual": len}),
        ));
    }

    if len > MAX_PASSWORD_LENGTH {
        return Err(ValidationError::with_constraints(
            "password",
            "too_long",
            format!("Password must not exceed {MAX_PASSWORD_LENGTH} characters"),
            json!({"max_length": MAX_PASSWORD_LENGTH, "actual": len}),
        ));
    }

    Ok(())
}

/// Validate a storage quota in bytes. `None` means unlimited and is always valid.
pub fn validate_quota(quota_size_in_bytes: Option<i64>) -> Result<(), ValidationError> {
    if let Some(quota) = quota_size_in_bytes {
        if quota < 0 {
            return Err(ValidationError::with_constraints(
                "quotaSizeInBytes",
                "negative",
                "Quota must be zero or a positive number of bytes",
                json!({"min": 0, "actual": quota}),
            ));
        }
    }
    Ok(())
}
