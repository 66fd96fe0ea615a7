//! Email validation following RFC 5322.
//!
//! Validates email addresses using a regex pattern that handles:
//! - Standard email addresses (user@example.com)
//! - Plus addressing (user+tag@example.com)
//! - Subdomains (user@mail.example.com)

use super::error::ValidationError;
use serde_json::json;
use std::sync::LazyLock;

/// RFC 5322 compliant email regex pattern.
///
/// This pattern validates:
/// - Local part: alphanumeric, dots, underscores, plus signs, hyphens
/// - Domain: alphanumeric with hyphens, proper TLD structure
/// - No consecutive dots, no leading/trailing dots
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"(?i)^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$"
    ).expect("EMAIL_REGEX is a valid regex pattern")
});

/// Maximum allowed email length (per RFC 5321).
const MAX_EMAIL_LENGTH: usize = 254;

/// Minimum reasonable email length (a@b.c).
const MIN_EMAIL_LENGTH: usize = 5;

/// Validate an email address.
///
/// # Examples
///
/// ```
/// use photark_api_users::validation::validate_email;
///
/// assert!(validate_email("user@example.com").is_ok());
/// assert!(validate_email("user+tag@example.com").is_ok());
///
/// assert!(validate_email("invalid-email").is_err());
/// assert!(validate_email("@example.com").is_err());
/// ```
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::new(
            "email",
            "required",
            "Email is required",
        ));
    }

    if email.len() < MIN_EMAIL_LENGTH {
        return Err(ValidationError::with_constraints(
            "email",
            "too_short",
            format!("Email must be at least {MIN_EMAIL_LENGTH} characters"),
            json!({"min_length": MIN_EMAIL_LENGTH, "actual": email.len()}),
        ));
    }

    // RFC 5321 maximum
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::with_constraints(
            "email",
            "too_long",
            format!("Email must not exceed {MAX_EMAIL_LENGTH} characters"),
            json!({"max_length": MAX_EMAIL_LENGTH, "actual": email.len()}),
        ));
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::new(
            "email",
            "invalid_format",
            "Invalid email format",
        ));
    }

    Ok(())
}
