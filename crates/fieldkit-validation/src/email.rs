//! Email shape validation and normalization

use once_cell::sync::Lazy;
use regex::Regex;

// Loose shape check: non-whitespace, '@', non-whitespace, '.', non-whitespace.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());

/// Validates email shape
///
/// Intentionally permissive: the server owns real address verification, this
/// only catches obvious typos before submission.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Trims and lowercases an email for the hand-off payload
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
