//! Phone number shape validation

use once_cell::sync::Lazy;
use regex::Regex;

// Optional leading '+', then 7+ of digits, whitespace, hyphens, parentheses.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9\s\-()]{7,}$").unwrap());

/// Validates phone number shape
///
/// Loose by design: accepts international prefixes and common grouping
/// characters without enforcing any regional numbering plan.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}
