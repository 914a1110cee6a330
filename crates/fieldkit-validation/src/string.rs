//! String presence and length validators

/// True when the string is empty after trimming
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// True when the string has at least `min` characters
pub fn has_min_length(s: &str, min: usize) -> bool {
    s.chars().count() >= min
}
