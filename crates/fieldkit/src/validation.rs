// File: src/validation.rs
// Purpose: Field-keyed validation errors for forms

use std::collections::HashMap;

/// Field names mapped to error messages; empty means valid.
///
/// Invariant: a field appears here iff its current value violates its rule.
/// Forms recompute the whole map on every validation pass rather than
/// patching individual entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: HashMap<String, String>,
}

impl ValidationErrors {
    /// Create an empty (valid) result
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field, replacing any earlier message
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    /// True when no field has an error
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields currently in error
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if a field has an error
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get the error message for a field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|s| s.as_str())
    }

    /// Names of all fields currently in error
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(|s| s.as_str())
    }

    /// Drop all recorded errors
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}
