// File: src/error.rs
// Purpose: Error types for the submission lifecycle

use thiserror::Error;

/// Failure raised by the transport collaborator.
///
/// Carries an optional human-readable message. Forms catch this and fall back
/// to a generic per-form message when none is provided; it never propagates
/// out of a submit call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .message.as_deref().unwrap_or("request failed"))]
pub struct TransportError {
    message: Option<String>,
}

impl TransportError {
    /// Failure with a message suitable for display to the user
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Failure with no usable message; forms render their fallback text
    pub fn unspecified() -> Self {
        Self { message: None }
    }

    /// The carried message, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
