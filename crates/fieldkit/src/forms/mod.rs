// File: src/forms/mod.rs
// Purpose: Form controllers for the login and signup flows

pub mod login;
pub mod signup;

/// Minimum password length shared by both forms
pub const PASSWORD_MIN_LEN: usize = 8;

/// Which arm of the submission protocol ran.
///
/// State for the renderer lives on the form itself; this is the summary a
/// caller can branch on without inspecting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the transport accepted the payload
    Accepted,
    /// Validation failed; no transport call was made
    Invalid,
    /// Validation passed but the transport call failed
    Failed,
}
