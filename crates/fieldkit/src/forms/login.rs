// File: src/forms/login.rs
// Purpose: Credential record, login validation, and submission controller

use serde::Serialize;
use tracing::{debug, warn};

use fieldkit_validation::{has_min_length, is_blank, is_valid_email, normalize_email};

use crate::field::{FieldDescriptor, FieldKind};
use crate::forms::{SubmitOutcome, PASSWORD_MIN_LEN};
use crate::transport::Transport;

const GENERIC_FAILURE: &str = "Login failed. Please try again.";

/// Two-field credential record for one login session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Returns the first failing rule's message, in fixed order; `None` when valid
    pub fn validate(&self) -> Option<String> {
        if is_blank(&self.email) {
            return Some("Email is required.".to_string());
        }
        if !is_valid_email(&self.email) {
            return Some("Enter a valid email address.".to_string());
        }
        if self.password.is_empty() {
            return Some("Password is required.".to_string());
        }
        if !has_min_length(&self.password, PASSWORD_MIN_LEN) {
            return Some("Password must be at least 8 characters.".to_string());
        }
        None
    }
}

/// Normalized login payload handed to the transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

impl From<&Credentials> for LoginPayload {
    fn from(data: &Credentials) -> Self {
        Self {
            email: normalize_email(&data.email),
            password: data.password.clone(),
        }
    }
}

/// Login form instance: field state plus the submission controller.
///
/// One instance per rendered form. Overlapping submits are ruled out by the
/// `&mut self` receiver; the renderer additionally disables the submit
/// control while `is_submitting()` is true.
#[derive(Debug, Default)]
pub struct LoginForm {
    data: Credentials,
    submitting: bool,
    error: Option<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &Credentials {
        &self.data
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Current form-level error, validation or submission
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Keyed change-event dispatch from the rendering collaborator.
    ///
    /// Returns whether the field name was recognized; unknown names leave the
    /// form untouched.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        match name {
            "email" => self.data.email = value.to_string(),
            "password" => self.data.password = value.to_string(),
            _ => return false,
        }
        true
    }

    /// Field descriptors for the rendering collaborator.
    ///
    /// A field flags invalid only while an error is showing and its value
    /// still fails its own rule, so fixing one field clears its highlight
    /// before the next submit.
    pub fn fields(&self) -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor {
                name: "email",
                kind: FieldKind::Email,
                label: "Email",
                value: self.data.email.clone(),
                invalid: self.error.is_some() && !is_valid_email(&self.data.email),
                error: None,
            },
            FieldDescriptor {
                name: "password",
                kind: FieldKind::Password,
                label: "Password",
                value: self.data.password.clone(),
                invalid: self.error.is_some()
                    && !has_min_length(&self.data.password, PASSWORD_MIN_LEN),
                error: None,
            },
        ]
    }

    /// Run the submission protocol: validate, hand off, report.
    ///
    /// Never returns an error. Validation failures and transport failures
    /// both land in `error()`; `submitting` is false again by the time this
    /// returns, whatever happened.
    pub async fn submit<T: Transport + ?Sized>(&mut self, transport: &T) -> SubmitOutcome {
        self.error = None;

        if let Some(message) = self.data.validate() {
            debug!(%message, "login rejected by validation");
            self.error = Some(message);
            return SubmitOutcome::Invalid;
        }

        self.submitting = true;
        let payload = LoginPayload::from(&self.data);
        debug!(email = %payload.email, "submitting login");
        let result = transport.submit_login(&payload).await;
        self.submitting = false;

        match result {
            Ok(()) => SubmitOutcome::Accepted,
            Err(err) => {
                warn!(error = %err, "login submission failed");
                self.error = Some(
                    err.message()
                        .map(str::to_string)
                        .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
                );
                SubmitOutcome::Failed
            }
        }
    }
}
