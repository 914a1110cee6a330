// File: src/forms/signup.rs
// Purpose: Registration record, signup validation, and submission controller

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use fieldkit_validation::{has_min_length, is_blank, is_valid_email, is_valid_phone, normalize_email};

use crate::field::{FieldDescriptor, FieldKind};
use crate::forms::{SubmitOutcome, PASSWORD_MIN_LEN};
use crate::transport::Transport;
use crate::validation::ValidationErrors;

/// Errors not attributed to a single field are keyed under this name
pub const FORM_ERROR_FIELD: &str = "form";

const GENERIC_FAILURE: &str = "Signup failed. Please try again.";

/// Closed set of account roles offered by the signup selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    #[default]
    Student,
    Referee,
    SchoolManagerCoach,
}

impl Role {
    /// All selectable roles, in display order
    pub const ALL: [Role; 3] = [Role::Student, Role::Referee, Role::SchoolManagerCoach];

    /// Wire name, as the selector and the payload spell it
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Referee => "referee",
            Role::SchoolManagerCoach => "school-manager-coach",
        }
    }

    /// Human-readable label for the selector
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Referee => "Referee",
            Role::SchoolManagerCoach => "School Manager/Coach",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role value outside the closed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "referee" => Ok(Role::Referee),
            "school-manager-coach" => Ok(Role::SchoolManagerCoach),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Eight-field registration record for one signup session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub institution: String,
    pub role: Role,
    pub password: String,
    pub confirm_password: String,
}

impl Registration {
    /// Check every field independently and return the full error map.
    ///
    /// No short-circuiting: the user sees all problems at once. The role has
    /// no rule; the selector and the `FromStr` boundary keep it in the closed
    /// set.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if is_blank(&self.first_name) {
            errors.insert("firstName", "First name is required.");
        }
        if is_blank(&self.last_name) {
            errors.insert("lastName", "Last name is required.");
        }
        if is_blank(&self.phone) {
            errors.insert("phone", "Phone number is required.");
        } else if !is_valid_phone(&self.phone) {
            errors.insert("phone", "Enter a valid phone number.");
        }
        if is_blank(&self.email) {
            errors.insert("email", "Email is required.");
        } else if !is_valid_email(&self.email) {
            errors.insert("email", "Enter a valid email address.");
        }
        if is_blank(&self.institution) {
            errors.insert("institution", "Institution is required.");
        }
        if self.password.is_empty() {
            errors.insert("password", "Password is required.");
        } else if !has_min_length(&self.password, PASSWORD_MIN_LEN) {
            errors.insert("password", "Password must be at least 8 characters.");
        }
        if self.confirm_password.is_empty() {
            errors.insert("confirmPassword", "Confirm your password.");
        } else if self.confirm_password != self.password {
            errors.insert("confirmPassword", "Passwords do not match.");
        }

        errors
    }
}

/// Normalized signup payload handed to the transport.
///
/// The confirmation password is a form-only concern and never leaves the
/// form; role and password pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub institution: String,
    pub role: Role,
    pub password: String,
}

impl From<&Registration> for SignupPayload {
    fn from(data: &Registration) -> Self {
        Self {
            first_name: data.first_name.trim().to_string(),
            last_name: data.last_name.trim().to_string(),
            phone: data.phone.trim().to_string(),
            email: normalize_email(&data.email),
            institution: data.institution.trim().to_string(),
            role: data.role,
            password: data.password.clone(),
        }
    }
}

/// Signup form instance: field state plus the submission controller
#[derive(Debug, Default)]
pub struct SignupForm {
    data: Registration,
    submitting: bool,
    errors: ValidationErrors,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &Registration {
        &self.data
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Current error map, per-field plus the `"form"` entry for submission failures
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Keyed change-event dispatch from the rendering collaborator.
    ///
    /// Returns whether the change was applied. A role value outside the
    /// closed set is rejected and the previous selection kept.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        match name {
            "firstName" => self.data.first_name = value.to_string(),
            "lastName" => self.data.last_name = value.to_string(),
            "phone" => self.data.phone = value.to_string(),
            "email" => self.data.email = value.to_string(),
            "institution" => self.data.institution = value.to_string(),
            "role" => match Role::from_str(value) {
                Ok(role) => self.data.role = role,
                Err(err) => {
                    warn!(error = %err, "rejected role change");
                    return false;
                }
            },
            "password" => self.data.password = value.to_string(),
            "confirmPassword" => self.data.confirm_password = value.to_string(),
            _ => return false,
        }
        true
    }

    /// Field descriptors for the rendering collaborator
    pub fn fields(&self) -> Vec<FieldDescriptor> {
        [
            ("firstName", FieldKind::Text, "First name", &self.data.first_name),
            ("lastName", FieldKind::Text, "Last name", &self.data.last_name),
            ("phone", FieldKind::Tel, "Phone number", &self.data.phone),
            ("email", FieldKind::Email, "Email", &self.data.email),
            ("institution", FieldKind::Text, "Institution", &self.data.institution),
            ("password", FieldKind::Password, "Password", &self.data.password),
            (
                "confirmPassword",
                FieldKind::Password,
                "Confirm password",
                &self.data.confirm_password,
            ),
        ]
        .into_iter()
        .map(|(name, kind, label, value)| FieldDescriptor {
            name,
            kind,
            label,
            value: value.clone(),
            invalid: self.errors.has_error(name),
            error: self.errors.get(name).map(str::to_string),
        })
        .chain(std::iter::once(FieldDescriptor {
            name: "role",
            kind: FieldKind::Radio,
            label: "Role",
            value: self.data.role.as_str().to_string(),
            invalid: false,
            error: None,
        }))
        .collect()
    }

    /// Run the submission protocol: validate all fields, hand off, report.
    ///
    /// The error map is recomputed in full on every call. Transport failures
    /// surface as the `"form"` entry with a fixed message; `submitting` is
    /// false again by the time this returns.
    pub async fn submit<T: Transport + ?Sized>(&mut self, transport: &T) -> SubmitOutcome {
        self.errors = self.data.validate();
        if !self.errors.is_empty() {
            debug!(fields = self.errors.len(), "signup rejected by validation");
            return SubmitOutcome::Invalid;
        }

        self.submitting = true;
        let payload = SignupPayload::from(&self.data);
        debug!(email = %payload.email, role = %payload.role, "submitting signup");
        let result = transport.submit_signup(&payload).await;
        self.submitting = false;

        match result {
            Ok(()) => SubmitOutcome::Accepted,
            Err(err) => {
                warn!(error = %err, "signup submission failed");
                self.errors.insert(FORM_ERROR_FIELD, GENERIC_FAILURE);
                SubmitOutcome::Failed
            }
        }
    }
}
