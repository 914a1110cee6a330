//! Fieldkit Validation
//!
//! Pure field validators shared by the login and signup forms.
//! No form state here, only string checks and normalization.

pub mod email;
pub mod phone;
pub mod string;

// Re-export all validators
pub use email::*;
pub use phone::*;
pub use string::*;
