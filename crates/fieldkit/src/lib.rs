// Fieldkit - form state and validation runtime
// Typed login/signup form cores with a pluggable submission transport

pub mod config;
pub mod error;
pub mod field;
pub mod forms;
pub mod transport;
pub mod validation;

// Re-export the form surface
pub use forms::login::{Credentials, LoginForm, LoginPayload};
pub use forms::signup::{Registration, Role, SignupForm, SignupPayload};
pub use forms::SubmitOutcome;

// Re-export collaborator types
pub use config::FormsConfig;
pub use error::TransportError;
pub use field::{FieldDescriptor, FieldKind};
pub use transport::{StubTransport, Transport};
pub use validation::ValidationErrors;

// Re-export the validator functions for custom use
pub use fieldkit_validation as validators;
