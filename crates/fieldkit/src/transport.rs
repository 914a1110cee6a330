// File: src/transport.rs
// Purpose: Transport collaborator trait and the stubbed implementation

use std::time::Duration;

use async_trait::async_trait;

use crate::config::TransportConfig;
use crate::error::TransportError;
use crate::forms::login::LoginPayload;
use crate::forms::signup::SignupPayload;

/// Trait for submission transports
///
/// Forms hand a normalized payload to one of these and treat any `Err` as a
/// recoverable submission failure. Implementations must not assume the
/// payload outlives the call.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Deliver a login submission
    async fn submit_login(&self, payload: &LoginPayload) -> Result<(), TransportError>;

    /// Deliver a signup submission
    async fn submit_signup(&self, payload: &SignupPayload) -> Result<(), TransportError>;
}

/// Placeholder transport standing in for the real backend.
///
/// Sleeps for a fixed duration per form and always succeeds. No request is
/// made and the payload is dropped.
#[derive(Debug, Clone)]
pub struct StubTransport {
    login_delay: Duration,
    signup_delay: Duration,
}

impl StubTransport {
    pub fn new(login_delay: Duration, signup_delay: Duration) -> Self {
        Self {
            login_delay,
            signup_delay,
        }
    }

    /// Build from the `[transport]` config section
    pub fn from_config(config: &TransportConfig) -> Self {
        Self::new(
            Duration::from_millis(config.login_delay_ms),
            Duration::from_millis(config.signup_delay_ms),
        )
    }

    /// Zero-delay stub, handy in tests
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }
}

impl Default for StubTransport {
    fn default() -> Self {
        Self::from_config(&TransportConfig::default())
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn submit_login(&self, _payload: &LoginPayload) -> Result<(), TransportError> {
        tokio::time::sleep(self.login_delay).await;
        Ok(())
    }

    async fn submit_signup(&self, _payload: &SignupPayload) -> Result<(), TransportError> {
        tokio::time::sleep(self.signup_delay).await;
        Ok(())
    }
}
