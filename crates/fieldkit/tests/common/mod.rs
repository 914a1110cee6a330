//! Test transports shared by the form lifecycle tests

// Each test binary compiles its own copy; not every helper is used by both.
#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use fieldkit::{LoginPayload, SignupPayload, Transport, TransportError};

/// Records every payload it receives and always succeeds
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub logins: Mutex<Vec<LoginPayload>>,
    pub signups: Mutex<Vec<SignupPayload>>,
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn submit_login(&self, payload: &LoginPayload) -> Result<(), TransportError> {
        self.logins.lock().unwrap().push(payload.clone());
        Ok(())
    }

    async fn submit_signup(&self, payload: &SignupPayload) -> Result<(), TransportError> {
        self.signups.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

impl RecordingTransport {
    pub fn login_count(&self) -> usize {
        self.logins.lock().unwrap().len()
    }

    pub fn signup_count(&self) -> usize {
        self.signups.lock().unwrap().len()
    }
}

/// Always fails, optionally with a carried message
#[derive(Debug, Default)]
pub struct FailingTransport {
    pub message: Option<String>,
}

impl FailingTransport {
    pub fn with_message(message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
        }
    }

    fn error(&self) -> TransportError {
        match &self.message {
            Some(message) => TransportError::new(message.clone()),
            None => TransportError::unspecified(),
        }
    }
}

#[async_trait]
impl Transport for FailingTransport {
    async fn submit_login(&self, _payload: &LoginPayload) -> Result<(), TransportError> {
        Err(self.error())
    }

    async fn submit_signup(&self, _payload: &SignupPayload) -> Result<(), TransportError> {
        Err(self.error())
    }
}
