// File: src/config.rs
// Purpose: Configuration parsing from fieldkit.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Runtime configuration for the forms crate
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormsConfig {
    #[serde(default)]
    pub transport: TransportConfig,
}

/// Stub transport timing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Simulated request duration for a login submission, in milliseconds
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,

    /// Simulated request duration for a signup submission, in milliseconds
    #[serde(default = "default_signup_delay_ms")]
    pub signup_delay_ms: u64,
}

// Default values
fn default_login_delay_ms() -> u64 {
    600
}

fn default_signup_delay_ms() -> u64 {
    800
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: default_login_delay_ms(),
            signup_delay_ms: default_signup_delay_ms(),
        }
    }
}

impl FormsConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults, not an error
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormsConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the default path (./fieldkit.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("fieldkit.toml")
    }
}
