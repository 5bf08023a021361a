//! Payment gateway configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Payment gateway configuration
///
/// Credentials are held as [`SecretString`] so they stay redacted in
/// `Debug` output and log lines.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Whether the gateway accepts payments
    #[serde(default)]
    pub enabled: bool,

    /// Payment method title shown at checkout
    #[serde(default = "default_title")]
    pub title: String,

    /// Payment method description shown at checkout
    #[serde(default = "default_description")]
    pub description: String,

    /// Merchant API key
    #[serde(default = "default_secret")]
    pub api_key: SecretString,

    /// Merchant API secret
    #[serde(default = "default_secret")]
    pub api_secret: SecretString,

    /// Route requests to the test endpoints instead of live
    #[serde(default = "default_test_mode")]
    pub test_mode: bool,

    /// Gateway request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Override for the authentication endpoint URL
    pub auth_url: Option<String>,

    /// Override for the checkout session endpoint URL
    pub checkout_url: Option<String>,
}

impl GatewayConfig {
    /// Check if requests go to the test endpoints
    pub fn is_test_mode(&self) -> bool {
        self.test_mode
    }

    /// Check if requests go to the live endpoints
    pub fn is_live_mode(&self) -> bool {
        !self.test_mode
    }

    /// Validate gateway configuration
    ///
    /// Credentials are only required once the gateway is enabled, so a
    /// fresh deployment can boot with the gateway switched off.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }

        if self.enabled {
            if self.api_key.expose_secret().is_empty() {
                return Err(ValidationError::MissingRequired("GATEWAY_API_KEY"));
            }
            if self.api_secret.expose_secret().is_empty() {
                return Err(ValidationError::MissingRequired("GATEWAY_API_SECRET"));
            }
        }

        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            title: default_title(),
            description: default_description(),
            api_key: default_secret(),
            api_secret: default_secret(),
            test_mode: default_test_mode(),
            request_timeout_secs: default_request_timeout(),
            auth_url: None,
            checkout_url: None,
        }
    }
}

fn default_title() -> String {
    "Custom Payment".to_string()
}

fn default_description() -> String {
    "Pay securely via our payment gateway.".to_string()
}

fn default_secret() -> SecretString {
    SecretString::new(String::new())
}

fn default_test_mode() -> bool {
    true
}

fn default_request_timeout() -> u64 {
    30
}
