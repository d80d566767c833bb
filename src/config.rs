//! Configuration management for the contact relay.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured if present.

use crate::domain::Mailbox;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default Resend API base URL.
pub const DEFAULT_API_URL: &str = "https://api.resend.com";

/// Default sender for contact form emails.
pub const DEFAULT_FROM: &str = "Lemonseed Studio <connect@lemonseed.studio>";

/// Default recipient for contact form emails.
pub const DEFAULT_TO: &str = "srivardhan@lemonseed.studio";

/// Configuration for the contact relay.
#[derive(Debug, Clone)]
pub struct Config {
    /// Resend API base URL
    pub api_url: String,

    /// Resend API key for authentication
    pub api_key: String,

    /// Sender of every contact email
    pub from: Mailbox,

    /// Recipient of every contact email
    pub to: Mailbox,

    /// TCP address the HTTP server binds to (default: "0.0.0.0:3000")
    pub bind_address: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `RESEND_API_KEY`: API key for the email provider
    ///
    /// Optional environment variables:
    /// - `RESEND_API_URL`: Provider base URL (default: https://api.resend.com)
    /// - `CONTACT_FROM`: Sender mailbox (default: Lemonseed Studio <connect@lemonseed.studio>)
    /// - `CONTACT_TO`: Recipient mailbox (default: srivardhan@lemonseed.studio)
    /// - `BIND_ADDRESS`: Listen address (default: 0.0.0.0:3000)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_process_env()
    }

    /// Read configuration from the process environment only, without `.env`.
    pub fn from_process_env() -> ConfigResult<Self> {
        let api_key = env::var("RESEND_API_KEY")
            .map_err(|_| ConfigError::MissingVar("RESEND_API_KEY".to_string()))?;

        if api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "RESEND_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let api_url = env::var("RESEND_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "RESEND_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let from = Self::parse_env_mailbox("CONTACT_FROM", DEFAULT_FROM)?;
        let to = Self::parse_env_mailbox("CONTACT_TO", DEFAULT_TO)?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;

        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be at least 1 second".to_string(),
            });
        }

        let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            api_url,
            api_key,
            from,
            to,
            bind_address,
            request_timeout,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a mailbox with a default value.
    fn parse_env_mailbox(var_name: &str, default: &str) -> ConfigResult<Mailbox> {
        let val = env::var(var_name).unwrap_or_else(|_| default.to_string());
        val.parse::<Mailbox>()
            .map_err(|e| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: e.to_string(),
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            from: DEFAULT_FROM.parse().expect("default sender is a valid mailbox"),
            to: DEFAULT_TO.parse().expect("default recipient is a valid mailbox"),
            bind_address: "0.0.0.0:3000".to_string(),
            request_timeout: 10,
            log_level: "info".to_string(),
        }
    }
}
