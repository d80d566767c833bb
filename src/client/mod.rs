//! HTTP client for the Resend transactional email API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication and error
//! mapping for the `/emails` endpoint.

mod async_wrapper;
pub use async_wrapper::{AsyncResendClient, EmailSender};

use crate::config::Config;
use crate::error::{MailApiError, MailApiResult};
use crate::models::{OutboundEmail, ProviderErrorBody, SendEmailResponse};
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the Resend API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ResendClient {
    /// Base URL for the Resend API
    base_url: String,

    /// API key for authentication
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl std::fmt::Debug for ResendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl ResendClient {
    /// Create a new ResendClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            agent: Arc::new(agent),
        }
    }

    /// Create a ResendClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
        }
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Send an email through `POST /emails`.
    pub fn send_email(&self, email: &OutboundEmail) -> MailApiResult<SendEmailResponse> {
        let url = self.build_url("/emails");

        tracing::debug!(to = ?email.to, subject = %email.subject, "POST {}", url);

        let response = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(email)
            .map_err(|e| self.map_error(e))?;

        tracing::debug!("POST {} - Success (status: {})", url, response.status());

        let body = response
            .into_string()
            .map_err(|e| MailApiError::HttpError(e.to_string()))?;

        serde_json::from_str(&body).map_err(MailApiError::JsonError)
    }

    /// Map a ureq error to a MailApiError.
    fn map_error(&self, error: ureq::Error) -> MailApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let raw = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                let message = serde_json::from_str::<ProviderErrorBody>(&raw)
                    .ok()
                    .and_then(|body| body.message)
                    .unwrap_or(raw);

                match code {
                    401 | 403 => MailApiError::Unauthorized,
                    422 => MailApiError::InvalidRequest(message),
                    429 => MailApiError::RateLimitExceeded,
                    _ => MailApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    MailApiError::HttpError("Connection failed".to_string())
                } else if is_timeout(&transport) {
                    MailApiError::Timeout
                } else {
                    MailApiError::HttpError(transport.to_string())
                }
            }
        }
    }
}

/// Whether a transport error was caused by the agent's read/write timeout.
fn is_timeout(transport: &ureq::Transport) -> bool {
    transport.kind() == ureq::ErrorKind::Io
        && std::error::Error::source(transport)
            .and_then(|e| e.downcast_ref::<std::io::Error>())
            .map(|e| {
                matches!(
                    e.kind(),
                    std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
                )
            })
            .unwrap_or(false)
}
