//! Async wrapper around the synchronous ResendClient.
//!
//! This module provides the [`EmailSender`] capability consumed by the
//! submission service. The Resend implementation uses
//! `tokio::task::spawn_blocking` to run the HTTP call on a dedicated thread
//! pool, preventing blocking of the async runtime.

use crate::client::ResendClient;
use crate::error::{MailApiError, MailApiResult};
use crate::models::{OutboundEmail, SendEmailResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Capability to hand an email to an external provider.
///
/// Implementations either succeed or return an error; callers do not retry.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> MailApiResult<SendEmailResponse>;
}

/// Async wrapper around synchronous ResendClient.
#[derive(Clone)]
pub struct AsyncResendClient {
    client: Arc<ResendClient>,
}

impl AsyncResendClient {
    pub fn new(client: ResendClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl EmailSender for AsyncResendClient {
    async fn send(&self, email: &OutboundEmail) -> MailApiResult<SendEmailResponse> {
        let client = self.client.clone();
        let email = email.clone();

        tokio::task::spawn_blocking(move || client.send_email(&email))
            .await
            .map_err(|e| MailApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
