use async_trait::async_trait;
use contact_relay::client::EmailSender;
use contact_relay::error::{MailApiError, MailApiResult};
use contact_relay::models::{OutboundEmail, SendEmailResponse};
use std::sync::{Arc, Mutex};

/// Mock email sender for testing.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockEmailSender {
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
    failure: Arc<Mutex<Option<fn() -> MailApiError>>>,
}

#[allow(dead_code)]
impl MockEmailSender {
    /// A sender that accepts every email.
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
        }
    }

    /// A sender whose every attempt fails with the error built by `make_error`.
    pub fn failing(make_error: fn() -> MailApiError) -> Self {
        let sender = Self::new();
        *sender.failure.lock().unwrap() = Some(make_error);
        sender
    }

    /// Number of dispatch attempts, successful or not.
    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Emails handed to this sender, in order.
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<OutboundEmail> {
        self.sent.lock().unwrap().last().cloned()
    }
}

impl Default for MockEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send(&self, email: &OutboundEmail) -> MailApiResult<SendEmailResponse> {
        let count = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(email.clone());
            sent.len()
        };

        if let Some(make_error) = *self.failure.lock().unwrap() {
            return Err(make_error());
        }

        Ok(SendEmailResponse {
            id: format!("mock-{}", count),
        })
    }
}
