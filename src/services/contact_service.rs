//! Contact submission service.
//!
//! Business logic for a single form submission: validation gate, email
//! composition and dispatch.

use crate::client::EmailSender;
use crate::domain::Mailbox;
use crate::error::{SubmissionError, SubmissionResult};
use crate::metrics::{DispatchTimer, Metrics};
use crate::models::email::escape_html;
use crate::models::{ContactForm, ContactFormInput, ContactFormResponse, OutboundEmail};
use async_trait::async_trait;
use std::sync::Arc;

/// Message returned when the email was accepted by the provider.
pub const SENT_MESSAGE: &str = "Message sent successfully!";

/// Placeholder used when the visitor left the phone field blank.
pub const PHONE_NOT_PROVIDED: &str = "Not provided";

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Validate a submission and forward it as an email.
    ///
    /// Every call that passes validation triggers exactly one dispatch attempt.
    async fn submit(&self, input: ContactFormInput) -> SubmissionResult<ContactFormResponse>;
}

/// Build the email for a validated submission.
pub fn compose_email(form: &ContactForm, from: &Mailbox, to: &Mailbox) -> OutboundEmail {
    let phone = form.phone().unwrap_or(PHONE_NOT_PROVIDED);

    let html = format!(
        "<h2>New Contact Form Submission</h2>\n\
         <p><strong>Name:</strong> {}</p>\n\
         <p><strong>Email:</strong> {}</p>\n\
         <p><strong>Phone:</strong> {}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p>{}</p>\n",
        escape_html(&form.name),
        escape_html(&form.email),
        escape_html(phone),
        escape_html(&form.message),
    );

    OutboundEmail {
        from: from.to_string(),
        to: vec![to.to_string()],
        subject: format!("New Contact Form Submission from {}", form.name),
        html,
    }
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    sender: Arc<dyn EmailSender>,
    from: Mailbox,
    to: Mailbox,
    metrics: Metrics,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(sender: Arc<dyn EmailSender>, from: Mailbox, to: Mailbox) -> Self {
        Self {
            sender,
            from,
            to,
            metrics: Metrics::new(),
        }
    }

    /// Use an existing metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn submit(&self, input: ContactFormInput) -> SubmissionResult<ContactFormResponse> {
        self.metrics.record_submission();

        let form = match ContactForm::from_input(input) {
            Ok(form) => form,
            Err(e) => {
                tracing::debug!(error = %e, "Submission rejected");
                self.metrics.record_validation_failure();
                return Err(e);
            }
        };

        let email = compose_email(&form, &self.from, &self.to);

        let timer = DispatchTimer::new(self.metrics.clone());
        match self.sender.send(&email).await {
            Ok(sent) => {
                timer.complete();
                tracing::info!(email_id = %sent.id, "Contact email sent");
                Ok(ContactFormResponse::success(SENT_MESSAGE))
            }
            Err(e) => {
                timer.complete_with_error();
                tracing::error!(error = %e, "Error sending email");
                Err(SubmissionError::Dispatch(e))
            }
        }
    }
}
