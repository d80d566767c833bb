//! Tests for the contact submission flow using a mock email sender.

mod mocks;

use contact_relay::domain::Mailbox;
use contact_relay::error::{DISPATCH_FAILED_MESSAGE, MISSING_FIELDS_MESSAGE};
use contact_relay::services::{ContactService, ContactServiceImpl, PHONE_NOT_PROVIDED};
use contact_relay::{ContactFormInput, MailApiError, SubmissionError};
use mocks::MockEmailSender;
use std::sync::Arc;
use tracing_test::traced_test;

fn service(sender: &MockEmailSender) -> ContactServiceImpl {
    let from: Mailbox = "Lemonseed Studio <connect@lemonseed.studio>".parse().unwrap();
    let to: Mailbox = "srivardhan@lemonseed.studio".parse().unwrap();
    ContactServiceImpl::new(Arc::new(sender.clone()), from, to)
}

fn jane() -> ContactFormInput {
    ContactFormInput {
        name: Some("Jane Doe".to_string()),
        email: Some("jane@example.com".to_string()),
        phone: Some(String::new()),
        message: Some("Hello".to_string()),
    }
}

#[tokio::test]
async fn test_valid_submission_is_sent() {
    let sender = MockEmailSender::new();
    let service = service(&sender);

    let response = service.submit(jane()).await.unwrap();

    assert!(response.success);
    assert_eq!(response.message, "Message sent successfully!");
    assert_eq!(sender.call_count(), 1);

    let email = sender.last().unwrap();
    assert_eq!(email.from, "Lemonseed Studio <connect@lemonseed.studio>");
    assert_eq!(email.to, vec!["srivardhan@lemonseed.studio"]);
    assert_eq!(email.subject, "New Contact Form Submission from Jane Doe");
    assert!(email.html.contains("jane@example.com"));
    assert!(email.html.contains("Hello"));
}

#[tokio::test]
async fn test_missing_phone_reads_not_provided() {
    let sender = MockEmailSender::new();
    let service = service(&sender);

    let mut input = jane();
    input.phone = None;
    service.submit(input).await.unwrap();

    let email = sender.last().unwrap();
    assert!(email.html.contains(PHONE_NOT_PROVIDED));
}

#[tokio::test]
#[traced_test]
async fn test_missing_required_fields_never_dispatch() {
    let sender = MockEmailSender::new();
    let service = service(&sender);

    let cases = [
        ContactFormInput {
            name: None,
            ..jane()
        },
        ContactFormInput {
            email: Some(String::new()),
            ..jane()
        },
        ContactFormInput {
            message: Some("   ".to_string()),
            ..jane()
        },
        ContactFormInput::default(),
    ];

    for input in cases {
        let err = service.submit(input).await.unwrap_err();
        assert!(matches!(err, SubmissionError::MissingFields(_)));

        let response = err.to_response();
        assert!(!response.success);
        assert_eq!(response.message, MISSING_FIELDS_MESSAGE);
    }

    assert_eq!(sender.call_count(), 0);
    assert_eq!(service.metrics().validation_failures_total(), 4);
    assert!(!logs_contain("Error sending email"));
}

#[tokio::test]
#[traced_test]
async fn test_dispatch_failure_is_logged_and_generic() {
    let sender = MockEmailSender::failing(|| MailApiError::ApiError {
        status: 403,
        message: "The lemonseed.studio domain is not verified".to_string(),
    });
    let service = service(&sender);

    let err = service.submit(jane()).await.unwrap_err();

    assert!(matches!(err, SubmissionError::Dispatch(_)));
    let response = err.to_response();
    assert!(!response.success);
    assert_eq!(
        response.message,
        "Failed to send message. Please try again later."
    );
    assert_eq!(response.message, DISPATCH_FAILED_MESSAGE);
    assert_eq!(sender.call_count(), 1);

    assert!(logs_contain("Error sending email"));
    assert!(logs_contain("domain is not verified"));
}

#[tokio::test]
async fn test_dispatch_failures_are_not_retried() {
    let sender = MockEmailSender::failing(|| MailApiError::Timeout);
    let service = service(&sender);

    assert!(service.submit(jane()).await.is_err());
    assert_eq!(sender.call_count(), 1);
    assert_eq!(service.metrics().dispatch_errors_total(), 1);
}

#[tokio::test]
async fn test_identical_submissions_each_dispatch() {
    let sender = MockEmailSender::new();
    let service = service(&sender);

    service.submit(jane()).await.unwrap();
    service.submit(jane()).await.unwrap();

    assert_eq!(sender.call_count(), 2);
    assert_eq!(sender.sent()[0], sender.sent()[1]);

    let summary = service.metrics().summary();
    assert_eq!(summary.submissions_total, 2);
    assert_eq!(summary.dispatch_total, 2);
    assert_eq!(summary.dispatch_errors_total, 0);
}
