//! Contact Relay - backend for a website contact form.
//!
//! Accepts form-encoded submissions, checks the required fields and forwards
//! each valid submission as an HTML email through the Resend API.
//!
//! # Architecture
//!
//! - **models**: Form contract and provider payloads
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **domain**: Validated sender/recipient mailboxes
//! - **client**: HTTP client for the Resend API and the `EmailSender` capability
//! - **services**: Validation gate, composition and dispatch
//! - **metrics**: Submission and dispatch counters
//! - **server**: axum router and handlers

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod server;
pub mod services;

pub use client::{AsyncResendClient, EmailSender, ResendClient};
pub use config::Config;
pub use error::{ConfigError, MailApiError, SubmissionError};
pub use metrics::{DispatchTimer, Metrics, MetricsSummary};
pub use models::{ContactForm, ContactFormInput, ContactFormResponse, OutboundEmail};
pub use server::AppState;
pub use services::{ContactService, ContactServiceImpl};
