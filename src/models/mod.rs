//! Data models for contact form submissions and outbound email.
//!
//! This module contains the form contract shared with the page and the
//! payloads sent to and received from the email provider.

pub mod contact_form;
pub mod email;

pub use contact_form::{ContactForm, ContactFormInput, ContactFormResponse};
pub use email::{OutboundEmail, ProviderErrorBody, SendEmailResponse};
