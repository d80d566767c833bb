//! Application service layer.
//!
//! Services contain business logic and orchestrate the email capability.
//! They provide a clean boundary between the HTTP handlers and the
//! provider client.

mod contact_service;

pub use contact_service::{
    compose_email, ContactService, ContactServiceImpl, PHONE_NOT_PROVIDED, SENT_MESSAGE,
};
