//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The mailbox is not `address` or `Name <address>`.
    InvalidMailbox(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidMailbox(mailbox) => write!(f, "Invalid mailbox: {}", mailbox),
        }
    }
}

impl std::error::Error for ValidationError {}
