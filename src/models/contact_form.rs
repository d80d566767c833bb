//! Contact form payloads: what the visitor submits and what the page gets back.

use crate::error::{SubmissionError, SubmissionResult};
use serde::{Deserialize, Serialize};

/// Raw form-encoded submission as posted by the browser.
///
/// Every field is optional so that a missing field reaches the validation
/// gate instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ContactFormInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl ContactFormInput {
    /// Build from decoded `(name, value)` pairs.
    ///
    /// The first occurrence of a repeated field wins; unknown fields are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut input = ContactFormInput::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "name" => &mut input.name,
                "email" => &mut input.email,
                "phone" => &mut input.phone,
                "message" => &mut input.message,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        input
    }
}

/// A submission that passed the validation gate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactForm {
    /// Visitor name (required)
    pub name: String,

    /// Visitor email (required, not format-checked)
    pub email: String,

    /// Visitor phone, empty when not provided
    #[serde(default)]
    pub phone: String,

    /// Free-form message (required)
    pub message: String,
}

impl ContactForm {
    /// Apply the validation gate to a raw submission.
    ///
    /// `name`, `email` and `message` must be present and contain something
    /// other than whitespace. Values are otherwise passed through untouched.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::MissingFields` listing every missing field.
    pub fn from_input(input: ContactFormInput) -> SubmissionResult<Self> {
        let mut missing = Vec::new();

        let name = required(input.name, "name", &mut missing);
        let email = required(input.email, "email", &mut missing);
        let message = required(input.message, "message", &mut missing);

        if !missing.is_empty() {
            return Err(SubmissionError::MissingFields(missing));
        }

        Ok(ContactForm {
            name,
            email,
            phone: input.phone.unwrap_or_default(),
            message,
        })
    }

    /// Phone value for display, or `None` if the visitor left it blank.
    pub fn phone(&self) -> Option<&str> {
        if self.phone.trim().is_empty() {
            None
        } else {
            Some(&self.phone)
        }
    }
}

fn required(
    value: Option<String>,
    field: &'static str,
    missing: &mut Vec<&'static str>,
) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            missing.push(field);
            String::new()
        }
    }
}

/// Outcome reported back to the page that rendered the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactFormResponse {
    pub success: bool,
    pub message: String,
}

impl ContactFormResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
