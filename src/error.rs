//! Error types for the contact relay.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::models::ContactFormResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Message returned when a required form field is missing.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields";

/// Message returned when the email could not be dispatched.
pub const DISPATCH_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

/// Errors that can occur when talking to the email API.
#[derive(Error, Debug)]
pub enum MailApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// The provider rejected the payload
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that end a single form submission.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// A required field was absent or blank.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The email could not be handed to the provider.
    #[error("dispatch failed: {0}")]
    Dispatch(#[from] MailApiError),
}

impl SubmissionError {
    /// HTTP status reported to the page.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields(_) => StatusCode::BAD_REQUEST,
            Self::Dispatch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing body. Provider details never leak into it.
    pub fn to_response(&self) -> ContactFormResponse {
        match self {
            Self::MissingFields(_) => ContactFormResponse::failure(MISSING_FIELDS_MESSAGE),
            Self::Dispatch(_) => ContactFormResponse::failure(DISPATCH_FAILED_MESSAGE),
        }
    }
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_response())).into_response()
    }
}

/// Convenience type alias for Results with MailApiError
pub type MailApiResult<T> = Result<T, MailApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SubmissionError
pub type SubmissionResult<T> = Result<T, SubmissionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MailApiError::Unauthorized;
        assert_eq!(err.to_string(), "Authentication failed");

        let err = ConfigError::MissingVar("RESEND_API_KEY".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: RESEND_API_KEY"
        );

        let err = SubmissionError::MissingFields(vec!["name", "message"]);
        assert_eq!(err.to_string(), "missing required fields: name, message");
    }

    #[test]
    fn test_api_error_variants() {
        let err = MailApiError::ApiError {
            status: 500,
            message: "Internal".to_string(),
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("Internal"));
    }

    #[test]
    fn test_submission_error_status() {
        let err = SubmissionError::MissingFields(vec!["email"]);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_response().message, MISSING_FIELDS_MESSAGE);
        assert!(!err.to_response().success);

        let err = SubmissionError::from(MailApiError::Timeout);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_response().message, DISPATCH_FAILED_MESSAGE);
    }

    #[test]
    fn test_dispatch_response_hides_provider_detail() {
        let err = SubmissionError::Dispatch(MailApiError::ApiError {
            status: 403,
            message: "domain not verified".to_string(),
        });
        assert!(!err.to_response().message.contains("domain"));
    }
}
