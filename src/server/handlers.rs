//! HTTP handlers for the contact form endpoint.

use super::extract::ContactSubmission;
use crate::error::SubmissionError;
use crate::models::ContactFormResponse;
use crate::services::ContactService;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<dyn ContactService>,
}

impl AppState {
    pub fn new(contact_service: Arc<dyn ContactService>) -> Self {
        Self { contact_service }
    }
}

/// `POST /connect`: handle one form submission.
///
/// Responds 200 on success, 400 when a required field is missing and 500
/// when the email could not be dispatched. The body is always a
/// [`ContactFormResponse`], even for bodies that cannot be parsed.
pub async fn submit_contact(
    State(state): State<AppState>,
    ContactSubmission(input): ContactSubmission,
) -> Result<Json<ContactFormResponse>, SubmissionError> {
    let response = state.contact_service.submit(input).await?;
    Ok(Json(response))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
