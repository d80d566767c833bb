//! Lenient extractor for contact form bodies.
//!
//! Browsers post the form either urlencoded or as `multipart/form-data`
//! (progressively enhanced submits). Both are accepted. A body that cannot
//! be read at all is treated as an empty submission so the validation gate
//! answers it with the usual JSON response.

use crate::models::ContactFormInput;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;
use std::convert::Infallible;

/// Form fields extracted from a submission request.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission(pub ContactFormInput);

impl<S> FromRequest<S> for ContactSubmission
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = if is_multipart(&req) {
            read_multipart(req, state).await
        } else {
            Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map(|Form(pairs)| pairs)
                .map_err(|e| e.to_string())
        };

        match pairs {
            Ok(pairs) => Ok(Self(ContactFormInput::from_pairs(pairs))),
            Err(reason) => {
                tracing::debug!(%reason, "Unreadable form body");
                Ok(Self(ContactFormInput::default()))
            }
        }
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.trim_start().starts_with("multipart/form-data"))
        .unwrap_or(false)
}

/// Collect the text fields of a multipart body. File parts are skipped.
async fn read_multipart<S>(req: Request, state: &S) -> Result<Vec<(String, String)>, String>
where
    S: Send + Sync,
{
    let mut multipart = Multipart::from_request(req, state)
        .await
        .map_err(|e| e.to_string())?;

    let mut pairs = Vec::new();
    while let Some(field) = multipart.next_field().await.map_err(|e| e.to_string())? {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field.text().await.map_err(|e| e.to_string())?;
        pairs.push((name, value));
    }

    Ok(pairs)
}
