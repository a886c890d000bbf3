//! Shared HTTP response helpers.
//!
//! Centralizes the non-success → [`GenerationError::Api`] mapping so the
//! client stays focused on request construction and response decoding.

use serde::Deserialize;

use crate::error::GenerationError;

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise the `error.message`
/// of a Google API error body is used as the message, falling back to the
/// raw body.
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, GenerationError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(GenerationError::Api {
        status: status.as_u16(),
        message: api_error_message(&body),
    })
}

fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}
