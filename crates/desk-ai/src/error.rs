//! Text generation error types.

use thiserror::Error;

/// Errors a [`TextGenerator`](crate::TextGenerator) may return.
///
/// None of these reach UI code; [`FailSoft`](crate::FailSoft) converts them
/// into a fallback message.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No API key is configured.
    #[error("no Gemini API key configured (set GEMINI_API_KEY or DESK_GEMINI__API_KEY)")]
    MissingCredential,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// The prompt was refused before any text was produced.
    #[error("prompt blocked: {0}")]
    Blocked(String),

    /// The response carried no text.
    #[error("model returned an empty response")]
    EmptyResponse,
}
