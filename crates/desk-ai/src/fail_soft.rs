//! Boundary adapter that never fails.

use crate::generator::TextGenerator;

/// Shown in place of generated text when generation fails for any reason.
pub const FALLBACK_MESSAGE: &str = "Sorry, I couldn't generate a response right now. \
Please check that the Gemini API key is configured and try again.";

/// Wraps a [`TextGenerator`] so callers always get displayable text.
///
/// The underlying error is logged at `warn` and replaced with
/// [`FALLBACK_MESSAGE`].
#[derive(Debug, Clone)]
pub struct FailSoft<G> {
    inner: G,
}

impl<G: TextGenerator> FailSoft<G> {
    pub const fn new(inner: G) -> Self {
        Self { inner }
    }

    pub const fn inner(&self) -> &G {
        &self.inner
    }

    /// Generate text, or return [`FALLBACK_MESSAGE`] on any failure.
    pub async fn generate(&self, prompt: &str, system_instruction: Option<&str>) -> String {
        match self.inner.generate(prompt, system_instruction).await {
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(%error, "text generation failed, using fallback message");
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}
