//! The text-generation seam.

use std::future::Future;

use crate::error::GenerationError;

/// Produces text for a prompt, optionally steered by a system instruction.
pub trait TextGenerator: Send + Sync {
    fn generate(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}
