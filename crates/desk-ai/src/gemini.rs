//! Gemini `generateContent` client.

use std::time::Duration;

use desk_config::GeminiConfig;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::generator::TextGenerator;
use crate::http::check_response;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

impl<'a> GenerateRequest<'a> {
    fn new(prompt: &'a str, system_instruction: Option<&'a str>) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            system_instruction: system_instruction.map(|text| SystemInstruction {
                parts: vec![Part { text }],
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Pull the generated text out of a `generateContent` response body.
///
/// The text parts of the first candidate are concatenated and trimmed.
fn extract_text(body: &str) -> Result<String, GenerationError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| GenerationError::Parse(e.to_string()))?;

    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    let text = text.trim();
    if !text.is_empty() {
        return Ok(text.to_string());
    }

    match response.prompt_feedback.and_then(|f| f.block_reason) {
        Some(reason) => Err(GenerationError::Blocked(reason)),
        None => Err(GenerationError::EmptyResponse),
    }
}

/// HTTP client for the Gemini REST API.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .field("has_api_key", &!self.api_key.is_empty())
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Build a client from configuration.
    ///
    /// A missing API key is not an error here; requests fail with
    /// [`GenerationError::MissingCredential`] instead.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &GeminiConfig) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("studydesk/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint(),
            api_key: config.api_key.trim().to_string(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<String, GenerationError> {
        if self.api_key.is_empty() {
            return Err(GenerationError::MissingCredential);
        }

        tracing::debug!(
            endpoint = %self.endpoint,
            prompt_chars = prompt.chars().count(),
            has_system_instruction = system_instruction.is_some(),
            "sending generateContent request"
        );

        let request = GenerateRequest::new(prompt, system_instruction);
        let resp = self
            .http
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let body = resp.text().await?;

        extract_text(&body)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn request_body_shape() {
        let request = GenerateRequest::new("Explain recursion", Some("Be brief."));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "contents": [{"role": "user", "parts": [{"text": "Explain recursion"}]}],
                "systemInstruction": {"parts": [{"text": "Be brief."}]}
            })
        );
    }

    #[test]
    fn request_without_instruction_omits_field() {
        let request = GenerateRequest::new("Summarize", None);
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("systemInstruction").is_none());
    }

    #[test]
    fn extracts_and_joins_text_parts() {
        let body = r#"{
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [{"text": "Recursion is "}, {"text": "a function calling itself.\n"}]
                    },
                    "finishReason": "STOP"
                }
            ],
            "usageMetadata": {"promptTokenCount": 4}
        }"#;
        assert_eq!(
            extract_text(body).unwrap(),
            "Recursion is a function calling itself."
        );
    }

    #[test]
    fn blocked_prompt_is_reported() {
        let body = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let err = extract_text(body).unwrap_err();
        assert!(matches!(err, GenerationError::Blocked(ref reason) if reason == "SAFETY"));
    }

    #[test]
    fn candidate_without_text_is_empty() {
        let body = r#"{"candidates": [{"finishReason": "MAX_TOKENS"}]}"#;
        assert!(matches!(
            extract_text(body).unwrap_err(),
            GenerationError::EmptyResponse
        ));
    }

    #[test]
    fn malformed_body_is_parse_error() {
        assert!(matches!(
            extract_text("<html>").unwrap_err(),
            GenerationError::Parse(_)
        ));
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let client = GeminiClient::new(&GeminiConfig::default()).unwrap();
        let err = client.generate("hello", None).await.unwrap_err();
        assert!(matches!(err, GenerationError::MissingCredential));
    }

    #[test]
    fn debug_hides_key() {
        let config = GeminiConfig {
            api_key: "secret-key".into(),
            ..Default::default()
        };
        let client = GeminiClient::new(&config).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("has_api_key: true"));
    }
}
