use anyhow::Context;
use desk_ai::{ChatSession, FailSoft, GeminiClient, NotesSummarizer};
use desk_config::DeskConfig;

/// Shared state for every command of one invocation.
pub struct AppContext {
    pub config: DeskConfig,
    pub client: GeminiClient,
}

impl AppContext {
    pub fn init(config: DeskConfig) -> anyhow::Result<Self> {
        let client =
            GeminiClient::new(&config.gemini).context("failed to build Gemini HTTP client")?;
        tracing::debug!(
            endpoint = client.endpoint(),
            configured = config.gemini.is_configured(),
            "text generation client ready"
        );

        Ok(Self { config, client })
    }

    pub fn chat_session(&self) -> ChatSession<GeminiClient> {
        ChatSession::new(FailSoft::new(self.client.clone()))
    }

    pub fn notes_summarizer(&self) -> NotesSummarizer<GeminiClient> {
        NotesSummarizer::new(FailSoft::new(self.client.clone()))
    }
}
