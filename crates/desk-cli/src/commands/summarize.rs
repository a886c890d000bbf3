use anyhow::Context;
use desk_ai::SummarizeOutcome;
use tokio::io::AsyncReadExt;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SummarizeArgs;
use crate::context::AppContext;
use crate::output::output_text;

/// Handle `desk summarize`.
pub async fn handle(
    args: &SummarizeArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let notes = match &args.file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read notes from {}", path.display()))?,
        None => {
            let mut notes = String::new();
            tokio::io::stdin()
                .read_to_string(&mut notes)
                .await
                .context("failed to read notes from stdin")?;
            notes
        }
    };

    let summarizer = ctx.notes_summarizer();
    summarizer.set_notes(notes);

    match summarizer.summarize_buffer().await {
        SummarizeOutcome::Busy => anyhow::bail!("a summary is already in progress"),
        SummarizeOutcome::EmptyNotes | SummarizeOutcome::Summarized(_) => {
            output_text("summary", &summarizer.summary(), flags.command_format())
        }
    }
}
