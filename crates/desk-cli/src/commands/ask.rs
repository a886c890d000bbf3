use desk_ai::SendOutcome;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AskArgs;
use crate::context::AppContext;
use crate::output::output_text;

/// Handle `desk ask`.
pub async fn handle(args: &AskArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let prompt = args.prompt.join(" ");
    let session = ctx.chat_session();

    match session.send(&prompt).await {
        SendOutcome::Empty => anyhow::bail!("question is empty"),
        SendOutcome::Busy => anyhow::bail!("a question is already in progress"),
        SendOutcome::Replied(message) => output_text("answer", &message.text, flags.command_format()),
    }
}
