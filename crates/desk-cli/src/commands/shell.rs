use anyhow::Context;
use desk_core::enums::Tab;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShellArgs;
use crate::context::AppContext;
use crate::shell::{self, Desk, DeskOptions};

/// Handle `desk shell`.
pub async fn handle(
    args: &ShellArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let tab = match &args.tab {
        Some(raw) => raw.parse::<Tab>().context("invalid --tab")?,
        None => ctx.config.general.default_tab,
    };

    let options = DeskOptions {
        tab,
        seed_samples: ctx.config.general.seed_samples && !args.empty,
        format: flags.shell_format(),
    };
    tracing::debug!(?options, "opening shell");

    let mut desk = Desk::new(ctx.client.clone(), options);
    shell::run(&mut desk, flags.quiet).await
}
