use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod shell;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("desk error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();

    let config = bootstrap::load_config()?;
    if uses_text_generation(&cli.command) {
        context::warn_unconfigured(&config);
    }

    let ctx = context::AppContext::init(config).context("failed to initialize desk context")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

const fn uses_text_generation(command: &cli::Commands) -> bool {
    matches!(
        command,
        cli::Commands::Shell(_) | cli::Commands::Summarize(_) | cli::Commands::Ask(_)
    )
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("DESK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
