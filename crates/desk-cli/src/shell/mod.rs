//! Interactive desk: one tab active at a time, line-oriented commands.

mod commands;
mod desk;
mod tokenize;

use std::io::{IsTerminal, Write};

use anyhow::Context;
use desk_ai::TextGenerator;
use tokio::io::{AsyncBufReadExt, BufReader};

pub use desk::{Desk, DeskOptions, Step};

/// Read lines from stdin until `quit` or end of input.
pub async fn run<G: TextGenerator + Clone>(desk: &mut Desk<G>, quiet: bool) -> anyhow::Result<()> {
    let interactive = std::io::stdin().is_terminal();
    if interactive && !quiet {
        println!("StudyDesk. Type `help` for commands, `tabs` to list tabs, `quit` to leave.");
        println!("{}", desk.view()?);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if interactive {
            print!("{}> ", desk.active());
            std::io::stdout().flush().context("failed to flush prompt")?;
        }

        let Some(line) = lines.next_line().await.context("failed to read from stdin")? else {
            break;
        };

        match desk.execute(&line).await {
            Ok(Step::Print(text)) => println!("{text}"),
            Ok(Step::Silent) => {}
            Ok(Step::Quit) => break,
            Err(error) => report(&error),
        }
    }

    tracing::debug!("shell closed");
    Ok(())
}

fn report(error: &anyhow::Error) {
    // clap errors carry their own `error:` prefix and usage hint.
    if let Some(usage) = error.downcast_ref::<clap::Error>() {
        eprint!("{usage}");
    } else {
        eprintln!("error: {error:#}");
    }
}
