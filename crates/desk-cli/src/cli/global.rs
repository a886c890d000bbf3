use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    /// Explicit `--format`, if one was given.
    pub format: Option<OutputFormat>,
    pub quiet: bool,
}

impl GlobalFlags {
    /// Format for one-shot commands, which print machine-readable JSON by
    /// default.
    #[must_use]
    pub fn command_format(&self) -> OutputFormat {
        self.format.unwrap_or(OutputFormat::Json)
    }

    /// Format for the interactive shell, which prints tables by default.
    #[must_use]
    pub fn shell_format(&self) -> OutputFormat {
        self.format.unwrap_or(OutputFormat::Table)
    }
}
