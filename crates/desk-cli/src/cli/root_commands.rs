use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive desk with all five tabs.
    Shell(ShellArgs),
    /// Compute a GPA from course rows.
    Gpa(GpaArgs),
    /// Print the letter-grade to grade-point table.
    Grades,
    /// Print the sample assignment board.
    Assignments,
    /// Print the sample weekly timetable.
    Timetable(TimetableArgs),
    /// Summarize lecture notes with AI.
    Summarize(SummarizeArgs),
    /// Ask the AI study buddy one question.
    Ask(AskArgs),
    /// Print the JSON schema of an entity type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ShellArgs {
    /// Tab to open first (overrides configuration).
    #[arg(long)]
    pub tab: Option<String>,
    /// Start with empty lists instead of the sample rows.
    #[arg(long)]
    pub empty: bool,
}

#[derive(Clone, Debug, Args)]
pub struct GpaArgs {
    /// Course row as NAME:CREDITS:GRADE, e.g. "Compilers:4:B+". Repeatable.
    /// Without any, the sample rows are used.
    #[arg(long = "course", value_name = "NAME:CREDITS:GRADE")]
    pub courses: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct TimetableArgs {
    /// Only show one day.
    #[arg(long)]
    pub day: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SummarizeArgs {
    /// Read notes from this file instead of stdin.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct AskArgs {
    /// The question. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub prompt: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Entity type: assignment, time_slot, gpa_entry, chat_message, gpa_summary.
    pub type_name: String,
}
