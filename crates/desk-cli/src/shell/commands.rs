//! Shell command sets.
//!
//! Every line is parsed against the global commands plus the commands of the
//! active tab, so `add` means "add a slot" on the timetable and "add a
//! course" on the GPA calculator.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Command, FromArgMatches, Subcommand};
use desk_core::enums::{LetterGrade, SlotColor, Tab, Weekday};

use crate::commands::shared::parse::parse_credits;

/// Commands available on every tab.
#[derive(Clone, Debug, PartialEq, Subcommand)]
pub enum GlobalCommand {
    /// Switch to another tab.
    Tab {
        /// timetable, assignments, notes, gpa, or ai-buddy
        name: Tab,
    },
    /// List all tabs.
    Tabs,
    /// Show the active tab.
    Show,
    /// Leave the shell.
    #[command(alias = "exit")]
    Quit,
}

#[derive(Clone, Debug, PartialEq, Subcommand)]
pub enum TimetableCommand {
    /// Toggle between view and edit mode.
    Edit,
    /// Add a slot to a day (edit mode only).
    Add {
        day: Weekday,
        #[command(flatten)]
        fields: SlotFields,
    },
    /// Change fields of a slot (edit mode only).
    Set {
        id: u64,
        #[command(flatten)]
        fields: SlotFields,
    },
    /// Delete a slot (edit mode only).
    Rm { id: u64 },
    /// Show one day.
    Day { day: Weekday },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Args)]
pub struct SlotFields {
    /// Time range, e.g. "09:00 - 11:00".
    #[arg(long)]
    pub time: Option<String>,
    #[arg(long)]
    pub course: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    /// red, blue, green, yellow, purple, pink, or indigo
    #[arg(long)]
    pub color: Option<SlotColor>,
}

#[derive(Clone, Debug, PartialEq, Subcommand)]
pub enum AssignmentsCommand {
    /// Fill in fields of the new-assignment form.
    Draft {
        #[command(flatten)]
        fields: DraftFields,
    },
    /// Submit the form. Blocked unless title, course, and due date are set.
    Submit,
    /// Fill in the form and submit it in one step.
    Add {
        #[command(flatten)]
        fields: DraftFields,
    },
    /// Toggle the completed flag.
    Done { id: u64 },
    /// Toggle the reminder flag.
    Remind { id: u64 },
    /// Change fields of an assignment.
    Set {
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        course: Option<String>,
        /// Due date as YYYY-MM-DD.
        #[arg(long)]
        due: Option<NaiveDate>,
    },
    /// Delete an assignment.
    Rm { id: u64 },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Args)]
pub struct DraftFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub course: Option<String>,
    /// Due date as YYYY-MM-DD.
    #[arg(long)]
    pub due: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Subcommand)]
pub enum NotesCommand {
    /// Append the rest of the line to the notes, as typed.
    Note {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Replace the notes with the contents of a file.
    Load { path: PathBuf },
    /// Empty the notes.
    Clear,
    /// Summarize the notes with AI.
    Summarize,
}

#[derive(Clone, Debug, PartialEq, Subcommand)]
pub enum GpaCommand {
    /// Add a course row (3 credits, grade A unless given).
    Add {
        #[command(flatten)]
        fields: CourseFields,
    },
    /// Change fields of a course row.
    Set {
        id: u64,
        #[command(flatten)]
        fields: CourseFields,
    },
    /// Delete a course row.
    Rm { id: u64 },
    /// Show the grade-point table.
    Grades,
}

#[derive(Clone, Debug, Default, PartialEq, Args)]
pub struct CourseFields {
    #[arg(long)]
    pub course: Option<String>,
    #[arg(long, value_parser = parse_credits)]
    pub credits: Option<f64>,
    #[arg(long)]
    pub grade: Option<LetterGrade>,
}

#[derive(Clone, Debug, PartialEq, Subcommand)]
pub enum BuddyCommand {
    /// Ask the study buddy; the rest of the line is sent as typed.
    Ask {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },
}

/// A parsed shell line.
#[derive(Clone, Debug, PartialEq)]
pub enum ShellLine<T> {
    Global(GlobalCommand),
    Tab(T),
}

/// Parse `words` as a global command or a command of the tab set `T`.
pub fn parse_line<T: Subcommand>(tab: Tab, words: &[String]) -> Result<ShellLine<T>, clap::Error> {
    let command = T::augment_subcommands(GlobalCommand::augment_subcommands(
        Command::new(tab.as_str())
            .no_binary_name(true)
            .subcommand_required(true)
            .disable_version_flag(true),
    ));

    let matches = command.try_get_matches_from(words)?;
    let is_global = matches
        .subcommand_name()
        .is_some_and(GlobalCommand::has_subcommand);

    if is_global {
        GlobalCommand::from_arg_matches(&matches).map(ShellLine::Global)
    } else {
        T::from_arg_matches(&matches).map(ShellLine::Tab)
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;

    use super::*;

    fn words(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn global_commands_parse_on_any_tab() {
        let line = parse_line::<GpaCommand>(Tab::Gpa, &words("tab ai-buddy")).unwrap();
        assert_eq!(line, ShellLine::Global(GlobalCommand::Tab { name: Tab::AiBuddy }));

        let line = parse_line::<NotesCommand>(Tab::Notes, &words("exit")).unwrap();
        assert_eq!(line, ShellLine::Global(GlobalCommand::Quit));
    }

    #[test]
    fn add_depends_on_active_tab() {
        let line =
            parse_line::<TimetableCommand>(Tab::Timetable, &words("add wed --color pink")).unwrap();
        assert_eq!(
            line,
            ShellLine::Tab(TimetableCommand::Add {
                day: Weekday::Wednesday,
                fields: SlotFields {
                    color: Some(SlotColor::Pink),
                    ..SlotFields::default()
                },
            })
        );

        let line = parse_line::<GpaCommand>(Tab::Gpa, &words("add --credits 4 --grade b+")).unwrap();
        assert_eq!(
            line,
            ShellLine::Tab(GpaCommand::Add {
                fields: CourseFields {
                    course: None,
                    credits: Some(4.0),
                    grade: Some(LetterGrade::BPlus),
                },
            })
        );
    }

    #[test]
    fn command_of_another_tab_is_rejected() {
        let err = parse_line::<GpaCommand>(Tab::Gpa, &words("summarize")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn negative_credits_are_rejected() {
        assert!(parse_line::<GpaCommand>(Tab::Gpa, &words("set 1 --credits -2")).is_err());
    }

    #[test]
    fn bad_due_date_is_rejected_on_set() {
        assert!(
            parse_line::<AssignmentsCommand>(Tab::Assignments, &words("set 1 --due tomorrow"))
                .is_err()
        );
    }

    #[test]
    fn help_is_reported_as_display_help() {
        let err = parse_line::<NotesCommand>(Tab::Notes, &words("help")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("summarize"));
    }

    #[test]
    fn note_keeps_leading_dashes() {
        let line = parse_line::<NotesCommand>(Tab::Notes, &words("note - TCP handshake")).unwrap();
        assert_eq!(
            line,
            ShellLine::Tab(NotesCommand::Note {
                text: words("- TCP handshake"),
            })
        );
    }
}
