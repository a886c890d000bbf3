//! Shell state: one component per tab, one active tab.

use anyhow::Context;
use clap::error::ErrorKind;
use desk_ai::{ChatSession, FailSoft, NotesSummarizer, SendOutcome, TextGenerator};
use desk_core::editors::{
    AssignmentBoard, AssignmentDraft, AssignmentField, DraftField, GpaField, GpaSheet, SlotField,
    Timetable,
};
use desk_core::entities::{Assignment, ChatMessage, TimeSlot};
use desk_core::enums::{Role, Tab};
use desk_core::gpa::grade_point_table;
use desk_core::ids::EntryId;
use desk_core::seed;
use serde::Serialize;

use super::commands::{
    AssignmentsCommand, BuddyCommand, CourseFields, DraftFields, GlobalCommand, GpaCommand,
    NotesCommand, ShellLine, SlotFields, TimetableCommand, parse_line,
};
use super::tokenize::tokenize;
use crate::cli::OutputFormat;
use crate::commands::gpa::GpaReport;
use crate::commands::timetable::week_rows;
use crate::output::render;

const VIEW_MODE_HINT: &str = "Timetable is in view mode. Run `edit` to make changes.";
const BUSY_HINT: &str = "Still waiting for the previous answer.";

/// How a new desk starts.
#[derive(Clone, Copy, Debug)]
pub struct DeskOptions {
    pub tab: Tab,
    pub seed_samples: bool,
    pub format: OutputFormat,
}

/// What the shell loop should do after a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Print(String),
    Silent,
    Quit,
}

pub struct Desk<G> {
    active: Tab,
    format: OutputFormat,
    timetable: Timetable,
    board: AssignmentBoard,
    sheet: GpaSheet,
    notes: NotesSummarizer<G>,
    chat: ChatSession<G>,
}

impl<G: TextGenerator + Clone> Desk<G> {
    pub fn new(generator: G, options: DeskOptions) -> Self {
        let (timetable, board, sheet) = if options.seed_samples {
            (
                Timetable::with_slots(seed::sample_timetable()),
                AssignmentBoard::with_assignments(seed::sample_assignments()),
                GpaSheet::with_entries(seed::sample_gpa_entries()),
            )
        } else {
            (Timetable::new(), AssignmentBoard::new(), GpaSheet::new())
        };

        Self {
            active: options.tab,
            format: options.format,
            timetable,
            board,
            sheet,
            notes: NotesSummarizer::new(FailSoft::new(generator.clone())),
            chat: ChatSession::new(FailSoft::new(generator)),
        }
    }

    pub const fn active(&self) -> Tab {
        self.active
    }

    /// Run one shell line against the active tab.
    pub async fn execute(&mut self, line: &str) -> anyhow::Result<Step> {
        match self.active {
            Tab::AiBuddy => {
                if let Some(text) = free_text(line, "ask") {
                    let text = vec![text.to_string()];
                    return self.on_buddy(BuddyCommand::Ask { text }).await;
                }
            }
            Tab::Notes => {
                if let Some(text) = free_text(line, "note") {
                    let text = vec![text.to_string()];
                    return self.on_notes(NotesCommand::Note { text }).await;
                }
            }
            _ => {}
        }

        let words = tokenize(line)?;
        if words.is_empty() {
            return Ok(Step::Silent);
        }

        match self.active {
            Tab::Timetable => match parse_line::<TimetableCommand>(self.active, &words) {
                Ok(ShellLine::Tab(command)) => self.on_timetable(command),
                Ok(ShellLine::Global(command)) => self.on_global(command),
                Err(error) => usage(error),
            },
            Tab::Assignments => match parse_line::<AssignmentsCommand>(self.active, &words) {
                Ok(ShellLine::Tab(command)) => self.on_assignments(command),
                Ok(ShellLine::Global(command)) => self.on_global(command),
                Err(error) => usage(error),
            },
            Tab::Notes => match parse_line::<NotesCommand>(self.active, &words) {
                Ok(ShellLine::Tab(command)) => self.on_notes(command).await,
                Ok(ShellLine::Global(command)) => self.on_global(command),
                Err(error) => usage(error),
            },
            Tab::Gpa => match parse_line::<GpaCommand>(self.active, &words) {
                Ok(ShellLine::Tab(command)) => self.on_gpa(command),
                Ok(ShellLine::Global(command)) => self.on_global(command),
                Err(error) => usage(error),
            },
            Tab::AiBuddy => match parse_line::<BuddyCommand>(self.active, &words) {
                Ok(ShellLine::Tab(command)) => self.on_buddy(command).await,
                Ok(ShellLine::Global(command)) => self.on_global(command),
                Err(error) => usage(error),
            },
        }
    }

    /// Render the active tab.
    pub fn view(&self) -> anyhow::Result<String> {
        match self.active {
            Tab::Timetable => self.render(&TimetableView {
                mode: if self.timetable.is_editing() { "edit" } else { "view" },
                slots: week_rows(&self.timetable, None),
            }),
            Tab::Assignments => self.render(&AssignmentsView {
                assignments: self.board.assignments(),
                draft: self.board.draft(),
            }),
            Tab::Notes => {
                let view = NotesView {
                    notes: self.notes.notes(),
                    summary: self.notes.summary(),
                };
                if self.format == OutputFormat::Table {
                    return Ok(view.to_text());
                }
                self.render(&view)
            }
            Tab::Gpa => self.render(&GpaReport::from_sheet(&self.sheet)),
            Tab::AiBuddy => {
                let messages = self.chat.messages();
                if self.format == OutputFormat::Table {
                    return Ok(transcript(&messages));
                }
                self.render(&messages)
            }
        }
    }

    fn render<T: Serialize>(&self, value: &T) -> anyhow::Result<String> {
        render(value, self.format)
    }

    fn show(&self) -> anyhow::Result<Step> {
        self.view().map(Step::Print)
    }

    fn on_global(&mut self, command: GlobalCommand) -> anyhow::Result<Step> {
        match command {
            GlobalCommand::Tab { name } => {
                tracing::debug!(from = %self.active, to = %name, "switching tab");
                self.active = name;
                self.show()
            }
            GlobalCommand::Tabs => {
                let rows = Tab::ALL
                    .into_iter()
                    .map(|tab| TabRow {
                        tab: tab.as_str(),
                        label: tab.label(),
                        active: tab == self.active,
                    })
                    .collect::<Vec<_>>();
                self.render(&rows).map(Step::Print)
            }
            GlobalCommand::Show => self.show(),
            GlobalCommand::Quit => Ok(Step::Quit),
        }
    }

    fn on_timetable(&mut self, command: TimetableCommand) -> anyhow::Result<Step> {
        match command {
            TimetableCommand::Edit => {
                self.timetable.toggle_editing();
                return self.show();
            }
            TimetableCommand::Day { day } => {
                return self
                    .render(&week_rows(&self.timetable, Some(day)))
                    .map(Step::Print);
            }
            TimetableCommand::Add { .. }
            | TimetableCommand::Set { .. }
            | TimetableCommand::Rm { .. }
                if !self.timetable.is_editing() =>
            {
                return Ok(Step::Print(VIEW_MODE_HINT.to_string()));
            }
            TimetableCommand::Add { day, mut fields } => {
                let added = match fields.color.take() {
                    Some(color) => self.timetable.add_slot_with_color(day, color),
                    None => self.timetable.add_slot(day),
                };
                if let Some(id) = added {
                    self.apply_slot_fields(id, fields);
                }
            }
            TimetableCommand::Set { id, fields } => self.apply_slot_fields(EntryId(id), fields),
            TimetableCommand::Rm { id } => {
                self.timetable.remove(EntryId(id));
            }
        }
        self.show()
    }

    fn apply_slot_fields(&mut self, id: EntryId, fields: SlotFields) {
        let SlotFields {
            time,
            course,
            location,
            color,
        } = fields;
        let updates = [
            time.map(SlotField::Time),
            course.map(SlotField::Course),
            location.map(SlotField::Location),
            color.map(SlotField::Color),
        ];
        for field in updates.into_iter().flatten() {
            self.timetable.update(id, field);
        }
    }

    fn on_assignments(&mut self, command: AssignmentsCommand) -> anyhow::Result<Step> {
        match command {
            AssignmentsCommand::Draft { fields } => {
                let DraftFields { title, course, due } = fields;
                let updates = [
                    title.map(|value| (DraftField::Title, value)),
                    course.map(|value| (DraftField::Course, value)),
                    due.map(|value| (DraftField::DueDate, value)),
                ];
                for (field, value) in updates.into_iter().flatten() {
                    self.board.set_draft(field, value);
                }
            }
            AssignmentsCommand::Submit => {
                self.board.submit();
            }
            AssignmentsCommand::Add { fields } => {
                self.board.add(AssignmentDraft {
                    title: fields.title.unwrap_or_default(),
                    course: fields.course.unwrap_or_default(),
                    due_date: fields.due.unwrap_or_default(),
                });
            }
            AssignmentsCommand::Done { id } => {
                self.board.toggle_completed(EntryId(id));
            }
            AssignmentsCommand::Remind { id } => {
                self.board.toggle_reminder(EntryId(id));
            }
            AssignmentsCommand::Set {
                id,
                title,
                course,
                due,
            } => {
                let updates = [
                    title.map(AssignmentField::Title),
                    course.map(AssignmentField::Course),
                    due.map(AssignmentField::DueDate),
                ];
                for field in updates.into_iter().flatten() {
                    self.board.update(EntryId(id), field);
                }
            }
            AssignmentsCommand::Rm { id } => {
                self.board.remove(EntryId(id));
            }
        }
        self.show()
    }

    async fn on_notes(&mut self, command: NotesCommand) -> anyhow::Result<Step> {
        match command {
            NotesCommand::Note { text } => self.notes.append_line(&text.join(" ")),
            NotesCommand::Load { path } => {
                let notes = tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("failed to read notes from {}", path.display()))?;
                self.notes.set_notes(notes);
            }
            NotesCommand::Clear => self.notes.set_notes(String::new()),
            NotesCommand::Summarize => {
                self.notes.summarize_buffer().await;
                return Ok(Step::Print(self.notes.summary()));
            }
        }
        self.show()
    }

    fn on_gpa(&mut self, command: GpaCommand) -> anyhow::Result<Step> {
        match command {
            GpaCommand::Add { fields } => {
                let id = self.sheet.add();
                self.apply_course_fields(id, fields);
            }
            GpaCommand::Set { id, fields } => self.apply_course_fields(EntryId(id), fields),
            GpaCommand::Rm { id } => {
                self.sheet.remove(EntryId(id));
            }
            GpaCommand::Grades => return self.render(&grade_point_table()).map(Step::Print),
        }
        self.show()
    }

    fn apply_course_fields(&mut self, id: EntryId, fields: CourseFields) {
        let CourseFields {
            course,
            credits,
            grade,
        } = fields;
        let updates = [
            course.map(GpaField::Course),
            credits.map(GpaField::Credits),
            grade.map(GpaField::Grade),
        ];
        for field in updates.into_iter().flatten() {
            self.sheet.update(id, field);
        }
    }

    async fn on_buddy(&self, command: BuddyCommand) -> anyhow::Result<Step> {
        let BuddyCommand::Ask { text } = command;
        Ok(match self.chat.send(&text.join(" ")).await {
            SendOutcome::Empty => Step::Silent,
            SendOutcome::Busy => Step::Print(BUSY_HINT.to_string()),
            SendOutcome::Replied(message) => Step::Print(message.text),
        })
    }
}

/// Text after `keyword`, exactly as typed. Quotes and inner spacing are kept.
fn free_text<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.trim_start().strip_prefix(keyword)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim_start();
    (!text.is_empty()).then_some(text)
}

/// Help requests print normally; every other parse failure is an error.
fn usage(error: clap::Error) -> anyhow::Result<Step> {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            Ok(Step::Print(error.to_string()))
        }
        _ => Err(error.into()),
    }
}

fn transcript(messages: &[ChatMessage]) -> String {
    if messages.is_empty() {
        return String::from("(no messages yet)");
    }
    messages
        .iter()
        .map(|message| {
            let speaker = match message.role {
                Role::User => "you",
                Role::Model => "buddy",
            };
            format!("{speaker}: {}", message.text)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[derive(Serialize)]
struct TimetableView {
    mode: &'static str,
    slots: Vec<TimeSlot>,
}

#[derive(Serialize)]
struct AssignmentsView<'a> {
    assignments: &'a [Assignment],
    draft: &'a AssignmentDraft,
}

#[derive(Serialize)]
struct NotesView {
    notes: String,
    summary: String,
}

impl NotesView {
    fn to_text(&self) -> String {
        let notes = if self.notes.is_empty() {
            "(empty)"
        } else {
            self.notes.as_str()
        };
        if self.summary.is_empty() {
            return format!("Notes:\n{notes}");
        }
        format!("Notes:\n{notes}\n\nSummary:\n{}", self.summary)
    }
}

#[derive(Serialize)]
struct TabRow {
    tab: &'static str,
    label: &'static str,
    active: bool,
}
