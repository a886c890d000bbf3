//! Lecture notes with a single AI summary slot.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::fail_soft::FailSoft;
use crate::generator::TextGenerator;
use crate::pending::PendingGuard;

/// Summary shown when there is nothing to summarize.
pub const EMPTY_NOTES_MESSAGE: &str = "Please write some notes first.";

/// Wrap notes in the summarization prompt.
#[must_use]
pub fn summary_prompt(notes: &str) -> String {
    format!(
        "Summarize the following university lecture notes concisely for review purposes:\n\n---\n{notes}\n---"
    )
}

/// Result of [`NotesSummarizer::summarize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummarizeOutcome {
    /// Another summary is in flight; nothing happened.
    Busy,
    /// The notes were blank; the summary slot now holds [`EMPTY_NOTES_MESSAGE`].
    EmptyNotes,
    /// The summary slot now holds this text.
    Summarized(String),
}

/// Notes buffer plus the latest summary of it.
///
/// Unlike the chat log, summaries are not kept: each run replaces the last.
#[derive(Debug)]
pub struct NotesSummarizer<G> {
    generator: FailSoft<G>,
    notes: Mutex<String>,
    summary: Mutex<String>,
    loading: AtomicBool,
}

impl<G: TextGenerator> NotesSummarizer<G> {
    pub const fn new(generator: FailSoft<G>) -> Self {
        Self {
            generator,
            notes: Mutex::new(String::new()),
            summary: Mutex::new(String::new()),
            loading: AtomicBool::new(false),
        }
    }

    /// Replace the notes buffer.
    pub fn set_notes(&self, notes: impl Into<String>) {
        *lock(&self.notes) = notes.into();
    }

    /// Append one line to the notes buffer.
    pub fn append_line(&self, line: &str) {
        let mut notes = lock(&self.notes);
        if !notes.is_empty() {
            notes.push('\n');
        }
        notes.push_str(line);
    }

    pub fn notes(&self) -> String {
        lock(&self.notes).clone()
    }

    /// Current summary; empty until the first run.
    pub fn summary(&self) -> String {
        lock(&self.summary).clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Summarize the notes buffer.
    pub async fn summarize_buffer(&self) -> SummarizeOutcome {
        let notes = self.notes();
        self.summarize(&notes).await
    }

    /// Summarize `notes` into the summary slot.
    ///
    /// Blank notes set the slot to [`EMPTY_NOTES_MESSAGE`] without calling the
    /// generator or touching the loading flag. Otherwise the slot is cleared
    /// while the request runs.
    pub async fn summarize(&self, notes: &str) -> SummarizeOutcome {
        if notes.trim().is_empty() {
            *lock(&self.summary) = EMPTY_NOTES_MESSAGE.to_string();
            return SummarizeOutcome::EmptyNotes;
        }

        let Some(_loading) = PendingGuard::acquire(&self.loading) else {
            tracing::debug!("summary already in flight, request rejected");
            return SummarizeOutcome::Busy;
        };

        lock(&self.summary).clear();
        let summary = self.generator.generate(&summary_prompt(notes), None).await;
        *lock(&self.summary) = summary.clone();

        SummarizeOutcome::Summarized(summary)
    }
}

fn lock(slot: &Mutex<String>) -> MutexGuard<'_, String> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}
