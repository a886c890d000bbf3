use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::EntryId;

/// A piece of coursework with a due date.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Assignment {
    pub id: EntryId,
    pub title: String,
    pub course: String,
    pub due_date: NaiveDate,
    pub completed: bool,
    /// Whether an email reminder was requested. The reminder control is
    /// disabled for completed work, but the stored value is kept as is.
    pub reminder_set: bool,
}
