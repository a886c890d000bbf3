use chrono::NaiveDate;
use serde::Serialize;

use crate::editors::{append, contains_id, remove_by_id, update_by_id};
use crate::entities::Assignment;
use crate::ids::{EntryId, IdGenerator};

/// Date format accepted by the assignment form.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Text fields of the "new assignment" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssignmentDraft {
    pub title: String,
    pub course: String,
    pub due_date: String,
}

/// Field selector for [`AssignmentBoard::set_draft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Course,
    DueDate,
}

impl AssignmentDraft {
    /// Parse the draft into its parts, or `None` if any required field is
    /// blank or the due date is not a calendar date.
    fn parts(&self) -> Option<(&str, &str, NaiveDate)> {
        let title = self.title.trim();
        let course = self.course.trim();
        let due = self.due_date.trim();
        if title.is_empty() || course.is_empty() || due.is_empty() {
            return None;
        }
        let due_date = NaiveDate::parse_from_str(due, DUE_DATE_FORMAT).ok()?;
        Some((title, course, due_date))
    }
}

/// A single editable field of an [`Assignment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentField {
    Title(String),
    Course(String),
    DueDate(NaiveDate),
}

/// Assignment tracker, always sorted by due date after an insert.
#[derive(Debug, Clone, Default)]
pub struct AssignmentBoard {
    assignments: Vec<Assignment>,
    ids: IdGenerator,
    draft: AssignmentDraft,
}

impl AssignmentBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing rows. New ids continue above the largest one.
    #[must_use]
    pub fn with_assignments(assignments: Vec<Assignment>) -> Self {
        let ids = IdGenerator::after(assignments.iter().map(|assignment| assignment.id));
        Self {
            assignments,
            ids,
            draft: AssignmentDraft::default(),
        }
    }

    #[must_use]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    #[must_use]
    pub const fn draft(&self) -> &AssignmentDraft {
        &self.draft
    }

    /// Set one field of the pending form.
    pub fn set_draft(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.draft.title = value,
            DraftField::Course => self.draft.course = value,
            DraftField::DueDate => self.draft.due_date = value,
        }
    }

    /// Submit the pending form.
    ///
    /// A draft with a blank field or an unparseable date is silently kept and
    /// `None` is returned. On success the draft is cleared, the new row is
    /// inserted, and the whole board is re-sorted by due date.
    pub fn submit(&mut self) -> Option<EntryId> {
        let Some((title, course, due_date)) = self.draft.parts() else {
            tracing::debug!(draft = ?self.draft, "assignment form incomplete, submit blocked");
            return None;
        };

        let id = self.ids.next_id();
        let assignment = Assignment {
            id,
            title: title.to_string(),
            course: course.to_string(),
            due_date,
            completed: false,
            reminder_set: false,
        };

        let mut next = append(&self.assignments, assignment);
        next.sort_by_key(|assignment| assignment.due_date);
        self.assignments = next;
        self.draft = AssignmentDraft::default();
        Some(id)
    }

    /// Fill the form from `draft` and submit it in one step.
    pub fn add(&mut self, draft: AssignmentDraft) -> Option<EntryId> {
        self.draft = draft;
        self.submit()
    }

    /// Flip `completed`. The stored reminder flag is left alone.
    pub fn toggle_completed(&mut self, id: EntryId) -> bool {
        self.edit(id, |assignment| assignment.completed = !assignment.completed)
    }

    /// Flip `reminder_set`, whether or not the assignment is completed.
    pub fn toggle_reminder(&mut self, id: EntryId) -> bool {
        self.edit(id, |assignment| {
            assignment.reminder_set = !assignment.reminder_set;
        })
    }

    /// Replace one field of the row `id`. Order is not recomputed.
    pub fn update(&mut self, id: EntryId, field: AssignmentField) -> bool {
        self.edit(id, |assignment| match &field {
            AssignmentField::Title(title) => assignment.title.clone_from(title),
            AssignmentField::Course(course) => assignment.course.clone_from(course),
            AssignmentField::DueDate(date) => assignment.due_date = *date,
        })
    }

    pub fn remove(&mut self, id: EntryId) -> bool {
        let existed = contains_id(&self.assignments, id);
        self.assignments = remove_by_id(&self.assignments, id);
        existed
    }

    fn edit<F>(&mut self, id: EntryId, edit: F) -> bool
    where
        F: FnMut(&mut Assignment),
    {
        if !contains_id(&self.assignments, id) {
            tracing::debug!(%id, "assignment not found, edit ignored");
            return false;
        }
        self.assignments = update_by_id(&self.assignments, id, edit);
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn draft(title: &str, course: &str, due: &str) -> AssignmentDraft {
        AssignmentDraft {
            title: title.into(),
            course: course.into(),
            due_date: due.into(),
        }
    }

    #[test]
    fn submit_clears_draft() {
        let mut board = AssignmentBoard::new();
        board.set_draft(DraftField::Title, "Essay");
        board.set_draft(DraftField::Course, "History");
        board.set_draft(DraftField::DueDate, "2024-11-01");
        assert!(board.submit().is_some());
        assert_eq!(board.draft(), &AssignmentDraft::default());
        assert_eq!(board.assignments()[0].title, "Essay");
        assert!(!board.assignments()[0].completed);
        assert!(!board.assignments()[0].reminder_set);
    }

    #[test]
    fn blocked_submit_keeps_draft() {
        let mut board = AssignmentBoard::new();
        board.set_draft(DraftField::Title, "Essay");
        board.set_draft(DraftField::DueDate, "2024-11-01");
        assert_eq!(board.submit(), None);
        assert_eq!(board.draft().title, "Essay");
        assert!(board.assignments().is_empty());
    }

    #[test]
    fn unparseable_date_blocks_submit() {
        let mut board = AssignmentBoard::new();
        assert_eq!(board.add(draft("Essay", "History", "next friday")), None);
        assert_eq!(board.add(draft("Essay", "History", "   ")), None);
        assert!(board.assignments().is_empty());
    }

    #[test]
    fn equal_due_dates_keep_insertion_order() {
        let mut board = AssignmentBoard::new();
        let first = board.add(draft("A", "X", "2024-10-20")).unwrap();
        let second = board.add(draft("B", "X", "2024-10-20")).unwrap();
        let ids: Vec<EntryId> = board.assignments().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn update_changes_field_in_place() {
        let mut board = AssignmentBoard::new();
        let id = board.add(draft("A", "X", "2024-10-20")).unwrap();
        assert!(board.update(id, AssignmentField::Title("Renamed".into())));
        assert_eq!(board.assignments()[0].title, "Renamed");
        assert!(!board.update(EntryId(999), AssignmentField::Course("Y".into())));
    }
}
