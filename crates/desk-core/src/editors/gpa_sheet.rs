use crate::editors::{append, contains_id, remove_by_id, update_by_id};
use crate::entities::GpaEntry;
use crate::enums::LetterGrade;
use crate::gpa::{GpaSummary, compute_gpa};
use crate::ids::{EntryId, IdGenerator};

/// A single editable field of a [`GpaEntry`].
#[derive(Debug, Clone, PartialEq)]
pub enum GpaField {
    Course(String),
    Credits(f64),
    Grade(LetterGrade),
}

/// Course rows of the GPA calculator, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct GpaSheet {
    entries: Vec<GpaEntry>,
    ids: IdGenerator,
}

impl GpaSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing rows. New ids continue above the largest one.
    #[must_use]
    pub fn with_entries(entries: Vec<GpaEntry>) -> Self {
        let ids = IdGenerator::after(entries.iter().map(|entry| entry.id));
        Self { entries, ids }
    }

    #[must_use]
    pub fn entries(&self) -> &[GpaEntry] {
        &self.entries
    }

    /// Append a blank row (3 credits, grade A) and return its id.
    pub fn add(&mut self) -> EntryId {
        let id = self.ids.next_id();
        self.entries = append(&self.entries, GpaEntry::blank(id));
        id
    }

    /// Replace one field of the row `id`. Returns whether the row exists.
    pub fn update(&mut self, id: EntryId, field: GpaField) -> bool {
        if !contains_id(&self.entries, id) {
            tracing::debug!(%id, "gpa entry not found, update ignored");
            return false;
        }
        self.entries = update_by_id(&self.entries, id, |entry| match &field {
            GpaField::Course(course) => entry.course.clone_from(course),
            GpaField::Credits(credits) => entry.credits = *credits,
            GpaField::Grade(grade) => entry.grade = *grade,
        });
        true
    }

    /// Drop the row `id`. Returns whether the row existed.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let existed = contains_id(&self.entries, id);
        self.entries = remove_by_id(&self.entries, id);
        existed
    }

    /// Current GPA with two fraction digits.
    #[must_use]
    pub fn gpa(&self) -> String {
        compute_gpa(&self.entries)
    }

    #[must_use]
    pub fn summary(&self) -> GpaSummary {
        GpaSummary::from_entries(&self.entries)
    }
}
