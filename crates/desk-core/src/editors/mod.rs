//! List editors for the three row-backed screens.
//!
//! The free functions in this module are the whole editing contract: they
//! take the current collection and return the next one, leaving the input
//! untouched. An id that matches nothing is not an error; the returned
//! collection is simply equal to the input.
//!
//! The controllers ([`AssignmentBoard`], [`Timetable`], [`GpaSheet`]) own a
//! collection plus an [`IdGenerator`](crate::ids::IdGenerator) and apply these
//! functions to it.

mod assignments;
mod gpa_sheet;
mod timetable;

pub use assignments::{AssignmentBoard, AssignmentDraft, AssignmentField, DraftField};
pub use gpa_sheet::{GpaField, GpaSheet};
pub use timetable::{DaySchedule, SlotField, Timetable};

use crate::entities::Keyed;
use crate::ids::EntryId;

/// Return `items` with `item` appended.
#[must_use]
pub fn append<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(item);
    next
}

/// Return `items` with `edit` applied to a copy of the entry whose id is `id`.
#[must_use]
pub fn update_by_id<T, F>(items: &[T], id: EntryId, mut edit: F) -> Vec<T>
where
    T: Keyed + Clone,
    F: FnMut(&mut T),
{
    items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            if item.id() == id {
                edit(&mut item);
            }
            item
        })
        .collect()
}

/// Return `items` without the entry whose id is `id`.
#[must_use]
pub fn remove_by_id<T>(items: &[T], id: EntryId) -> Vec<T>
where
    T: Keyed + Clone,
{
    items.iter().filter(|item| item.id() != id).cloned().collect()
}

/// Whether any entry in `items` has the id `id`.
#[must_use]
pub fn contains_id<T: Keyed>(items: &[T], id: EntryId) -> bool {
    items.iter().any(|item| item.id() == id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::entities::GpaEntry;
    use crate::enums::LetterGrade;

    fn rows() -> Vec<GpaEntry> {
        (1..=3).map(|n| GpaEntry::blank(EntryId(n))).collect()
    }

    #[test]
    fn append_keeps_input() {
        let items = rows();
        let next = append(&items, GpaEntry::blank(EntryId(4)));
        assert_eq!(items.len(), 3);
        assert_eq!(next.len(), 4);
        assert_eq!(next[3].id, EntryId(4));
    }

    #[test]
    fn update_touches_only_matching_entry() {
        let items = rows();
        let next = update_by_id(&items, EntryId(2), |entry| entry.grade = LetterGrade::C);
        assert_eq!(next[0], items[0]);
        assert_eq!(next[1].grade, LetterGrade::C);
        assert_eq!(next[2], items[2]);
        assert_eq!(items[1].grade, LetterGrade::A);
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let items = rows();
        let next = update_by_id(&items, EntryId(99), |entry| entry.credits = 0.0);
        assert_eq!(next, items);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let items = rows();
        assert_eq!(remove_by_id(&items, EntryId(99)), items);
    }

    #[test]
    fn remove_filters_matching_entry() {
        let next = remove_by_id(&rows(), EntryId(1));
        let ids: Vec<EntryId> = next.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![EntryId(2), EntryId(3)]);
    }
}
