use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::editors::{append, contains_id, remove_by_id, update_by_id};
use crate::entities::TimeSlot;
use crate::enums::{SlotColor, Weekday};
use crate::ids::{EntryId, IdGenerator};

/// A single editable field of a [`TimeSlot`]. The day is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotField {
    Time(String),
    Course(String),
    Location(String),
    Color(SlotColor),
}

/// All slots of one day, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DaySchedule {
    pub day: Weekday,
    pub slots: Vec<TimeSlot>,
}

/// Weekly timetable with an explicit edit mode.
///
/// In view mode every mutation is refused and reported as `false`/`None`.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    slots: Vec<TimeSlot>,
    ids: IdGenerator,
    editing: bool,
}

impl Timetable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing slots in view mode.
    #[must_use]
    pub fn with_slots(slots: Vec<TimeSlot>) -> Self {
        let ids = IdGenerator::after(slots.iter().map(|slot| slot.id));
        Self {
            slots,
            ids,
            editing: false,
        }
    }

    /// Slots in insertion order.
    #[must_use]
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    /// Switch between view and edit mode; returns the new mode.
    pub const fn toggle_editing(&mut self) -> bool {
        self.editing = !self.editing;
        self.editing
    }

    /// Add an empty slot with a random palette color to `day`.
    pub fn add_slot(&mut self, day: Weekday) -> Option<EntryId> {
        self.add_slot_with_color(day, SlotColor::random())
    }

    pub fn add_slot_with_color(&mut self, day: Weekday, color: SlotColor) -> Option<EntryId> {
        if !self.editing {
            tracing::debug!(%day, "timetable in view mode, add ignored");
            return None;
        }
        let id = self.ids.next_id();
        self.slots = append(&self.slots, TimeSlot::blank(id, day, color));
        Some(id)
    }

    /// Replace one field of the slot `id`.
    pub fn update(&mut self, id: EntryId, field: SlotField) -> bool {
        if !self.editing {
            tracing::debug!(%id, "timetable in view mode, update ignored");
            return false;
        }
        if !contains_id(&self.slots, id) {
            return false;
        }
        self.slots = update_by_id(&self.slots, id, |slot| match &field {
            SlotField::Time(time) => slot.time.clone_from(time),
            SlotField::Course(course) => slot.course.clone_from(course),
            SlotField::Location(location) => slot.location.clone_from(location),
            SlotField::Color(color) => slot.color = *color,
        });
        true
    }

    pub fn remove(&mut self, id: EntryId) -> bool {
        if !self.editing {
            tracing::debug!(%id, "timetable in view mode, delete ignored");
            return false;
        }
        let existed = contains_id(&self.slots, id);
        self.slots = remove_by_id(&self.slots, id);
        existed
    }

    /// Slots of `day` ordered by their time text.
    ///
    /// The order is plain string order, so `"9:00"` sorts after `"10:00"`.
    /// Zero-padded times sort chronologically.
    #[must_use]
    pub fn day_slots(&self, day: Weekday) -> Vec<&TimeSlot> {
        let mut slots: Vec<&TimeSlot> = self.slots.iter().filter(|slot| slot.day == day).collect();
        slots.sort_by(|a, b| a.time.cmp(&b.time));
        slots
    }

    /// Every teaching day with its ordered slots, empty days included.
    #[must_use]
    pub fn week(&self) -> Vec<DaySchedule> {
        Weekday::ALL
            .into_iter()
            .map(|day| DaySchedule {
                day,
                slots: self.day_slots(day).into_iter().cloned().collect(),
            })
            .collect()
    }
}
