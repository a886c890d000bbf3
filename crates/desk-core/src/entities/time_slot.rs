use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{SlotColor, Weekday};
use crate::ids::EntryId;

/// A class meeting on the weekly timetable.
///
/// `time` is free text such as `"09:00 - 11:00"`; it is never parsed, and two
/// slots on the same day may overlap.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimeSlot {
    pub id: EntryId,
    pub day: Weekday,
    pub time: String,
    pub course: String,
    pub location: String,
    pub color: SlotColor,
}

impl TimeSlot {
    /// An empty slot on `day` with the given tint.
    #[must_use]
    pub const fn blank(id: EntryId, day: Weekday, color: SlotColor) -> Self {
        Self {
            id,
            day,
            time: String::new(),
            course: String::new(),
            location: String::new(),
            color,
        }
    }
}
