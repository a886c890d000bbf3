//! Entity structs for all StudyDesk rows.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the CLI
//! can print them as JSON and publish their schemas.

mod assignment;
mod chat_message;
mod gpa_entry;
mod time_slot;

pub use assignment::Assignment;
pub use chat_message::ChatMessage;
pub use gpa_entry::GpaEntry;
pub use time_slot::TimeSlot;

use crate::ids::EntryId;

/// A row that can be addressed by id inside a list editor.
pub trait Keyed {
    fn id(&self) -> EntryId;
}

impl Keyed for Assignment {
    fn id(&self) -> EntryId {
        self.id
    }
}

impl Keyed for GpaEntry {
    fn id(&self) -> EntryId {
        self.id
    }
}

impl Keyed for TimeSlot {
    fn id(&self) -> EntryId {
        self.id
    }
}
