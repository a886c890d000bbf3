//! Entry identifiers.
//!
//! Identifiers come from a per-collection monotonic counter. Two entries
//! created back to back in the same collection always get distinct ids.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one row in a list editor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic source of [`EntryId`]s for one collection.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Start issuing ids at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Start issuing ids above the largest id already in use.
    #[must_use]
    pub fn after<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = EntryId>,
    {
        let highest = existing.into_iter().map(|id| id.0).max().unwrap_or(0);
        Self {
            next: highest.saturating_add(1),
        }
    }

    /// Issue the next id.
    pub const fn next_id(&mut self) -> EntryId {
        let id = EntryId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn rapid_ids_are_unique() {
        let mut ids = IdGenerator::new();
        let issued: HashSet<EntryId> = (0..10_000).map(|_| ids.next_id()).collect();
        assert_eq!(issued.len(), 10_000);
    }

    #[test]
    fn after_skips_existing_ids() {
        let mut ids = IdGenerator::after([EntryId(4), EntryId(9), EntryId(2)]);
        assert_eq!(ids.next_id(), EntryId(10));
        assert_eq!(ids.next_id(), EntryId(11));
    }

    #[test]
    fn after_empty_starts_at_one() {
        let mut ids = IdGenerator::after(std::iter::empty());
        assert_eq!(ids.next_id(), EntryId(1));
    }
}
