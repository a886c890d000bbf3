use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::LetterGrade;
use crate::ids::EntryId;

/// Default credit weight for a new course row.
pub const DEFAULT_CREDITS: f64 = 3.0;

/// One course row in the GPA calculator.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GpaEntry {
    pub id: EntryId,
    pub course: String,
    pub credits: f64,
    pub grade: LetterGrade,
}

impl GpaEntry {
    /// A blank row: no course name, 3 credits, grade A.
    #[must_use]
    pub fn blank(id: EntryId) -> Self {
        Self {
            id,
            course: String::new(),
            credits: DEFAULT_CREDITS,
            grade: LetterGrade::default(),
        }
    }

    /// Grade points weighted by credits.
    #[must_use]
    pub fn quality_points(&self) -> f64 {
        self.grade.points() * self.credits
    }
}
