//! Error types for StudyDesk core parsing.
//!
//! List editors never fail: a missing id is a no-op and a blocked form
//! submission is reported as `None`. The only fallible surface in this crate
//! is turning user text into one of the enumerated value sets.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Text did not match any letter grade in the grade-point table.
    #[error("Unknown letter grade: '{0}'")]
    UnknownGrade(String),

    /// Text did not match any enumerated value of the named kind.
    #[error("Unknown {kind}: '{value}'")]
    UnknownValue { kind: &'static str, value: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
