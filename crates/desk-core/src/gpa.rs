//! GPA engine.
//!
//! GPA is the credit-weighted mean of grade points:
//!
//! ```text
//! gpa = Σ points(grade_i) × credits_i / Σ credits_i
//! ```
//!
//! When total credits are not positive the result is the literal `"0.00"`.
//! The engine is recomputed on every call; inputs are a handful of rows.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::GpaEntry;
use crate::enums::LetterGrade;

/// GPA shown when no credits have been entered.
pub const ZERO_GPA: &str = "0.00";

/// Compute the GPA of `entries` as a string with two fraction digits.
#[must_use]
pub fn compute_gpa(entries: &[GpaEntry]) -> String {
    GpaSummary::from_entries(entries).gpa
}

/// Totals behind a GPA figure.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GpaSummary {
    pub courses: usize,
    pub total_credits: f64,
    pub quality_points: f64,
    pub gpa: String,
}

impl GpaSummary {
    #[must_use]
    pub fn from_entries(entries: &[GpaEntry]) -> Self {
        let quality_points: f64 = entries.iter().map(GpaEntry::quality_points).sum();
        let total_credits: f64 = entries.iter().map(|entry| entry.credits).sum();

        let gpa = if total_credits > 0.0 {
            format!("{:.2}", quality_points / total_credits)
        } else {
            ZERO_GPA.to_string()
        };

        Self {
            courses: entries.len(),
            total_credits,
            quality_points,
            gpa,
        }
    }
}

/// One row of the grade-point table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GradePoint {
    pub grade: LetterGrade,
    pub points: f64,
}

/// The full grade-point table in picker order.
#[must_use]
pub fn grade_point_table() -> Vec<GradePoint> {
    LetterGrade::ALL
        .into_iter()
        .map(|grade| GradePoint {
            grade,
            points: grade.points(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::ids::EntryId;

    fn entry(id: u64, credits: f64, grade: LetterGrade) -> GpaEntry {
        GpaEntry {
            id: EntryId(id),
            course: format!("Course {id}"),
            credits,
            grade,
        }
    }

    #[test]
    fn empty_list_is_zero() {
        assert_eq!(compute_gpa(&[]), "0.00");
    }

    #[test]
    fn all_zero_credits_is_zero() {
        let entries = [entry(1, 0.0, LetterGrade::A), entry(2, 0.0, LetterGrade::F)];
        assert_eq!(compute_gpa(&entries), "0.00");
    }

    #[test]
    fn weighted_mean_rounds_to_two_digits() {
        let entries = [
            entry(1, 3.0, LetterGrade::AMinus),
            entry(2, 4.0, LetterGrade::BPlus),
        ];
        assert_eq!(compute_gpa(&entries), "3.47");
    }

    #[rstest]
    #[case(LetterGrade::APlus, "4.00")]
    #[case(LetterGrade::A, "4.00")]
    #[case(LetterGrade::AMinus, "3.70")]
    #[case(LetterGrade::BPlus, "3.30")]
    #[case(LetterGrade::B, "3.00")]
    #[case(LetterGrade::BMinus, "2.70")]
    #[case(LetterGrade::CPlus, "2.30")]
    #[case(LetterGrade::C, "2.00")]
    #[case(LetterGrade::CMinus, "1.70")]
    #[case(LetterGrade::DPlus, "1.30")]
    #[case(LetterGrade::D, "1.00")]
    #[case(LetterGrade::F, "0.00")]
    fn single_course_gpa_equals_grade_points(#[case] grade: LetterGrade, #[case] want: &str) {
        assert_eq!(compute_gpa(&[entry(1, 4.0, grade)]), want);
    }

    #[test]
    fn zero_credit_rows_do_not_move_the_mean() {
        let entries = [entry(1, 3.0, LetterGrade::B), entry(2, 0.0, LetterGrade::F)];
        assert_eq!(compute_gpa(&entries), "3.00");
    }

    #[test]
    fn summary_reports_totals() {
        let entries = [
            entry(1, 3.0, LetterGrade::AMinus),
            entry(2, 4.0, LetterGrade::BPlus),
        ];
        let summary = GpaSummary::from_entries(&entries);
        assert_eq!(summary.courses, 2);
        assert!((summary.total_credits - 7.0).abs() < f64::EPSILON);
        assert!((summary.quality_points - 24.3).abs() < 1e-9);
        assert_eq!(summary.gpa, "3.47");
    }

    #[test]
    fn table_lists_every_grade_in_order() {
        let table = grade_point_table();
        assert_eq!(table.len(), 12);
        assert_eq!(table[0].grade, LetterGrade::APlus);
        assert_eq!(table[11].grade, LetterGrade::F);
        assert!(table.windows(2).all(|pair| pair[0].points >= pair[1].points));
    }
}
