//! Sample rows that populate a fresh shell.

use chrono::NaiveDate;

use crate::entities::{Assignment, GpaEntry, TimeSlot};
use crate::enums::{LetterGrade, SlotColor, Weekday};
use crate::ids::EntryId;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn assignment(
    id: u64,
    title: &str,
    course: &str,
    due: NaiveDate,
    completed: bool,
    reminder_set: bool,
) -> Assignment {
    Assignment {
        id: EntryId(id),
        title: title.to_string(),
        course: course.to_string(),
        due_date: due,
        completed,
        reminder_set,
    }
}

fn slot(
    id: u64,
    day: Weekday,
    time: &str,
    course: &str,
    location: &str,
    color: SlotColor,
) -> TimeSlot {
    TimeSlot {
        id: EntryId(id),
        day,
        time: time.to_string(),
        course: course.to_string(),
        location: location.to_string(),
        color,
    }
}

/// Four assignments, already in due-date order.
#[must_use]
pub fn sample_assignments() -> Vec<Assignment> {
    vec![
        assignment(
            1,
            "Problem Set 1",
            "Advanced Algorithms",
            date(2024, 10, 15),
            true,
            false,
        ),
        assignment(
            2,
            "Lab Report 3",
            "Operating Systems",
            date(2024, 10, 18),
            false,
            true,
        ),
        assignment(
            3,
            "Parser Implementation",
            "Compilers",
            date(2024, 10, 22),
            false,
            false,
        ),
        assignment(
            4,
            "Homework 5",
            "Linear Algebra",
            date(2024, 10, 25),
            false,
            false,
        ),
    ]
}

/// A Monday-to-Saturday week of classes.
#[must_use]
pub fn sample_timetable() -> Vec<TimeSlot> {
    use SlotColor::{Blue, Green, Purple, Red, Yellow};
    use Weekday::{Friday, Monday, Saturday, Thursday, Tuesday, Wednesday};

    vec![
        slot(1, Monday, "09:00 - 11:00", "Advanced Algorithms", "Hall A", Red),
        slot(2, Monday, "13:00 - 15:00", "Operating Systems", "Lab 3", Blue),
        slot(3, Tuesday, "10:00 - 12:00", "Compilers", "Hall B", Green),
        slot(4, Wednesday, "11:00 - 13:00", "Advanced Algorithms", "Hall A", Red),
        slot(5, Wednesday, "16:00 - 18:00", "Linear Algebra", "Room 101", Yellow),
        slot(6, Thursday, "09:00 - 11:00", "Compilers", "Hall B", Green),
        slot(7, Thursday, "14:00 - 16:00", "Operating Systems", "Lab 3", Blue),
        slot(8, Friday, "10:00 - 12:00", "Linear Algebra", "Room 101", Yellow),
        slot(9, Saturday, "11:00 - 14:00", "Weekend Workshop", "Studio C", Purple),
    ]
}

/// Two graded courses.
#[must_use]
pub fn sample_gpa_entries() -> Vec<GpaEntry> {
    vec![
        GpaEntry {
            id: EntryId(1),
            course: "Advanced Algorithms".to_string(),
            credits: 3.0,
            grade: LetterGrade::AMinus,
        },
        GpaEntry {
            id: EntryId(2),
            course: "Operating Systems".to_string(),
            credits: 4.0,
            grade: LetterGrade::BPlus,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpa::compute_gpa;

    #[test]
    fn sample_assignments_are_sorted() {
        let rows = sample_assignments();
        assert!(rows.windows(2).all(|pair| pair[0].due_date <= pair[1].due_date));
    }

    #[test]
    fn sample_gpa_matches_reference_figure() {
        assert_eq!(compute_gpa(&sample_gpa_entries()), "3.47");
    }

    #[test]
    fn sample_timetable_covers_every_day() {
        let rows = sample_timetable();
        for day in Weekday::ALL {
            assert!(rows.iter().any(|slot| slot.day == day), "{day} has no class");
        }
    }
}
