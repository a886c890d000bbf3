pub mod ask;
pub mod assignments;
pub mod dispatch;
pub mod gpa;
pub mod grades;
pub mod schema;
pub mod shared;
pub mod shell;
pub mod summarize;
pub mod timetable;
