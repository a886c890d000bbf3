//! # desk-core
//!
//! Core types, ID generation, and error types for StudyDesk.
//!
//! This crate holds everything that does not talk to the outside world:
//! - Entity structs for the four kinds of user-editable rows
//! - Enumerated value sets (letter grades, weekdays, slot colors, tabs)
//! - Monotonic identifier generation
//! - The GPA engine
//! - List editors for assignments, timetable slots, and GPA entries
//! - Seed rows used to populate a fresh shell

pub mod editors;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod gpa;
pub mod ids;
pub mod seed;
