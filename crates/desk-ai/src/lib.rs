//! # desk-ai
//!
//! The AI-backed half of StudyDesk:
//! - [`TextGenerator`], the one operation the app needs from a language model
//! - [`GeminiClient`], a `generateContent` implementation over reqwest
//! - [`FailSoft`], the boundary adapter that turns every failure into a
//!   displayable fallback string
//! - [`ChatSession`] and [`NotesSummarizer`], the two components that call it
//!
//! Only [`TextGenerator`] implementations return errors. Everything from
//! [`FailSoft`] upward deals in plain strings.

pub mod chat;
pub mod fail_soft;
pub mod gemini;
pub mod generator;
pub mod notes;

mod error;
mod http;
mod pending;

pub use chat::{ChatSession, STUDY_BUDDY_INSTRUCTION, SendOutcome};
pub use error::GenerationError;
pub use fail_soft::{FALLBACK_MESSAGE, FailSoft};
pub use gemini::GeminiClient;
pub use generator::TextGenerator;
pub use notes::{EMPTY_NOTES_MESSAGE, NotesSummarizer, SummarizeOutcome, summary_prompt};
