//! Enumerated value sets for StudyDesk.
//!
//! All enums except [`LetterGrade`] use `snake_case` serialization. Letter
//! grades serialize as their printed form (`"A-"`, `"B+"`) since that is the
//! only spelling students use.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// LetterGrade
// ---------------------------------------------------------------------------

/// A letter grade from the fixed grade-point table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum LetterGrade {
    #[serde(rename = "A+")]
    APlus,
    #[default]
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
}

impl LetterGrade {
    /// Every grade, in the order a grade picker lists them.
    pub const ALL: [Self; 12] = [
        Self::APlus,
        Self::A,
        Self::AMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CPlus,
        Self::C,
        Self::CMinus,
        Self::DPlus,
        Self::D,
        Self::F,
    ];

    /// Grade points on the 4.0 scale.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn points(self) -> f64 {
        match self {
            Self::APlus => 4.0,
            Self::A => 4.0,
            Self::AMinus => 3.7,
            Self::BPlus => 3.3,
            Self::B => 3.0,
            Self::BMinus => 2.7,
            Self::CPlus => 2.3,
            Self::C => 2.0,
            Self::CMinus => 1.7,
            Self::DPlus => 1.3,
            Self::D => 1.0,
            Self::F => 0.0,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LetterGrade {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|grade| grade.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownGrade(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Weekday
// ---------------------------------------------------------------------------

/// Teaching day of the week. Sunday has no classes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Self; 6] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }

    /// Capitalized name for headings.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| day.as_str() == wanted || day.as_str()[..3] == wanted)
            .ok_or_else(|| CoreError::UnknownValue {
                kind: "weekday",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// SlotColor
// ---------------------------------------------------------------------------

/// Palette entry used to tint a timetable slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SlotColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Pink,
    Indigo,
}

impl SlotColor {
    pub const ALL: [Self; 7] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Purple,
        Self::Pink,
        Self::Indigo,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Indigo => "indigo",
        }
    }

    /// Palette token understood by the stylesheet.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Red => "bg-red-500/80",
            Self::Blue => "bg-blue-500/80",
            Self::Green => "bg-green-500/80",
            Self::Yellow => "bg-yellow-500/80",
            Self::Purple => "bg-purple-500/80",
            Self::Pink => "bg-pink-500/80",
            Self::Indigo => "bg-indigo-500/80",
        }
    }

    /// Pick a palette entry uniformly at random.
    ///
    /// Falls back to the first palette entry if the OS random source is
    /// unavailable; the color is cosmetic.
    #[must_use]
    pub fn random() -> Self {
        match getrandom::u32() {
            Ok(value) => Self::ALL[value as usize % Self::ALL.len()],
            Err(error) => {
                tracing::debug!(%error, "random source unavailable, using first palette color");
                Self::ALL[0]
            }
        }
    }
}

impl fmt::Display for SlotColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotColor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == wanted || color.token() == wanted)
            .ok_or_else(|| CoreError::UnknownValue {
                kind: "color",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Author of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Model,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tab
// ---------------------------------------------------------------------------

/// Top-level screen. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Timetable,
    Assignments,
    Notes,
    Gpa,
    AiBuddy,
}

impl Tab {
    pub const ALL: [Self; 5] = [
        Self::Timetable,
        Self::Assignments,
        Self::Notes,
        Self::Gpa,
        Self::AiBuddy,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timetable => "timetable",
            Self::Assignments => "assignments",
            Self::Notes => "notes",
            Self::Gpa => "gpa",
            Self::AiBuddy => "ai_buddy",
        }
    }

    /// Label shown in the tab bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Timetable => "Timetable",
            Self::Assignments => "Assignments",
            Self::Notes => "Notes",
            Self::Gpa => "GPA Calc",
            Self::AiBuddy => "AI Buddy",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownValue {
                kind: "tab",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_parse_is_case_insensitive() {
        assert_eq!("a-".parse::<LetterGrade>().unwrap(), LetterGrade::AMinus);
        assert_eq!(" B+ ".parse::<LetterGrade>().unwrap(), LetterGrade::BPlus);
    }

    #[test]
    fn grade_parse_rejects_unknown() {
        let err = "E".parse::<LetterGrade>().unwrap_err();
        assert_eq!(err, CoreError::UnknownGrade("E".into()));
    }

    #[test]
    fn grade_serializes_as_printed_form() {
        let json = serde_json::to_string(&LetterGrade::AMinus).unwrap();
        assert_eq!(json, "\"A-\"");
        let back: LetterGrade = serde_json::from_str("\"C+\"").unwrap();
        assert_eq!(back, LetterGrade::CPlus);
    }

    #[test]
    fn weekday_accepts_short_names() {
        assert_eq!("Wed".parse::<Weekday>().unwrap(), Weekday::Wednesday);
        assert_eq!("saturday".parse::<Weekday>().unwrap(), Weekday::Saturday);
        assert!("sunday".parse::<Weekday>().is_err());
    }

    #[test]
    fn color_parses_label_or_token() {
        assert_eq!("Pink".parse::<SlotColor>().unwrap(), SlotColor::Pink);
        assert_eq!(
            "bg-indigo-500/80".parse::<SlotColor>().unwrap(),
            SlotColor::Indigo
        );
    }

    #[test]
    fn random_color_is_in_palette() {
        for _ in 0..32 {
            assert!(SlotColor::ALL.contains(&SlotColor::random()));
        }
    }

    #[test]
    fn tab_parses_hyphenated_name() {
        assert_eq!("ai-buddy".parse::<Tab>().unwrap(), Tab::AiBuddy);
        assert_eq!(Tab::default(), Tab::Timetable);
    }
}
