//! Entities validate against their own generated JSON schemas.

use schemars::schema_for;

use desk_core::entities::{Assignment, ChatMessage, GpaEntry, TimeSlot};
use desk_core::seed::{sample_assignments, sample_gpa_entries, sample_timetable};

fn schema_errors<T>(value: &T, schema: &schemars::Schema) -> Vec<String>
where
    T: serde::Serialize,
{
    let schema = serde_json::to_value(schema).unwrap();
    let instance = serde_json::to_value(value).unwrap();
    let validator = jsonschema::validator_for(&schema).expect("schema should be valid");
    validator
        .iter_errors(&instance)
        .map(|e| format!("{e}"))
        .collect()
}

#[test]
fn seeded_rows_match_schemas() {
    let assignment_schema = schema_for!(Assignment);
    for row in sample_assignments() {
        assert!(schema_errors(&row, &assignment_schema).is_empty());
    }

    let slot_schema = schema_for!(TimeSlot);
    for row in sample_timetable() {
        assert!(schema_errors(&row, &slot_schema).is_empty());
    }

    let entry_schema = schema_for!(GpaEntry);
    for row in sample_gpa_entries() {
        assert!(schema_errors(&row, &entry_schema).is_empty());
    }
}

#[test]
fn chat_message_serializes_role_in_snake_case() {
    let json = serde_json::to_value(ChatMessage::model("hi")).unwrap();
    assert_eq!(json["role"], "model");
    assert!(schema_errors(&ChatMessage::user("hello"), &schema_for!(ChatMessage)).is_empty());
}

#[test]
fn due_date_serializes_as_iso_date() {
    let json = serde_json::to_value(&sample_assignments()[0]).unwrap();
    assert_eq!(json["due_date"], "2024-10-15");
    assert_eq!(json["id"], 1);
}
