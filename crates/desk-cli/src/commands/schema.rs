use desk_core::entities::{Assignment, ChatMessage, GpaEntry, TimeSlot};
use desk_core::gpa::GpaSummary;
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Entity names accepted by `desk schema`.
pub const SCHEMA_TYPES: [&str; 5] = [
    "assignment",
    "time_slot",
    "gpa_entry",
    "chat_message",
    "gpa_summary",
];

/// Handle `desk schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_by_name(&args.type_name)?;
    output(&schema, flags.command_format())
}

fn schema_by_name(name: &str) -> anyhow::Result<Schema> {
    let schema = match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "assignment" => schema_for!(Assignment),
        "time_slot" => schema_for!(TimeSlot),
        "gpa_entry" => schema_for!(GpaEntry),
        "chat_message" => schema_for!(ChatMessage),
        "gpa_summary" => schema_for!(GpaSummary),
        _ => anyhow::bail!(
            "unknown schema type '{name}' (expected one of: {})",
            SCHEMA_TYPES.join(", ")
        ),
    };
    Ok(schema)
}
