use desk_core::gpa::grade_point_table;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `desk grades`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&grade_point_table(), flags.command_format())
}
