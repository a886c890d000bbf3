use desk_core::editors::AssignmentBoard;
use desk_core::seed;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `desk assignments`.
pub fn handle(_ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let board = AssignmentBoard::with_assignments(seed::sample_assignments());
    output(&board.assignments(), flags.command_format())
}
