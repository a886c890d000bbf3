use anyhow::Context;
use desk_core::editors::Timetable;
use desk_core::entities::TimeSlot;
use desk_core::enums::Weekday;
use desk_core::seed;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TimetableArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `desk timetable`.
pub fn handle(args: &TimetableArgs, _ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let timetable = Timetable::with_slots(seed::sample_timetable());

    let day = args
        .day
        .as_deref()
        .map(str::parse::<Weekday>)
        .transpose()
        .context("invalid --day")?;

    output(&week_rows(&timetable, day), flags.command_format())
}

/// Slots in display order: by day, then by time text.
pub fn week_rows(timetable: &Timetable, day: Option<Weekday>) -> Vec<TimeSlot> {
    match day {
        Some(day) => timetable.day_slots(day).into_iter().cloned().collect(),
        None => timetable
            .week()
            .into_iter()
            .flat_map(|schedule| schedule.slots)
            .collect(),
    }
}
