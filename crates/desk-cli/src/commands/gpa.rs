use desk_core::editors::{GpaField, GpaSheet};
use desk_core::entities::GpaEntry;
use desk_core::gpa::GpaSummary;
use desk_core::seed;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GpaArgs;
use crate::commands::shared::parse::parse_course_row;
use crate::context::AppContext;
use crate::output::output;

/// Course rows followed by their totals.
#[derive(Debug, Serialize)]
pub struct GpaReport {
    pub entries: Vec<GpaEntry>,
    #[serde(flatten)]
    pub summary: GpaSummary,
}

impl GpaReport {
    pub fn from_sheet(sheet: &GpaSheet) -> Self {
        Self {
            entries: sheet.entries().to_vec(),
            summary: sheet.summary(),
        }
    }
}

/// Handle `desk gpa`.
pub fn handle(args: &GpaArgs, _ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sheet = build_sheet(&args.courses)?;
    output(&GpaReport::from_sheet(&sheet), flags.command_format())
}

fn build_sheet(courses: &[String]) -> anyhow::Result<GpaSheet> {
    if courses.is_empty() {
        tracing::debug!("no --course rows given, using sample entries");
        return Ok(GpaSheet::with_entries(seed::sample_gpa_entries()));
    }

    let mut sheet = GpaSheet::new();
    for raw in courses {
        let row = parse_course_row(raw)?;
        let id = sheet.add();
        sheet.update(id, GpaField::Course(row.course));
        sheet.update(id, GpaField::Credits(row.credits));
        sheet.update(id, GpaField::Grade(row.grade));
    }
    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{GpaReport, build_sheet};

    #[test]
    fn rows_from_flags_are_kept_in_order() {
        let sheet = build_sheet(&["Compilers:3:A-".to_string(), "Networks:4:B+".to_string()])
            .expect("rows should parse");
        let report = GpaReport::from_sheet(&sheet);

        let courses: Vec<&str> = report.entries.iter().map(|e| e.course.as_str()).collect();
        assert_eq!(courses, vec!["Compilers", "Networks"]);
        assert_eq!(report.summary.gpa, "3.47");
    }

    #[test]
    fn no_rows_falls_back_to_samples() {
        let sheet = build_sheet(&[]).expect("samples should load");
        assert_eq!(sheet.entries().len(), 2);
        assert_eq!(sheet.gpa(), "3.47");
    }

    #[test]
    fn bad_row_is_an_error() {
        assert!(build_sheet(&["Compilers:x:A".to_string()]).is_err());
    }

    #[test]
    fn report_flattens_summary() {
        let sheet = build_sheet(&["Compilers:4:B".to_string()]).unwrap();
        let json = serde_json::to_value(GpaReport::from_sheet(&sheet)).unwrap();
        assert_eq!(json["gpa"], "3.00");
        assert_eq!(json["total_credits"], 4.0);
        assert_eq!(json["entries"][0]["grade"], "B");
    }
}
