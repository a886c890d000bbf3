use desk_core::enums::LetterGrade;

/// Parse a credit count: a finite, non-negative number.
pub fn parse_credits(raw: &str) -> Result<f64, String> {
    let credits = raw
        .trim()
        .parse::<f64>()
        .map_err(|error| format!("invalid credits '{raw}': {error}"))?;

    if !credits.is_finite() || credits < 0.0 {
        return Err(format!("invalid credits '{raw}': must be a non-negative number"));
    }
    Ok(credits)
}

/// One course row from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseRow {
    pub course: String,
    pub credits: f64,
    pub grade: LetterGrade,
}

/// Parse `NAME:CREDITS:GRADE`. The name may itself contain colons.
pub fn parse_course_row(raw: &str) -> anyhow::Result<CourseRow> {
    let mut parts = raw.rsplitn(3, ':');
    let (Some(grade), Some(credits), Some(course)) = (parts.next(), parts.next(), parts.next())
    else {
        anyhow::bail!("invalid course '{raw}': expected NAME:CREDITS:GRADE");
    };

    let grade = grade
        .parse::<LetterGrade>()
        .map_err(|error| anyhow::anyhow!("invalid course '{raw}': {error}"))?;
    let credits = parse_credits(credits).map_err(anyhow::Error::msg)?;

    Ok(CourseRow {
        course: course.trim().to_string(),
        credits,
        grade,
    })
}

#[cfg(test)]
mod tests {
    use desk_core::enums::LetterGrade;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{CourseRow, parse_course_row, parse_credits};

    #[test]
    fn parses_course_row() {
        let row = parse_course_row("Compilers:4:b+").expect("row should parse");
        assert_eq!(
            row,
            CourseRow {
                course: "Compilers".to_string(),
                credits: 4.0,
                grade: LetterGrade::BPlus,
            }
        );
    }

    #[test]
    fn course_name_keeps_inner_colons() {
        let row = parse_course_row("CS 101: Intro:3:A").expect("row should parse");
        assert_eq!(row.course, "CS 101: Intro");
    }

    #[rstest]
    #[case("Compilers:4")]
    #[case("Compilers:four:A")]
    #[case("Compilers:4:E")]
    #[case("Compilers:-1:A")]
    fn rejects_malformed_rows(#[case] raw: &str) {
        assert!(parse_course_row(raw).is_err());
    }

    #[rstest]
    #[case("0", 0.0)]
    #[case(" 3.5 ", 3.5)]
    fn accepts_non_negative_credits(#[case] raw: &str, #[case] want: f64) {
        assert!((parse_credits(raw).unwrap() - want).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case("-0.5")]
    #[case("NaN")]
    #[case("inf")]
    fn rejects_bad_credits(#[case] raw: &str) {
        let err = parse_credits(raw).unwrap_err();
        assert!(err.contains("invalid credits"));
    }
}
