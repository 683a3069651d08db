//! Course input parsing
//!
//! Courses come either as `GRADE:CREDITS` arguments or as a plain-text file
//! with one course per line:
//!
//! ```text
//! # fall term
//! grade,credits
//! A,3
//! B+ 4
//! c:2
//! ```
//!
//! Fields may be separated by a comma, a colon, or whitespace. Blank lines and
//! `#` comments are skipped, as is a leading `grade,credits` header.

use crate::core::models::CourseEntry;
use crate::core::GpaError;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parse a numeric value, rejecting NaN and infinities
///
/// # Errors
/// Returns [`GpaError::InvalidNumber`] if `raw` is not a finite number.
pub fn parse_number(raw: &str) -> Result<f64, GpaError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GpaError::InvalidNumber(trimmed.to_string()))
}

/// Parse a single `GRADE:CREDITS` course specification
///
/// Negative credits are clamped to zero, as with any other entry.
///
/// # Errors
/// Returns [`GpaError::Parse`] (line 1) if the grade or credits are missing or
/// the credits are not a number.
pub fn parse_course_spec(spec: &str) -> Result<CourseEntry, GpaError> {
    parse_course_line(spec, 1)
}

/// Parse course lines from text
///
/// # Errors
/// Returns [`GpaError::Parse`] carrying the one-based line number of the
/// first malformed line.
pub fn parse_courses(content: &str) -> Result<Vec<CourseEntry>, GpaError> {
    let mut courses = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }
        if courses.is_empty() && is_header(line) {
            continue;
        }
        courses.push(parse_course_line(line, idx + 1)?);
    }

    Ok(courses)
}

/// Load course lines from a file
///
/// # Errors
/// Returns an error if the file cannot be read or a line cannot be parsed.
pub fn load_courses<P: AsRef<Path>>(path: P) -> Result<Vec<CourseEntry>, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_courses(&content)?)
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(before, _)| before)
}

fn is_header(line: &str) -> bool {
    let fields = split_fields(line);
    fields.len() == 2
        && fields[0].eq_ignore_ascii_case("grade")
        && fields[1].to_ascii_lowercase().starts_with("credit")
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split(|c: char| c == ',' || c == ':' || c.is_whitespace())
        .filter(|f| !f.is_empty())
        .collect()
}

fn parse_course_line(line: &str, line_no: usize) -> Result<CourseEntry, GpaError> {
    let parse_error = |message: String| GpaError::Parse {
        line: line_no,
        message,
    };

    match split_fields(line).as_slice() {
        [grade, credits] => {
            let credits =
                parse_number(credits).map_err(|e| parse_error(format!("{e} for credits")))?;
            Ok(CourseEntry::new(*grade, credits))
        }
        [] | [_] => Err(parse_error(format!(
            "expected GRADE and CREDITS, got '{}'",
            line.trim()
        ))),
        _ => Err(parse_error(format!(
            "too many fields in '{}'",
            line.trim()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_course_spec() {
        let entry = parse_course_spec("B+:4").unwrap();
        assert_eq!(entry, CourseEntry::new("B+", 4.0));

        let entry = parse_course_spec("a:1.5").unwrap();
        assert_eq!(entry.grade, "a");
        assert!((entry.credits() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_course_spec_clamps_negative() {
        let entry = parse_course_spec("A:-3").unwrap();
        assert!(entry.credits().abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_course_spec_errors() {
        assert!(matches!(
            parse_course_spec("A"),
            Err(GpaError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            parse_course_spec("A:three"),
            Err(GpaError::Parse { line: 1, .. })
        ));
        assert!(parse_course_spec("A:NaN").is_err());
        assert!(parse_course_spec("A:3:4").is_err());
    }

    #[test]
    fn test_parse_courses_mixed_separators() {
        let content = "# fall term\ngrade,credits\nA,3\nB+ 4\n\nc:2  # lab\n";
        let courses = parse_courses(content).unwrap();
        assert_eq!(
            courses,
            vec![
                CourseEntry::new("A", 3.0),
                CourseEntry::new("B+", 4.0),
                CourseEntry::new("c", 2.0),
            ]
        );
    }

    #[test]
    fn test_parse_courses_reports_line_number() {
        let err = parse_courses("A,3\n\nB,four\n").unwrap_err();
        assert!(matches!(err, GpaError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_parse_courses_empty() {
        assert!(parse_courses("\n# nothing\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_number() {
        assert!((parse_number(" 3.5 ").unwrap() - 3.5).abs() < f64::EPSILON);
        assert_eq!(
            parse_number("inf"),
            Err(GpaError::InvalidNumber("inf".to_string()))
        );
    }
}
