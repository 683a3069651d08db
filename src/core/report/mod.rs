//! Report generation for CGPA calculations
//!
//! Renders a computed CGPA, its course breakdown, and an optional conversion
//! as Markdown or as a self-contained HTML page.

pub mod formats;

use crate::core::engine::{CgpaResult, Conversion};
use crate::core::grade_table::{GradeTable, GradingScheme};
use crate::core::models::CourseEntry;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Aggregates everything a report template needs from one calculation.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Report title (e.g., the name of the course file)
    pub title: &'a str,
    /// Courses the result was computed from
    pub courses: &'a [CourseEntry],
    /// Grading scheme the courses were looked up in
    pub scheme: GradingScheme,
    /// Computed CGPA
    pub result: &'a CgpaResult,
    /// Conversion of the result to the other scale, if requested
    pub conversion: Option<&'a Conversion>,
}

/// One course row as shown in a report
#[derive(Debug, Clone, PartialEq)]
pub struct CourseLine {
    /// Normalized grade symbol
    pub grade: String,
    /// Credit hours
    pub credits: f64,
    /// Grade points per credit hour
    pub points: f64,
    /// Points times credits
    pub weighted: f64,
    /// Whether the grade is declared in the scheme
    pub recognized: bool,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        title: &'a str,
        courses: &'a [CourseEntry],
        scheme: GradingScheme,
        result: &'a CgpaResult,
        conversion: Option<&'a Conversion>,
    ) -> Self {
        Self {
            title,
            courses,
            scheme,
            result,
            conversion,
        }
    }

    /// Per-course breakdown in input order
    #[must_use]
    pub fn course_lines(&self) -> Vec<CourseLine> {
        self.courses
            .iter()
            .map(|c| {
                let grade = c.normalized_grade();
                let points = GradeTable::lookup(self.scheme, &grade, self.result.scale);
                CourseLine {
                    recognized: GradeTable::is_known(self.scheme, &grade),
                    grade,
                    credits: c.credits(),
                    points,
                    weighted: points * c.credits(),
                }
            })
            .collect()
    }

    /// Number of courses whose grade was not recognized
    #[must_use]
    pub fn unrecognized_count(&self) -> usize {
        self.course_lines().iter().filter(|l| !l.recognized).count()
    }

    /// Conversion line for templates, or `N/A`
    #[must_use]
    pub fn conversion_summary(&self) -> String {
        self.conversion.map_or_else(
            || "N/A".to_string(),
            |c| format!("{} on the {} scale", c.display(), c.to),
        )
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Reporter for a given format
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::{compute_gpa, convert_gpa};
    use crate::core::models::Scale;

    #[test]
    fn test_course_lines() {
        let courses = vec![CourseEntry::new("a", 3.0), CourseEntry::new("X", 1.0)];
        let result = compute_gpa(&courses, Scale::Four).unwrap();
        let ctx = ReportContext::new("t", &courses, GradingScheme::PlusMinus, &result, None);

        let lines = ctx.course_lines();
        assert_eq!(lines[0].grade, "A");
        assert!((lines[0].weighted - 12.0).abs() < 1e-9);
        assert!(!lines[1].recognized);
        assert_eq!(ctx.unrecognized_count(), 1);
        assert_eq!(ctx.conversion_summary(), "N/A");
    }

    #[test]
    fn test_conversion_summary() {
        let courses = vec![CourseEntry::new("B", 3.0)];
        let result = compute_gpa(&courses, Scale::Four).unwrap();
        let conversion = convert_gpa(result.value, result.scale);
        let ctx = ReportContext::new(
            "t",
            &courses,
            GradingScheme::PlusMinus,
            &result,
            Some(&conversion),
        );
        assert_eq!(ctx.conversion_summary(), "3.75 on the 5.0 scale");
    }
}
