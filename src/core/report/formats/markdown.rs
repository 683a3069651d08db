//! Markdown report generator
//!
//! Generates CGPA reports in Markdown format. These render well in GitHub,
//! GitLab, and VS Code.

use crate::core::engine::format_display;
use crate::core::get_version;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{title}}", ctx.title);
        output = output.replace("{{scheme}}", ctx.scheme.name());
        output = output.replace("{{scale}}", &ctx.result.scale.to_string());
        output = output.replace("{{course_count}}", &ctx.courses.len().to_string());
        output = output.replace(
            "{{total_credits}}",
            &format!("{:.1}", ctx.result.total_credits),
        );
        output = output.replace(
            "{{total_points}}",
            &format_display(ctx.result.total_points),
        );
        output = output.replace("{{cgpa}}", &ctx.result.display());
        output = output.replace("{{conversion}}", &ctx.conversion_summary());
        output = output.replace("{{course_table}}", &Self::generate_course_table(ctx));
        output = output.replace("{{warnings}}", &Self::generate_warnings(ctx));
        output = output.replace("{{version}}", get_version());

        output
    }

    /// Generate the per-course table
    fn generate_course_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str("| # | Grade | Credits | Points | Weighted |\n");
        table.push_str("|---|---|---|---|---|\n");

        for (idx, line) in ctx.course_lines().iter().enumerate() {
            let grade = if line.recognized {
                line.grade.clone()
            } else {
                format!("{} ⚠️", display_grade(&line.grade))
            };
            table.push_str(&format!(
                "| {} | {grade} | {:.1} | {:.2} | {:.2} |\n",
                idx + 1,
                line.credits,
                line.points,
                line.weighted
            ));
        }

        table
    }

    /// Note unrecognized grades, which count as zero points
    fn generate_warnings(ctx: &ReportContext) -> String {
        match ctx.unrecognized_count() {
            0 => String::new(),
            n => format!(
                "\n> ⚠️ {n} grade(s) not in the {} scheme were counted as 0.0 points.\n",
                ctx.scheme
            ),
        }
    }
}

/// Blank grades still need a visible cell
pub(crate) fn display_grade(grade: &str) -> &str {
    if grade.is_empty() {
        "(blank)"
    } else {
        grade
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
