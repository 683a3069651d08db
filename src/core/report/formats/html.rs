//! HTML report generator
//!
//! Generates a single-page CGPA report. The generated HTML is self-contained
//! with embedded CSS.

use crate::core::get_version;
use crate::core::report::formats::markdown::display_grade;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{title}}", &escape_html(ctx.title));
        output = output.replace("{{scheme}}", ctx.scheme.name());
        output = output.replace("{{scale}}", &ctx.result.scale.to_string());
        output = output.replace("{{course_count}}", &ctx.courses.len().to_string());
        output = output.replace(
            "{{total_credits}}",
            &format!("{:.1}", ctx.result.total_credits),
        );
        output = output.replace("{{cgpa}}", &ctx.result.display());
        output = output.replace("{{conversion_block}}", &Self::generate_conversion(ctx));
        output = output.replace("{{course_rows}}", &Self::generate_course_rows(ctx));
        output = output.replace("{{version}}", get_version());

        output
    }

    fn generate_conversion(ctx: &ReportContext) -> String {
        ctx.conversion.map_or_else(String::new, |c| {
            format!(
                "<div class=\"result\">Converted CGPA: {} ({} scale)</div>",
                c.display(),
                c.to
            )
        })
    }

    /// Generate table rows for each course
    fn generate_course_rows(ctx: &ReportContext) -> String {
        let mut html = String::new();

        for (idx, line) in ctx.course_lines().iter().enumerate() {
            let class = if line.recognized {
                ""
            } else {
                " class=\"unrecognized\""
            };
            html.push_str(&format!(
                "      <tr{class}><td>{}</td><td>{}</td><td class=\"num\">{:.1}</td><td class=\"num\">{:.2}</td><td class=\"num\">{:.2}</td></tr>\n",
                idx + 1,
                escape_html(display_grade(&line.grade)),
                line.credits,
                line.points,
                line.weighted
            ));
        }

        html
    }
}

/// Escape text for safe inclusion in HTML
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
