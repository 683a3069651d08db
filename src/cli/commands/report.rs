//! Report command handler
//!
//! Computes a CGPA and writes it, with the per-course breakdown and the
//! converted value, as a Markdown or HTML report.

use super::{collect_courses, resolve_grading};
use crate::args::{CourseArgs, GradingArgs};
use find_my_cgpa::config::Config;
use find_my_cgpa::core::engine::{compute_gpa_with, convert_gpa};
use find_my_cgpa::core::report::{reporter_for, ReportContext, ReportFormat};
use find_my_cgpa::{error, info};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

/// Default title when neither `--title` nor a course file is given
const DEFAULT_TITLE: &str = "cgpa";

/// Options for one report run
pub struct ReportOptions<'a> {
    /// Where the courses come from
    pub input: &'a CourseArgs,
    /// Scheme and scale selection
    pub grading: &'a GradingArgs,
    /// Explicit output path
    pub output: Option<&'a Path>,
    /// Format name (markdown, md, html)
    pub format: &'a str,
    /// Explicit report title
    pub title: Option<&'a str>,
}

/// Run the report command.
pub fn run(options: &ReportOptions, config: &Config) -> ExitCode {
    match generate_report(options, config) {
        Ok(path) => {
            println!("✓ Report generated: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Report generation failed: {err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn generate_report(options: &ReportOptions, config: &Config) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(options.format).map_err(|e| format!("✗ {e}"))?;
    let (scheme, scale) = resolve_grading(options.grading, config)?;
    let courses = collect_courses(options.input)?;

    let result = compute_gpa_with(&courses, scheme, scale).map_err(|e| format!("✗ {e}"))?;
    let conversion = convert_gpa(result.value, result.scale);

    let title = report_title(options.title, options.input.file.as_deref());
    let output_path = resolve_output_path(options.output, &title, format, config)?;

    let ctx = ReportContext::new(&title, &courses, scheme, &result, Some(&conversion));
    reporter_for(format)
        .generate(&ctx, &output_path)
        .map_err(|e| format!("✗ Failed to write {}: {e}", output_path.display()))?;

    info!(
        "Wrote {format} report for CGPA {} to {}",
        result.value,
        output_path.display()
    );
    Ok(output_path)
}

/// Pick the report title: explicit title, then course file stem, then a default
fn report_title(title: Option<&str>, file: Option<&Path>) -> String {
    title
        .map(str::to_string)
        .or_else(|| {
            file.and_then(|p| p.file_stem())
                .and_then(|stem| stem.to_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

/// Determine the output path, creating the reports directory when defaulting to it
fn resolve_output_path(
    output: Option<&Path>,
    title: &str,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(path) = output {
        return Ok(path.to_path_buf());
    }

    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;

    let stem: String = title
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    Ok(reports_dir.join(format!("{stem}_report.{}", format.extension())))
}
