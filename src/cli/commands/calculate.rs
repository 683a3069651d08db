//! Calculate command handler

use super::{collect_courses, resolve_grading};
use crate::args::{CourseArgs, GradingArgs};
use find_my_cgpa::config::Config;
use find_my_cgpa::core::engine::{compute_gpa_with, convert_gpa};
use find_my_cgpa::core::grade_table::GradeTable;
use find_my_cgpa::{error, info, verbose, warn};
use std::process::ExitCode;

/// Run the calculate command.
///
/// Prints the CGPA, and the converted value when `convert` is set. Any
/// failure is reported on stderr and logged.
pub fn run(input: &CourseArgs, grading: &GradingArgs, convert: bool, config: &Config) -> ExitCode {
    match calculate(input, grading, convert, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Calculation failed: {err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn calculate(
    input: &CourseArgs,
    grading: &GradingArgs,
    convert: bool,
    config: &Config,
) -> Result<(), String> {
    let (scheme, scale) = resolve_grading(grading, config)?;
    let courses = collect_courses(input)?;

    for course in courses.iter().filter(|c| !GradeTable::is_known(scheme, &c.grade)) {
        warn!(
            "Grade '{}' is not in the {scheme} scheme; counting it as 0.0 points",
            course.grade
        );
    }

    let result = compute_gpa_with(&courses, scheme, scale).map_err(|e| format!("✗ {e}"))?;
    info!(
        "Computed CGPA {} from {} course(s) on the {scale} scale",
        result.value,
        courses.len()
    );
    verbose!(
        "{} course(s), {:.1} credit(s), {:.2} grade point(s)",
        courses.len(),
        result.total_credits,
        result.total_points
    );

    println!("Your CGPA: {}", result.display());

    if convert {
        let conversion = convert_gpa(result.value, result.scale);
        println!(
            "Converted CGPA: {} ({} scale)",
            conversion.display(),
            conversion.to
        );
    }

    Ok(())
}
