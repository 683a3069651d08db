//! Grades command handler

use super::resolve_grading;
use crate::args::GradingArgs;
use find_my_cgpa::config::Config;
use find_my_cgpa::core::grade_table::{GradeTable, GradingScheme};
use find_my_cgpa::core::models::Scale;
use std::process::ExitCode;

/// Run the grades command, listing every symbol of the scheme.
pub fn run(grading: &GradingArgs, config: &Config) -> ExitCode {
    match resolve_grading(grading, config) {
        Ok((scheme, scale)) => {
            print!("{}", render_table(scheme, scale));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Format the grade table of `scheme` on `scale`
pub fn render_table(scheme: GradingScheme, scale: Scale) -> String {
    let header = format!(
        "Grading scheme: {scheme} ({scale} scale)\n{:<6} {:>6}\n",
        "Grade", "Points"
    );
    let rows: String = GradeTable::rows(scheme)
        .iter()
        .map(|row| format!("{:<6} {:>6.3}\n", row.symbol, row.points(scale)))
        .collect();
    header + &rows
}
