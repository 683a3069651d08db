//! CLI command handlers for `FindMyCgpa`.
//!
//! Each command is implemented in its own submodule. The helpers here turn
//! shared arguments into engine inputs.

pub mod calculate;
pub mod config;
pub mod convert;
pub mod grades;
pub mod report;
pub mod shell;

use crate::args::{CourseArgs, GradingArgs};
use find_my_cgpa::config::Config;
use find_my_cgpa::core::grade_table::GradingScheme;
use find_my_cgpa::core::input::{load_courses, parse_course_spec};
use find_my_cgpa::core::models::{CourseEntry, Scale};
use find_my_cgpa::debug;

/// Resolve the scheme and scale for a command: CLI flags first, then config.
pub fn resolve_grading(args: &GradingArgs, config: &Config) -> Result<(GradingScheme, Scale), String> {
    let scheme = match &args.scheme {
        Some(raw) => raw.parse::<GradingScheme>().map_err(|e| format!("✗ {e}"))?,
        None => config
            .grading_scheme()
            .map_err(|e| format!("✗ Invalid config `scheme`: {e}"))?,
    };
    let scale = match &args.scale {
        Some(raw) => raw.parse::<Scale>().map_err(|e| format!("✗ {e}"))?,
        None => config
            .scale()
            .map_err(|e| format!("✗ Invalid config `scale`: {e}"))?,
    };
    debug!("Using grading scheme {scheme} on the {scale} scale");
    Ok((scheme, scale))
}

/// Gather courses from `--file` (first) and positional `GRADE:CREDITS` arguments.
pub fn collect_courses(args: &CourseArgs) -> Result<Vec<CourseEntry>, String> {
    let mut courses = Vec::new();

    if let Some(path) = &args.file {
        let loaded = load_courses(path)
            .map_err(|e| format!("✗ Failed to load courses from {}: {e}", path.display()))?;
        debug!("Loaded {} course(s) from {}", loaded.len(), path.display());
        courses.extend(loaded);
    }

    for spec in &args.courses {
        let entry = parse_course_spec(spec).map_err(|e| format!("✗ Invalid course '{spec}': {e}"))?;
        courses.push(entry);
    }

    Ok(courses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use find_my_cgpa::config::ConfigOverrides;

    #[test]
    fn test_resolve_grading_flags_win() {
        let args = GradingArgs {
            scale: Some("5".to_string()),
            scheme: Some("letter".to_string()),
        };
        assert_eq!(
            resolve_grading(&args, &Config::default()),
            Ok((GradingScheme::Letter, Scale::Five))
        );
    }

    #[test]
    fn test_resolve_grading_rejects_bad_override() {
        let mut config = Config::default();
        config.apply_overrides(&ConfigOverrides {
            scale: Some("7".to_string()),
            ..Default::default()
        });
        let err = resolve_grading(&GradingArgs::default(), &config).unwrap_err();
        assert!(err.contains("unsupported scale '7'"), "{err}");

        // An explicit flag still works around a broken config value
        let args = GradingArgs {
            scale: Some("4.0".to_string()),
            scheme: None,
        };
        assert_eq!(
            resolve_grading(&args, &config),
            Ok((GradingScheme::PlusMinus, Scale::Four))
        );
    }
}
