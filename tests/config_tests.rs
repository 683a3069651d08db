//! Integration tests for configuration management

use find_my_cgpa::config::{Config, ConfigOverrides};
use find_my_cgpa::core::grade_table::GradingScheme;
use find_my_cgpa::core::models::Scale;
use find_my_cgpa::GpaError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert_eq!(config.grading_scheme(), Ok(GradingScheme::PlusMinus));
    assert_eq!(config.scale(), Ok(Scale::Four));
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[grading]
scheme = "letter"
scale = "5.0"

[paths]
reports_dir = "./reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.grading_scheme(), Ok(GradingScheme::Letter));
    assert_eq!(config.scale(), Ok(Scale::Five));
    assert_eq!(config.paths.reports_dir, "./reports");
}

#[test]
fn test_config_from_toml_partial() {
    // Missing sections and fields use defaults
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.grading.scale, "");
    assert_eq!(config.scale(), Ok(Scale::Four));
}

#[test]
fn test_invalid_grading_values_are_reported() {
    let toml_str = r#"
[logging]

[grading]
scheme = "ects"
scale = "10"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");
    assert_eq!(
        config.grading_scheme(),
        Err(GpaError::UnknownScheme("ects".to_string()))
    );
    assert_eq!(config.scale(), Err(GpaError::InvalidScale("10".to_string())));
}

#[test]
fn test_invalid_scale_override_is_reported() {
    let mut config = Config::from_defaults();
    config.apply_overrides(&ConfigOverrides {
        scale: Some("7".to_string()),
        ..Default::default()
    });
    assert_eq!(config.scale(), Err(GpaError::InvalidScale("7".to_string())));
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$FIND_MY_CGPA/test.log"

[paths]
reports_dir = "$FIND_MY_CGPA/reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("findmycgpa"));
    assert!(!config.logging.file.contains("$FIND_MY_CGPA"));
    assert!(config.paths.reports_dir.ends_with("reports"));
    assert!(!config.paths.reports_dir.contains("$FIND_MY_CGPA"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert!(config.logging.verbose);
    assert!(config.set("verbose", "maybe").is_err());

    // Scale and scheme are stored canonically
    config.set("scale", "5").expect("Failed to set scale");
    assert_eq!(config.get("scale").unwrap(), "5.0");
    config.set("scheme", "LETTER").expect("Failed to set scheme");
    assert_eq!(config.get("scheme").unwrap(), "letter");
    assert!(config.set("scale", "10").is_err());
    assert!(config.set("scheme", "ects").is_err());

    config
        .set("reports-dir", "/tmp/reports")
        .expect("Failed to set reports dir");
    assert_eq!(config.get("reports_dir").unwrap(), "/tmp/reports");

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("scale", "5.0").expect("Failed to set scale");
    assert_eq!(config.scale(), Ok(Scale::Five));

    config
        .unset("scale", &defaults)
        .expect("Failed to unset scale");
    assert_eq!(config.grading.scale, defaults.grading.scale);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("scale", "5.0").expect("Failed to set scale");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded_config = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded_config.logging.level, "info");
    assert_eq!(loaded_config.scale(), Ok(Scale::Five));
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        scheme: Some("letter".to_string()),
        scale: Some("5.0".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.grading_scheme(), Ok(GradingScheme::Letter));
    assert_eq!(config.scale(), Ok(Scale::Five));
    assert_eq!(config.paths.reports_dir, "./custom_reports");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    let overrides = ConfigOverrides {
        scale: Some("5.0".to_string()),
        ..Default::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.scale(), Ok(Scale::Five));
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.grading.scheme, defaults.grading.scheme);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[grading]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("scale"));
    assert!(display_str.contains("reports_dir"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(
        changed,
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.grading.scale, defaults.grading.scale);
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
    assert_eq!(config.logging.level, "error");
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[grading]
scheme = "letter"
scale = "5.0"

[paths]
reports_dir = "/my/reports"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    assert!(!config.merge_defaults(&defaults));
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.grading.scheme, "letter");
    assert_eq!(config.paths.reports_dir, "/my/reports");
}

#[test]
fn test_get_app_dir() {
    let dir = Config::get_app_dir();

    assert!(dir.to_string_lossy().contains("findmycgpa"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
