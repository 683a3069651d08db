//! Convert command handler

use find_my_cgpa::config::Config;
use find_my_cgpa::core::engine::convert_gpa;
use find_my_cgpa::core::input::parse_number;
use find_my_cgpa::core::models::Scale;
use find_my_cgpa::{error, info};
use std::process::ExitCode;

/// Run the convert command.
pub fn run(value: &str, from: Option<&str>, config: &Config) -> ExitCode {
    match convert(value, from, config) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Conversion failed: {err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn convert(value: &str, from: Option<&str>, config: &Config) -> Result<String, String> {
    let cgpa = parse_number(value).map_err(|e| format!("✗ {e}"))?;
    let from: Scale = match from {
        Some(raw) => raw.parse::<Scale>().map_err(|e| format!("✗ {e}"))?,
        None => config
            .scale()
            .map_err(|e| format!("✗ Invalid config `scale`: {e}"))?,
    };

    let conversion = convert_gpa(cgpa, from);
    info!(
        "Converted {cgpa} from {} to {}: {}",
        conversion.from, conversion.to, conversion.value
    );
    Ok(format!(
        "Converted CGPA: {} ({} scale)",
        conversion.display(),
        conversion.to
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_from_four() {
        let config = Config::default();
        assert_eq!(
            convert("3.1111", Some("4.0"), &config),
            Ok("Converted CGPA: 3.89 (5.0 scale)".to_string())
        );
    }

    #[test]
    fn test_convert_uses_config_scale() {
        let mut config = Config::default();
        config.grading.scale = "5.0".to_string();
        assert_eq!(
            convert("4.5", None, &config),
            Ok("Converted CGPA: 3.60 (4.0 scale)".to_string())
        );
    }

    #[test]
    fn test_convert_rejects_garbage() {
        let config = Config::default();
        assert!(convert("abc", None, &config).is_err());
        assert!(convert("3.0", Some("10"), &config).is_err());
    }

    #[test]
    fn test_convert_rejects_invalid_config_scale() {
        let mut config = Config::default();
        config.grading.scale = "7".to_string();
        let err = convert("3.0", None, &config).unwrap_err();
        assert!(err.contains("Invalid config `scale`"), "{err}");
    }
}
