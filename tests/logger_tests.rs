//! Integration tests for logger behavior.

use find_my_cgpa::logger::{level, set_level, set_level_from_str, Level};
use find_my_cgpa::{debug, error, info, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    let _ = level();
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_creates_missing_directories() {
    use find_my_cgpa::logger::init_file_logging;
    use tempfile::TempDir;

    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("logs").join("run.log");
    assert!(init_file_logging(&path));
    error!("written to file");
    assert!(path.exists());
}
