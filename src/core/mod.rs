//! Core module for the CGPA computation engine and its surroundings

pub mod config;
pub mod engine;
pub mod error;
pub mod grade_table;
pub mod input;
pub mod models;
pub mod report;
pub mod session;

pub use error::GpaError;

/// Returns the current version of the `FindMyCgpa` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
