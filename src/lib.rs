//! Shared library for `FindMyCgpa`
//! Contains the grade table, the CGPA computation engine, and the ambient
//! configuration and logging used by the CLI.

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::engine::{compute_gpa, convert_gpa};
pub use crate::core::grade_table::lookup_grade_point;
pub use crate::core::{get_version, GpaError};
