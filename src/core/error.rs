//! Error type shared by the computation engine and its input helpers

use thiserror::Error;

/// Errors raised by the CGPA engine, the course list, and course input parsing.
///
/// Unrecognized grades, negative credits, and a missing conversion source are
/// recovered where they occur and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GpaError {
    /// The course list carries no credit hours, so the weighted average is undefined.
    #[error("cannot compute CGPA: total credit hours is zero")]
    NoCredits,

    /// Credit or point totals grew past what an `f64` can hold.
    #[error("cannot compute CGPA: credit hours are too large")]
    Overflow,

    /// A course index outside the current list was addressed.
    #[error("no course at position {index} (list has {len} course(s))")]
    CourseIndex {
        /// Requested zero-based index
        index: usize,
        /// Current list length
        len: usize,
    },

    /// A scale other than 4.0 or 5.0 was requested.
    #[error("unsupported scale '{0}' (expected 4.0 or 5.0)")]
    InvalidScale(String),

    /// A grading scheme name that is not known.
    #[error("unknown grading scheme '{0}' (expected plus-minus or letter)")]
    UnknownScheme(String),

    /// A numeric value could not be parsed or is not finite.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// A course line could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// One-based line number within the input
        line: usize,
        /// Description of the problem
        message: String,
    },
}
