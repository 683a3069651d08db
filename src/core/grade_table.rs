//! Fixed grade-to-point lookup
//!
//! Every grading scheme declares its symbols once, each with a point value on
//! both the 4.0 and the 5.0 scale, so a (symbol, scale) pair inside a scheme
//! always resolves. Anything else resolves to `0.0`: an unrecognized grade
//! still carries its credit hours into the average, it just earns no points.

use crate::core::models::Scale;
use crate::core::GpaError;
use std::fmt;
use std::str::FromStr;

/// One declared grade symbol and its point value per scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeRow {
    /// Uppercase grade symbol (e.g., "B+")
    pub symbol: &'static str,
    /// Points on the 4.0 scale
    pub four: f64,
    /// Points on the 5.0 scale
    pub five: f64,
}

impl GradeRow {
    /// Point value on `scale`
    #[must_use]
    pub const fn points(&self, scale: Scale) -> f64 {
        match scale {
            Scale::Four => self.four,
            Scale::Five => self.five,
        }
    }
}

const fn row(symbol: &'static str, four: f64, five: f64) -> GradeRow {
    GradeRow { symbol, four, five }
}

/// Plus/minus letter grades. The 5.0 column is the 4.0 column under `x / 4 * 5`.
const PLUS_MINUS: &[GradeRow] = &[
    row("A", 4.0, 5.0),
    row("A-", 3.7, 4.625),
    row("B+", 3.3, 4.125),
    row("B", 3.0, 3.75),
    row("B-", 2.7, 3.375),
    row("C+", 2.3, 2.875),
    row("C", 2.0, 2.5),
    row("C-", 1.7, 2.125),
    row("D+", 1.3, 1.625),
    row("D", 1.0, 1.25),
    row("F", 0.0, 0.0),
];

/// Plain A-F letters, five-point style
const LETTER: &[GradeRow] = &[
    row("A", 4.0, 5.0),
    row("B", 3.0, 4.0),
    row("C", 2.0, 3.0),
    row("D", 1.0, 2.0),
    row("E", 0.0, 1.0),
    row("F", 0.0, 0.0),
];

/// Identifier of a grading scheme in the grade table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GradingScheme {
    /// A through F with plus/minus steps (A, A-, B+, ... F)
    #[default]
    PlusMinus,
    /// Plain letters A, B, C, D, E, F
    Letter,
}

impl GradingScheme {
    /// Every known scheme
    pub const ALL: [Self; 2] = [Self::PlusMinus, Self::Letter];

    /// Configuration name of the scheme
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PlusMinus => "plus-minus",
            Self::Letter => "letter",
        }
    }

    const fn rows(self) -> &'static [GradeRow] {
        match self {
            Self::PlusMinus => PLUS_MINUS,
            Self::Letter => LETTER,
        }
    }
}

impl FromStr for GradingScheme {
    type Err = GpaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plus-minus" | "plus_minus" | "plusminus" => Ok(Self::PlusMinus),
            "letter" | "letters" => Ok(Self::Letter),
            other => Err(GpaError::UnknownScheme(other.to_string())),
        }
    }
}

impl fmt::Display for GradingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Read-only grade table keyed by grading scheme
pub struct GradeTable;

impl GradeTable {
    /// Point value of `grade` on `scale` under `scheme`
    ///
    /// The grade is trimmed and uppercased first. Unknown grades yield `0.0`.
    #[must_use]
    pub fn lookup(scheme: GradingScheme, grade: &str, scale: Scale) -> f64 {
        let symbol = grade.trim().to_uppercase();
        scheme
            .rows()
            .iter()
            .find(|r| r.symbol == symbol)
            .map_or(0.0, |r| r.points(scale))
    }

    /// Whether `grade` is one of the symbols declared by `scheme`
    #[must_use]
    pub fn is_known(scheme: GradingScheme, grade: &str) -> bool {
        let symbol = grade.trim().to_uppercase();
        scheme.rows().iter().any(|r| r.symbol == symbol)
    }

    /// Declared rows of `scheme`, best grade first
    #[must_use]
    pub const fn rows(scheme: GradingScheme) -> &'static [GradeRow] {
        scheme.rows()
    }

    /// Declared symbols of `scheme`, best grade first
    #[must_use]
    pub fn symbols(scheme: GradingScheme) -> Vec<&'static str> {
        scheme.rows().iter().map(|r| r.symbol).collect()
    }
}

/// Point value of `grade` on `scale` under the default (plus/minus) scheme
#[must_use]
pub fn lookup_grade_point(grade: &str, scale: Scale) -> f64 {
    GradeTable::lookup(GradingScheme::default(), grade, scale)
}
