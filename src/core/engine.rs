//! Weighted CGPA computation and 4.0/5.0 scale conversion

use crate::core::grade_table::{GradeTable, GradingScheme};
use crate::core::models::{CourseEntry, Scale};
use crate::core::GpaError;

/// Decimal places kept on computed values
pub const INTERNAL_PRECISION: i32 = 4;

/// Round to [`INTERNAL_PRECISION`] decimal places
#[must_use]
pub fn round_internal(value: f64) -> f64 {
    let factor = 10f64.powi(INTERNAL_PRECISION);
    (value * factor).round() / factor
}

/// Render a value the way results are shown to a user (two decimals)
#[must_use]
pub fn format_display(value: f64) -> String {
    format!("{value:.2}")
}

/// Outcome of a CGPA computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CgpaResult {
    /// Weighted average, rounded to four decimals
    pub value: f64,
    /// Scale the average was computed on
    pub scale: Scale,
    /// Sum of credit hours
    pub total_credits: f64,
    /// Sum of grade points times credit hours
    pub total_points: f64,
}

impl CgpaResult {
    /// Two-decimal rendering of the value
    #[must_use]
    pub fn display(&self) -> String {
        format_display(self.value)
    }
}

/// Outcome of converting a CGPA to the other scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    /// Converted value, rounded to four decimals
    pub value: f64,
    /// Scale the input value was on
    pub from: Scale,
    /// Scale of `value`
    pub to: Scale,
}

impl Conversion {
    /// Two-decimal rendering of the converted value
    #[must_use]
    pub fn display(&self) -> String {
        format_display(self.value)
    }
}

/// Compute the credit-weighted CGPA under the default grading scheme.
///
/// # Errors
///
/// Returns [`GpaError::NoCredits`] if the courses carry no credit hours.
pub fn compute_gpa(courses: &[CourseEntry], scale: Scale) -> Result<CgpaResult, GpaError> {
    compute_gpa_with(courses, GradingScheme::default(), scale)
}

/// Compute the credit-weighted CGPA under `scheme`.
///
/// Unknown grades count zero points while their credit hours still count
/// toward the total.
///
/// # Errors
///
/// Returns [`GpaError::NoCredits`] if the courses carry no credit hours
/// (empty list, or every entry at zero credits), and [`GpaError::Overflow`]
/// if the totals are not finite.
pub fn compute_gpa_with(
    courses: &[CourseEntry],
    scheme: GradingScheme,
    scale: Scale,
) -> Result<CgpaResult, GpaError> {
    let total_credits: f64 = courses.iter().map(CourseEntry::credits).sum();
    if !total_credits.is_finite() {
        return Err(GpaError::Overflow);
    }
    if total_credits <= 0.0 {
        return Err(GpaError::NoCredits);
    }

    let total_points: f64 = courses
        .iter()
        .map(|c| GradeTable::lookup(scheme, &c.grade, scale) * c.credits())
        .sum();
    let value = total_points / total_credits;
    if !value.is_finite() {
        return Err(GpaError::Overflow);
    }

    Ok(CgpaResult {
        value: round_internal(value),
        scale,
        total_credits,
        total_points,
    })
}

/// Convert a CGPA from `from` to the other scale.
///
/// Values above the nominal maximum are transformed, not rejected.
#[must_use]
pub fn convert_gpa(value: f64, from: Scale) -> Conversion {
    let to = from.other();
    Conversion {
        value: round_internal(value / from.max() * to.max()),
        from,
        to,
    }
}
