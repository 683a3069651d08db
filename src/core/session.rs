//! Caller-owned calculation worksheet
//!
//! A `Session` bundles what an interactive front end keeps between user
//! actions: the course list being edited, the active scale and scheme, the
//! current CGPA, and the last conversion. The engine functions stay pure; the
//! session only sequences them.

use crate::core::engine::{self, CgpaResult, Conversion};
use crate::core::grade_table::GradingScheme;
use crate::core::models::{CourseList, Scale};
use crate::core::GpaError;
use crate::debug;

/// In-memory worksheet for one interactive session
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    courses: CourseList,
    scheme: GradingScheme,
    scale: Scale,
    cgpa: Option<f64>,
    last_result: Option<CgpaResult>,
    last_conversion: Option<Conversion>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GradingScheme::default(), Scale::default())
    }
}

impl Session {
    /// Start a session with a single blank course row
    #[must_use]
    pub fn new(scheme: GradingScheme, scale: Scale) -> Self {
        Self {
            courses: CourseList::new(),
            scheme,
            scale,
            cgpa: None,
            last_result: None,
            last_conversion: None,
        }
    }

    /// Course list being edited
    #[must_use]
    pub const fn courses(&self) -> &CourseList {
        &self.courses
    }

    /// Mutable access to the course list
    pub fn courses_mut(&mut self) -> &mut CourseList {
        &mut self.courses
    }

    /// Active grading scheme
    #[must_use]
    pub const fn scheme(&self) -> GradingScheme {
        self.scheme
    }

    /// Active scale for the next calculation and conversion
    #[must_use]
    pub const fn scale(&self) -> Scale {
        self.scale
    }

    /// Select the grading scheme used by later calculations
    pub fn set_scheme(&mut self, scheme: GradingScheme) {
        self.scheme = scheme;
    }

    /// Select the scale used by later calculations and conversions
    ///
    /// Results already computed keep the scale they were computed on.
    pub fn set_scale(&mut self, scale: Scale) {
        self.scale = scale;
    }

    /// Current CGPA, either computed or entered directly
    #[must_use]
    pub const fn cgpa(&self) -> Option<f64> {
        self.cgpa
    }

    /// Enter a CGPA directly as the source for a conversion
    pub fn set_cgpa(&mut self, value: f64) {
        self.cgpa = Some(value);
    }

    /// Most recent successful calculation
    #[must_use]
    pub const fn last_result(&self) -> Option<&CgpaResult> {
        self.last_result.as_ref()
    }

    /// Most recent conversion
    #[must_use]
    pub const fn last_conversion(&self) -> Option<&Conversion> {
        self.last_conversion.as_ref()
    }

    /// Compute the CGPA of the current course list.
    ///
    /// On success the result becomes the current CGPA and the course list is
    /// reset to a single blank row. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`GpaError::NoCredits`] if the course list carries no credit hours.
    pub fn calculate(&mut self) -> Result<CgpaResult, GpaError> {
        let result = engine::compute_gpa_with(self.courses.entries(), self.scheme, self.scale)?;
        debug!(
            "Computed CGPA {} over {} credit(s) on the {} scale",
            result.value, result.total_credits, result.scale
        );

        self.cgpa = Some(result.value);
        self.last_result = Some(result);
        self.courses.reset();
        Ok(result)
    }

    /// Convert the current CGPA from the active scale to the other one.
    ///
    /// Returns `None` and records nothing when there is no CGPA yet.
    pub fn convert(&mut self) -> Option<Conversion> {
        let value = self.cgpa?;
        let conversion = engine::convert_gpa(value, self.scale);
        debug!(
            "Converted {value} from {} to {}: {}",
            conversion.from, conversion.to, conversion.value
        );
        self.last_conversion = Some(conversion);
        Some(conversion)
    }

    /// Clear the course list and every retained value
    pub fn reset(&mut self) {
        self.courses.reset();
        self.cgpa = None;
        self.last_result = None;
        self.last_conversion = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CourseEntry;

    fn filled_session() -> Session {
        let mut session = Session::default();
        let courses = session.courses_mut();
        courses.set_grade(0, "A").unwrap();
        courses.set_credits(0, 3.0).unwrap();
        courses.push(CourseEntry::new("B", 4.0));
        courses.push(CourseEntry::new("C", 2.0));
        session
    }

    #[test]
    fn test_calculate_resets_course_list() {
        let mut session = filled_session();
        let result = session.calculate().unwrap();

        assert_eq!(result.display(), "3.11");
        assert_eq!(session.cgpa(), Some(result.value));
        assert_eq!(session.courses(), &CourseList::new());
    }

    #[test]
    fn test_failed_calculation_keeps_state() {
        let mut session = Session::default();
        session.courses_mut().set_grade(0, "A").unwrap();
        let before = session.clone();

        assert_eq!(session.calculate(), Err(GpaError::NoCredits));
        assert_eq!(session, before);
    }

    #[test]
    fn test_convert_without_cgpa_is_noop() {
        let mut session = Session::default();
        assert!(session.convert().is_none());
        assert!(session.last_conversion().is_none());
    }

    #[test]
    fn test_convert_after_calculation() {
        let mut session = filled_session();
        session.calculate().unwrap();
        let conversion = session.convert().unwrap();
        assert_eq!(conversion.display(), "3.89");
        assert_eq!(conversion.to, Scale::Five);
    }

    #[test]
    fn test_scale_change_does_not_touch_result() {
        let mut session = filled_session();
        session.calculate().unwrap();
        session.set_scale(Scale::Five);
        assert_eq!(session.last_result().map(|r| r.scale), Some(Scale::Four));
    }

    #[test]
    fn test_entered_cgpa_converts_from_five() {
        let mut session = Session::new(GradingScheme::Letter, Scale::Five);
        session.set_cgpa(4.5);
        let conversion = session.convert().unwrap();
        assert!((conversion.value - 3.6).abs() < 1e-9);
        assert_eq!(conversion.to, Scale::Four);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = filled_session();
        session.calculate().unwrap();
        session.convert();
        session.reset();
        assert!(session.cgpa().is_none());
        assert!(session.last_result().is_none());
        assert!(session.last_conversion().is_none());
    }
}
