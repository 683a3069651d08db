//! Course entry and course list models

use crate::core::GpaError;
use serde::{Deserialize, Deserializer, Serialize};

/// A single (grade, credit hours) row
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CourseEntry {
    /// Letter grade as entered (e.g., "A", "b+"); normalized only at lookup time
    pub grade: String,

    /// Credit hours (can be fractional, never negative)
    #[serde(deserialize_with = "deserialize_credits")]
    credits: f64,
}

impl CourseEntry {
    /// Create a new course entry
    ///
    /// Negative or NaN credit hours are stored as zero.
    #[must_use]
    pub fn new(grade: impl Into<String>, credits: f64) -> Self {
        Self {
            grade: grade.into(),
            credits: clamp_credits(credits),
        }
    }

    /// Create an empty row (no grade, zero credits)
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Replace the grade
    pub fn set_grade(&mut self, grade: impl Into<String>) {
        self.grade = grade.into();
    }

    /// Credit hours, never negative
    #[must_use]
    pub const fn credits(&self) -> f64 {
        self.credits
    }

    /// Replace the credit hours, clamping negatives to zero
    pub fn set_credits(&mut self, credits: f64) {
        self.credits = clamp_credits(credits);
    }

    /// Grade symbol as used for table lookups
    #[must_use]
    pub fn normalized_grade(&self) -> String {
        self.grade.trim().to_uppercase()
    }
}

/// `f64::max` returns the non-NaN operand, so NaN also lands on zero.
fn clamp_credits(credits: f64) -> f64 {
    credits.max(0.0)
}

fn deserialize_credits<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(clamp_credits)
}

/// Ordered list of course entries owned by the caller
///
/// A fresh or reset list holds a single blank entry, ready for input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseList {
    entries: Vec<CourseEntry>,
}

impl Default for CourseList {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseList {
    /// Create a list containing one blank entry
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: vec![CourseEntry::blank()],
        }
    }

    /// Create a list from existing entries (may be empty)
    #[must_use]
    pub const fn from_entries(entries: Vec<CourseEntry>) -> Self {
        Self { entries }
    }

    /// All entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[CourseEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a blank entry
    pub fn add_blank(&mut self) {
        self.entries.push(CourseEntry::blank());
    }

    /// Append an entry
    pub fn push(&mut self, entry: CourseEntry) {
        self.entries.push(entry);
    }

    /// Edit the grade of the entry at `index`
    ///
    /// # Errors
    /// Returns [`GpaError::CourseIndex`] if `index` is out of range.
    pub fn set_grade(&mut self, index: usize, grade: &str) -> Result<(), GpaError> {
        self.get_mut(index)?.set_grade(grade);
        Ok(())
    }

    /// Edit the credit hours of the entry at `index`, clamping negatives to zero
    ///
    /// # Errors
    /// Returns [`GpaError::CourseIndex`] if `index` is out of range.
    pub fn set_credits(&mut self, index: usize, credits: f64) -> Result<(), GpaError> {
        self.get_mut(index)?.set_credits(credits);
        Ok(())
    }

    /// Remove and return the entry at `index`
    ///
    /// # Errors
    /// Returns [`GpaError::CourseIndex`] if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Result<CourseEntry, GpaError> {
        let len = self.entries.len();
        if index >= len {
            return Err(GpaError::CourseIndex { index, len });
        }
        Ok(self.entries.remove(index))
    }

    /// Discard every entry and start over with a single blank one
    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries.push(CourseEntry::blank());
    }

    /// Sum of credit hours over all entries
    #[must_use]
    pub fn total_credits(&self) -> f64 {
        self.entries.iter().map(CourseEntry::credits).sum()
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut CourseEntry, GpaError> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(GpaError::CourseIndex { index, len })
    }
}

impl From<Vec<CourseEntry>> for CourseList {
    fn from(entries: Vec<CourseEntry>) -> Self {
        Self::from_entries(entries)
    }
}
