//! Grading scale model

use crate::core::GpaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum attainable grade point of a grading scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Scale {
    /// The 4.0 scale
    #[default]
    #[serde(rename = "4.0")]
    Four,
    /// The 5.0 scale
    #[serde(rename = "5.0")]
    Five,
}

impl Scale {
    /// Both supported scales, lowest first
    pub const ALL: [Self; 2] = [Self::Four, Self::Five];

    /// Highest grade point on this scale
    #[must_use]
    pub const fn max(self) -> f64 {
        match self {
            Self::Four => 4.0,
            Self::Five => 5.0,
        }
    }

    /// The scale a conversion from this one targets
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Four => Self::Five,
            Self::Five => Self::Four,
        }
    }
}

impl FromStr for Scale {
    type Err = GpaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "4" | "4.0" | "4.00" => Ok(Self::Four),
            "5" | "5.0" | "5.00" => Ok(Self::Five),
            other => Err(GpaError::InvalidScale(other.to_string())),
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.max())
    }
}
