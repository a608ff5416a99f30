//! Score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A category or total score between 0.0 and 100.0 inclusive.
///
/// Construction clamps into range and collapses NaN to zero, so every
/// `Score` in the system is finite and safely comparable.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    /// Zero points.
    pub const ZERO: Self = Self(0.0);

    /// Full marks.
    pub const HUNDRED: Self = Self(100.0);

    /// Creates a new Score, clamping to the 0-100 range.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> f64 {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
