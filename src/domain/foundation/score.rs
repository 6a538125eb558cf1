//! Score value object for completed event attempts.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A non-negative, finite score awarded on event completion.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Zero points.
    pub const ZERO: Self = Self(0.0);

    /// Creates a Score, returning error if negative or not finite.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(
                "score",
                "must be a finite number",
            ));
        }
        if value < 0.0 {
            return Err(ValidationError::out_of_range(
                "score",
                0.0,
                f64::MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the score as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_accepts_zero_and_positive_values() {
        assert_eq!(Score::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Score::new(10.5).unwrap().value(), 10.5);
    }

    #[test]
    fn score_rejects_negative_values() {
        let result = Score::new(-1.0);
        assert!(matches!(
            result,
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn score_rejects_nan_and_infinity() {
        assert!(Score::new(f64::NAN).is_err());
        assert!(Score::new(f64::INFINITY).is_err());
    }

    #[test]
    fn score_serializes_transparently() {
        let score = Score::new(42.0).unwrap();
        assert_eq!(serde_json::to_string(&score).unwrap(), "42.0");
    }
}
