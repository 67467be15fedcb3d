use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MIN: i64 = 10;
pub const DEFAULT_MAX: i64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoundsError {
    #[error("minimum {min} must be lower than maximum {max}")]
    Inverted { min: i64, max: i64 },
}

/// Inclusive range operands are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl Bounds {
    pub fn new(min: i64, max: i64) -> Result<Self, BoundsError> {
        let bounds = Self::unchecked(min, max);
        if bounds.is_valid() {
            Ok(bounds)
        } else {
            Err(BoundsError::Inverted { min, max })
        }
    }

    /// Skips the `min < max` check. Generation still works on the result:
    /// see `ExerciseModel` for how equal and inverted pairs behave.
    pub fn unchecked(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.min < self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let bounds = Bounds::default();
        assert_eq!(bounds.min, 10);
        assert_eq!(bounds.max, 200);
        assert!(bounds.is_valid());
    }

    #[test]
    fn test_new_rejects_equal_and_inverted() {
        assert_eq!(
            Bounds::new(5, 5),
            Err(BoundsError::Inverted { min: 5, max: 5 })
        );
        assert_eq!(
            Bounds::new(9, -1),
            Err(BoundsError::Inverted { min: 9, max: -1 })
        );
        assert!(Bounds::new(-5, 5).is_ok());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let bounds = Bounds::new(50, 60).unwrap();
        assert!(bounds.contains(50));
        assert!(bounds.contains(60));
        assert!(!bounds.contains(49));
        assert!(!bounds.contains(61));
    }

    #[test]
    fn test_error_message() {
        let err = Bounds::new(7, 3).unwrap_err();
        assert_eq!(err.to_string(), "minimum 7 must be lower than maximum 3");
    }
}
