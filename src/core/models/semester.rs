//! Semester value object

use crate::core::error::PlannerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A semester within a study year (1 and 2 are the regular semesters,
/// 3 and 4 are the special terms)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Semester(u8);

impl Semester {
    /// Smallest valid semester
    pub const MIN: u8 = 1;
    /// Largest valid semester
    pub const MAX: u8 = 4;

    /// Create a semester from a raw number
    ///
    /// # Errors
    /// Returns `PlannerError::InvalidSemester` if the number is outside 1-4
    pub fn new(semester: u8) -> Result<Self, PlannerError> {
        if (Self::MIN..=Self::MAX).contains(&semester) {
            Ok(Self(semester))
        } else {
            Err(PlannerError::InvalidSemester(semester.to_string()))
        }
    }

    /// The underlying semester number
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Semester {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| PlannerError::InvalidSemester(s.to_string()))
            .and_then(Self::new)
    }
}

impl TryFrom<u8> for Semester {
    type Error = PlannerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Semester> for u8 {
    fn from(semester: Semester) -> Self {
        semester.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_semesters() {
        for raw in 1..=4 {
            assert_eq!(Semester::new(raw).unwrap().value(), raw);
        }
    }

    #[test]
    fn test_invalid_semesters() {
        assert!(Semester::new(0).is_err());
        assert!(Semester::new(9).is_err());
    }

    #[test]
    fn test_semester_from_str() {
        assert_eq!("1".parse::<Semester>().unwrap(), Semester::new(1).unwrap());
        assert!("x".parse::<Semester>().is_err());
    }
}
