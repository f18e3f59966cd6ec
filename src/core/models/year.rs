//! Year value object

use crate::core::error::PlannerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A study year within the degree plan grid (1 through 4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Year(u8);

impl Year {
    /// Smallest valid year
    pub const MIN: u8 = 1;
    /// Largest valid year
    pub const MAX: u8 = 4;

    /// Create a year from a raw number
    ///
    /// # Errors
    /// Returns `PlannerError::InvalidYear` if the number is outside 1-4
    pub fn new(year: u8) -> Result<Self, PlannerError> {
        if (Self::MIN..=Self::MAX).contains(&year) {
            Ok(Self(year))
        } else {
            Err(PlannerError::InvalidYear(year.to_string()))
        }
    }

    /// The underlying year number
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| PlannerError::InvalidYear(s.to_string()))
            .and_then(Self::new)
    }
}

impl TryFrom<u8> for Year {
    type Error = PlannerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u8 {
    fn from(year: Year) -> Self {
        year.0
    }
}
