//! Module code value object

use crate::core::error::PlannerError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Lexical pattern every code must match: two or three letters, four digits,
/// and an optional trailing letter.
static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}[0-9]{4}[A-Za-z]?$").expect("code pattern compiles")
});

/// A module's unique identifier in the catalogue (e.g., "CS2113T")
///
/// Codes are case-normalized to uppercase on construction and are immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Code(String);

impl Code {
    /// Create a new code from a raw string
    ///
    /// # Arguments
    /// * `raw` - Candidate code text
    ///
    /// # Errors
    /// Returns `PlannerError::InvalidCode` if the text does not match the
    /// code pattern
    pub fn new(raw: &str) -> Result<Self, PlannerError> {
        if Self::is_valid(raw) {
            Ok(Self(raw.to_ascii_uppercase()))
        } else {
            Err(PlannerError::InvalidCode(raw.to_string()))
        }
    }

    /// Returns true if a given string is a valid code
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        CODE_PATTERN.is_match(raw)
    }

    /// The normalized code text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Render a set of codes as a comma-separated list (e.g., "CS1010, CS2040C")
#[must_use]
pub fn join_codes(codes: &std::collections::BTreeSet<Code>) -> String {
    codes
        .iter()
        .map(Code::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Code {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Code {
    type Error = PlannerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.0
    }
}
