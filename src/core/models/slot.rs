//! Degree plan slot model

use super::{Code, Semester, Year};
use std::collections::BTreeSet;
use std::fmt;

/// One (year, semester) bucket of the degree plan, holding a set of codes
///
/// A slot is a value object: its code set is never edited in place. Editing
/// the plan means building a replacement slot with [`PlannerSlot::with_codes`]
/// and swapping it into the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerSlot {
    year: Year,
    semester: Semester,
    codes: BTreeSet<Code>,
}

impl PlannerSlot {
    /// Create an empty slot for a (year, semester) pair
    #[must_use]
    pub const fn new(year: Year, semester: Semester) -> Self {
        Self {
            year,
            semester,
            codes: BTreeSet::new(),
        }
    }

    /// Build a replacement slot with the same (year, semester) and new codes
    #[must_use]
    pub fn with_codes(&self, codes: BTreeSet<Code>) -> Self {
        Self {
            year: self.year,
            semester: self.semester,
            codes,
        }
    }

    /// The slot's year
    #[must_use]
    pub const fn year(&self) -> Year {
        self.year
    }

    /// The slot's semester
    #[must_use]
    pub const fn semester(&self) -> Semester {
        self.semester
    }

    /// The codes currently planned in this slot
    #[must_use]
    pub const fn codes(&self) -> &BTreeSet<Code> {
        &self.codes
    }

    /// Whether a code is planned in this slot
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.contains(code)
    }

    /// Whether this slot occupies the given (year, semester) pair
    #[must_use]
    pub fn is_at(&self, year: Year, semester: Semester) -> bool {
        self.year == year && self.semester == semester
    }
}

impl fmt::Display for PlannerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Year {} Semester {}: ", self.year, self.semester)?;
        if self.codes.is_empty() {
            write!(f, "(empty)")
        } else {
            let listed = self
                .codes
                .iter()
                .map(Code::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "{listed}")
        }
    }
}
