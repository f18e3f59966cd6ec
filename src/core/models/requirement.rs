//! Requirement category model

use super::Code;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A named group of module codes a student must satisfy
/// (e.g., "Computing Foundation", 36 credits)
///
/// Like [`super::PlannerSlot`], a category is a value object: its code set is
/// replaced wholesale, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementCategory {
    name: String,
    #[serde(default)]
    credits: u32,
    #[serde(default)]
    codes: BTreeSet<Code>,
}

impl RequirementCategory {
    /// Create a new requirement category with no codes
    #[must_use]
    pub const fn new(name: String, credits: u32) -> Self {
        Self {
            name,
            credits,
            codes: BTreeSet::new(),
        }
    }

    /// Build a replacement category with the same name/credits and new codes
    #[must_use]
    pub fn with_codes(&self, codes: BTreeSet<Code>) -> Self {
        Self {
            name: self.name.clone(),
            credits: self.credits,
            codes,
        }
    }

    /// The category name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Credits needed to satisfy the category
    #[must_use]
    pub const fn credits(&self) -> u32 {
        self.credits
    }

    /// The codes counted towards this category
    #[must_use]
    pub const fn codes(&self) -> &BTreeSet<Code> {
        &self.codes
    }

    /// Whether a code is counted towards this category
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.contains(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str) -> Code {
        raw.parse().unwrap()
    }

    #[test]
    fn test_category_creation() {
        let category = RequirementCategory::new("Computing Foundation".to_string(), 36);

        assert_eq!(category.name(), "Computing Foundation");
        assert_eq!(category.credits(), 36);
        assert!(category.codes().is_empty());
    }

    #[test]
    fn test_with_codes_replaces_code_set() {
        let category = RequirementCategory::new("Mathematics".to_string(), 12);
        let replacement =
            category.with_codes([code("MA1511"), code("MA1512")].into_iter().collect());

        assert_eq!(replacement.name(), "Mathematics");
        assert_eq!(replacement.credits(), 12);
        assert_eq!(replacement.codes().len(), 2);
        assert!(replacement.contains(&code("MA1511")));
        assert!(category.codes().is_empty());
    }
}
