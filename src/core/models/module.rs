//! Module (catalogue entry) model

use super::{Code, Semester};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Represents a module in the catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Unique module code (e.g., "CS2113T")
    pub code: Code,

    /// Display name (e.g., "Software Engineering & Object-Oriented Programming")
    pub name: String,

    /// Modular credits awarded on completion
    pub credits: u32,

    /// Semesters the module is offered in
    #[serde(default)]
    pub semesters: BTreeSet<Semester>,

    /// Codes that must accompany this module whenever it is planned
    #[serde(default)]
    pub corequisites: BTreeSet<Code>,

    /// Free-form tags (e.g., "core", "elective")
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Module {
    /// Create a new module with no offerings, co-requisites, or tags
    ///
    /// # Arguments
    /// * `code` - Unique module code
    /// * `name` - Display name
    /// * `credits` - Modular credits
    #[must_use]
    pub const fn new(code: Code, name: String, credits: u32) -> Self {
        Self {
            code,
            name,
            credits,
            semesters: BTreeSet::new(),
            corequisites: BTreeSet::new(),
            tags: BTreeSet::new(),
        }
    }

    /// Add a semester this module is offered in
    pub fn add_semester(&mut self, semester: Semester) {
        self.semesters.insert(semester);
    }

    /// Add a co-requisite by code
    pub fn add_corequisite(&mut self, code: Code) {
        self.corequisites.insert(code);
    }

    /// Add a free-form tag
    pub fn add_tag(&mut self, tag: String) {
        self.tags.insert(tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str) -> Code {
        raw.parse().unwrap()
    }

    #[test]
    fn test_module_creation() {
        let module = Module::new(code("CS1010"), "Programming Methodology".to_string(), 4);

        assert_eq!(module.code, code("CS1010"));
        assert_eq!(module.name, "Programming Methodology");
        assert_eq!(module.credits, 4);
        assert!(module.semesters.is_empty());
        assert!(module.corequisites.is_empty());
        assert!(module.tags.is_empty());
    }

    #[test]
    fn test_add_corequisite() {
        let mut module = Module::new(code("CS2113T"), "Software Engineering".to_string(), 4);

        module.add_corequisite(code("CS2101"));
        assert_eq!(module.corequisites.len(), 1);
        assert!(module.corequisites.contains(&code("CS2101")));

        // Adding a duplicate should not duplicate
        module.add_corequisite(code("CS2101"));
        assert_eq!(module.corequisites.len(), 1);
    }

    #[test]
    fn test_add_semester_and_tag() {
        let mut module = Module::new(code("GER1000"), "Quantitative Reasoning".to_string(), 4);

        module.add_semester(Semester::new(1).unwrap());
        module.add_semester(Semester::new(2).unwrap());
        module.add_tag("ge".to_string());

        assert_eq!(module.semesters.len(), 2);
        assert!(module.tags.contains("ge"));
    }
}
