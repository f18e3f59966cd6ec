//! TOML catalogue file loader
//!
//! A catalogue file describes the modules a student can plan with, and
//! optionally the requirement categories of the degree. It is an input file
//! in the same sense as a curriculum spreadsheet: the planner reads it at
//! startup and never writes it back.

use crate::core::error::{PlannerError, Result};
use crate::core::models::{Module, Registry, RequirementCategory};
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parsed contents of a catalogue TOML file
///
/// ```toml
/// name = "Sample catalogue"
///
/// [[modules]]
/// code = "CS2113T"
/// name = "Software Engineering & Object-Oriented Programming"
/// credits = 4
/// semesters = [1, 2]
/// corequisites = ["CS2101"]
/// tags = ["core"]
///
/// [[requirements]]
/// name = "Computing Foundation"
/// credits = 36
/// codes = ["CS1010", "CS2040C"]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogueFile {
    /// Catalogue display name
    #[serde(default)]
    pub name: String,

    /// Module entries
    #[serde(default)]
    pub modules: Vec<Module>,

    /// Requirement category entries
    #[serde(default)]
    pub requirements: Vec<RequirementCategory>,
}

/// Load and parse a catalogue TOML file
///
/// # Arguments
/// * `path` - Path to the catalogue file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn load_catalogue<P: AsRef<Path>>(path: P) -> std::result::Result<CatalogueFile, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    let catalogue: CatalogueFile = toml::from_str(&content)?;
    Ok(catalogue)
}

/// Build a bootstrapped registry from a parsed catalogue
///
/// # Arguments
/// * `catalogue` - Parsed catalogue file
/// * `years` - Number of years in the plan grid
/// * `semesters` - Number of semesters per year
///
/// # Errors
/// - `DuplicateModule` if two entries share a code
/// - `InvalidYear`/`InvalidSemester` if the grid dimensions are out of range
pub fn build_registry(catalogue: &CatalogueFile, years: u8, semesters: u8) -> Result<Registry> {
    let mut registry = Registry::bootstrap(years, semesters)?;

    for module in &catalogue.modules {
        if !registry.insert_module(module.clone()) {
            return Err(PlannerError::DuplicateModule(module.code.clone()));
        }
    }
    for category in &catalogue.requirements {
        // First definition of a category name wins
        registry.insert_requirement(category.clone());
    }

    Ok(registry)
}

/// Check that every cross-reference in the registry resolves to a module
///
/// # Returns
/// `Ok(())` when all references resolve, `Err` with one message per dangling
/// reference otherwise
///
/// # Errors
/// Returns the list of human-readable problems found
pub fn validate_references(registry: &Registry) -> std::result::Result<(), Vec<String>> {
    let mut problems = Vec::new();

    let mut modules: Vec<_> = registry.modules().values().collect();
    modules.sort_by(|a, b| a.code.cmp(&b.code));
    for module in modules {
        for corequisite in &module.corequisites {
            if !registry.has_module(corequisite) {
                problems.push(format!(
                    "Module '{}': missing co-requisite '{corequisite}'",
                    module.code
                ));
            }
        }
    }

    for category in registry.requirements() {
        for code in category.codes() {
            if !registry.has_module(code) {
                problems.push(format!(
                    "Requirement '{}': missing module '{code}'",
                    category.name()
                ));
            }
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
name = "Sample catalogue"

[[modules]]
code = "CS1010"
name = "Programming Methodology"
credits = 4
semesters = [1, 2]

[[modules]]
code = "CS2113T"
name = "Software Engineering & Object-Oriented Programming"
credits = 4
semesters = [1, 2]
corequisites = ["CS2101"]
tags = ["core"]

[[modules]]
code = "CS2101"
name = "Effective Communication for Computing Professionals"
credits = 4
corequisites = ["CS2113T"]

[[requirements]]
name = "Computing Foundation"
credits = 36
codes = ["CS1010"]
"#;

    #[test]
    fn test_parse_sample_catalogue() {
        let catalogue: CatalogueFile = toml::from_str(SAMPLE).unwrap();

        assert_eq!(catalogue.name, "Sample catalogue");
        assert_eq!(catalogue.modules.len(), 3);
        assert_eq!(catalogue.requirements.len(), 1);

        let cs2113t = &catalogue.modules[1];
        assert_eq!(cs2113t.code.as_str(), "CS2113T");
        assert_eq!(cs2113t.credits, 4);
        assert_eq!(cs2113t.semesters.len(), 2);
        assert!(cs2113t.corequisites.contains(&"CS2101".parse().unwrap()));
    }

    #[test]
    fn test_parse_rejects_bad_code() {
        let bad = r#"
[[modules]]
code = "NOPE"
name = "Broken"
credits = 4
"#;
        assert!(toml::from_str::<CatalogueFile>(bad).is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range_semester() {
        let bad = r#"
[[modules]]
code = "CS1010"
name = "Programming Methodology"
credits = 4
semesters = [9]
"#;
        assert!(toml::from_str::<CatalogueFile>(bad).is_err());
    }

    #[test]
    fn test_build_registry_bootstraps_grid_and_catalogue() {
        let catalogue: CatalogueFile = toml::from_str(SAMPLE).unwrap();
        let registry = build_registry(&catalogue, 4, 2).unwrap();

        assert_eq!(registry.slots().len(), 8);
        assert_eq!(registry.module_count(), 3);
        assert!(registry.requirement_by_name("Computing Foundation").is_some());
    }

    #[test]
    fn test_build_registry_rejects_duplicate_codes() {
        let duplicated = r#"
[[modules]]
code = "CS1010"
name = "Programming Methodology"
credits = 4

[[modules]]
code = "CS1010"
name = "Programming Methodology Again"
credits = 4
"#;
        let catalogue: CatalogueFile = toml::from_str(duplicated).unwrap();
        let err = build_registry(&catalogue, 1, 1).unwrap_err();
        assert_eq!(
            err,
            PlannerError::DuplicateModule("CS1010".parse().unwrap())
        );
    }

    #[test]
    fn test_validate_references_reports_dangling_corequisite() {
        let dangling = r#"
[[modules]]
code = "CS2113T"
name = "Software Engineering"
credits = 4
corequisites = ["CS2101"]
"#;
        let catalogue: CatalogueFile = toml::from_str(dangling).unwrap();
        let registry = build_registry(&catalogue, 1, 1).unwrap();

        let problems = validate_references(&registry).unwrap_err();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("CS2113T"));
        assert!(problems[0].contains("CS2101"));
    }

    #[test]
    fn test_validate_references_accepts_complete_catalogue() {
        let catalogue: CatalogueFile = toml::from_str(SAMPLE).unwrap();
        let registry = build_registry(&catalogue, 1, 1).unwrap();
        assert!(validate_references(&registry).is_ok());
    }
}
