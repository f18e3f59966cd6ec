//! Integration tests for catalogue file loading

use pwe_planner::core::catalogue::{build_registry, load_catalogue, validate_references};
use pwe_planner::core::models::Code;
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = r#"
name = "CEG sample catalogue"

[[modules]]
code = "CS1010"
name = "Programming Methodology"
credits = 4
semesters = [1, 2]
tags = ["core"]

[[modules]]
code = "CS2113T"
name = "Software Engineering & Object-Oriented Programming"
credits = 4
semesters = [1, 2]
corequisites = ["CS2101"]

[[modules]]
code = "CS2101"
name = "Effective Communication for Computing Professionals"
credits = 4
corequisites = ["CS2113T"]

[[requirements]]
name = "Computing Foundation"
credits = 36
codes = ["CS1010", "CS2113T"]
"#;

fn write_catalogue(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("catalogue.toml");
    fs::write(&path, content).expect("Failed to write catalogue file");
    (temp_dir, path)
}

#[test]
fn test_load_catalogue_from_file() {
    let (_dir, path) = write_catalogue(SAMPLE);

    let catalogue = load_catalogue(&path).expect("Failed to load catalogue");

    assert_eq!(catalogue.name, "CEG sample catalogue");
    assert_eq!(catalogue.modules.len(), 3);
    assert_eq!(catalogue.requirements.len(), 1);
}

#[test]
fn test_load_catalogue_missing_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("nope.toml");

    assert!(load_catalogue(&missing).is_err());
}

#[test]
fn test_load_catalogue_rejects_malformed_toml() {
    let (_dir, path) = write_catalogue("[[modules]\ncode = ");

    assert!(load_catalogue(&path).is_err());
}

#[test]
fn test_load_catalogue_rejects_invalid_code() {
    let (_dir, path) = write_catalogue(
        r#"
[[modules]]
code = "INVALID CODE"
name = "Broken"
credits = 4
"#,
    );

    assert!(load_catalogue(&path).is_err());
}

#[test]
fn test_loaded_catalogue_builds_valid_registry() {
    let (_dir, path) = write_catalogue(SAMPLE);
    let catalogue = load_catalogue(&path).unwrap();

    let registry = build_registry(&catalogue, 4, 4).unwrap();

    assert_eq!(registry.slots().len(), 16);
    assert_eq!(registry.module_count(), 3);
    assert!(validate_references(&registry).is_ok());

    let cs2113t = registry
        .module_by_code(&"CS2113T".parse::<Code>().unwrap())
        .unwrap();
    assert!(cs2113t
        .corequisites
        .contains(&"CS2101".parse::<Code>().unwrap()));
}

#[test]
fn test_dangling_references_are_reported() {
    let (_dir, path) = write_catalogue(
        r#"
[[modules]]
code = "CS2113T"
name = "Software Engineering"
credits = 4
corequisites = ["CS2101"]

[[requirements]]
name = "Computing Foundation"
codes = ["CS9999"]
"#,
    );
    let catalogue = load_catalogue(&path).unwrap();
    let registry = build_registry(&catalogue, 1, 1).unwrap();

    let problems = validate_references(&registry).unwrap_err();
    assert_eq!(problems.len(), 2);
    assert!(problems.iter().any(|p| p.contains("CS2101")));
    assert!(problems.iter().any(|p| p.contains("CS9999")));
}
