//! Integration tests for configuration management

use pwe_planner::config::{Config, ConfigOverrides};

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        config.planner.years >= 1,
        "Default grid should have at least one year"
    );
    assert!(
        config.planner.semesters >= 1,
        "Default grid should have at least one semester"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
catalogue_dir = "./catalogues"

[planner]
years = 3
semesters = 2
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.catalogue_dir, "./catalogues");
    assert_eq!(config.planner.years, 3);
    assert_eq!(config.planner.semesters, 2);
}

#[test]
fn test_config_from_toml_partial() {
    // Missing fields within sections use defaults
    let toml_str = r#"
[logging]
level = "error"

[paths]

[planner]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, ""); // Default empty
    assert!(!config.logging.verbose); // Default false
    assert_eq!(config.paths.catalogue_dir, ""); // Default empty
    assert_eq!(config.planner.years, 4); // Default grid
    assert_eq!(config.planner.semesters, 4);
}

#[test]
fn test_config_get_known_keys() {
    let config = Config::from_defaults();

    assert!(config.get("level").is_some());
    assert!(config.get("file").is_some());
    assert!(config.get("verbose").is_some());
    assert!(config.get("catalogue_dir").is_some());
    assert!(config.get("years").is_some());
    assert!(config.get("semesters").is_some());
    assert!(config.get("bogus").is_none());
}

#[test]
fn test_config_set_validates_values() {
    let mut config = Config::from_defaults();

    config.set("level", "debug").unwrap();
    assert_eq!(config.logging.level, "debug");

    config.set("years", "2").unwrap();
    assert_eq!(config.planner.years, 2);

    assert!(config.set("years", "0").is_err());
    assert!(config.set("years", "5").is_err());
    assert!(config.set("years", "many").is_err());
    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("bogus", "1").is_err());
}

#[test]
fn test_config_unset_restores_default() {
    let defaults = Config::from_defaults();
    let mut config = Config::from_defaults();

    config.set("semesters", "1").unwrap();
    assert_eq!(config.planner.semesters, 1);

    config.unset("semesters", &defaults).unwrap();
    assert_eq!(config.planner.semesters, defaults.planner.semesters);

    assert!(config.unset("bogus", &defaults).is_err());
}

#[test]
fn test_apply_overrides() {
    let mut config = Config::from_defaults();
    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        verbose: Some(true),
        years: Some(2),
        ..Default::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert!(config.logging.verbose);
    assert_eq!(config.planner.years, 2);
    // Untouched fields keep their values
    assert_eq!(config.planner.semesters, Config::from_defaults().planner.semesters);
}
