//! Catalogue command handler

use pwe_planner::config::Config;
use pwe_planner::core::catalogue::{build_registry, load_catalogue, validate_references};
use pwe_planner::core::models::Module;
use pwe_planner::error;
use std::path::{Path, PathBuf};

/// Resolve a catalogue path, falling back to the configured catalogue
/// directory for bare file names that don't exist as given
pub fn resolve_path(file: &Path, config: &Config) -> PathBuf {
    if !file.exists() && file.is_relative() && !config.paths.catalogue_dir.is_empty() {
        return PathBuf::from(&config.paths.catalogue_dir).join(file);
    }
    file.to_path_buf()
}

/// Run the catalogue command: load, validate references, list modules
pub fn run(file: &Path, config: &Config, verbose: bool) {
    let path = resolve_path(file, config);

    let catalogue = match load_catalogue(&path) {
        Ok(catalogue) => catalogue,
        Err(e) => {
            error!("Failed to load catalogue {}: {e}", path.display());
            eprintln!("✗ Failed to load {}: {e}", path.display());
            std::process::exit(1);
        }
    };

    let registry =
        match build_registry(&catalogue, config.planner.years, config.planner.semesters) {
            Ok(registry) => registry,
            Err(e) => {
                error!("Invalid catalogue {}: {e}", path.display());
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
        };

    if let Err(problems) = validate_references(&registry) {
        for problem in &problems {
            eprintln!("✗ {problem}");
        }
        eprintln!(
            "✗ Catalogue has {} unresolved reference(s)",
            problems.len()
        );
        std::process::exit(1);
    }

    let label = if catalogue.name.is_empty() {
        path.display().to_string()
    } else {
        catalogue.name.clone()
    };
    println!(
        "✓ Catalogue '{label}' loaded: {} module(s), {} requirement categorie(s)",
        registry.module_count(),
        registry.requirements().len()
    );

    let mut modules: Vec<&Module> = registry.modules().values().collect();
    modules.sort_by(|a, b| a.code.cmp(&b.code));
    for module in modules {
        println!("  {}  {} ({} credits)", module.code, module.name, module.credits);
        if verbose {
            if !module.semesters.is_empty() {
                let offered = module
                    .semesters
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("          offered in semester(s): {offered}");
            }
            if !module.corequisites.is_empty() {
                let coreqs = module
                    .corequisites
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("          co-requisite(s): {coreqs}");
            }
            if !module.tags.is_empty() {
                let tags = module.tags.iter().cloned().collect::<Vec<_>>().join(", ");
                println!("          tag(s): {tags}");
            }
        }
    }
}
