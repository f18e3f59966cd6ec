//! Plan command handler
//!
//! Runs a batch of degree-plan operations against a freshly loaded catalogue
//! in a fixed pipeline: assigns, removes, undos, redos, then a summary of the
//! resulting plan and requirement progress.

use crate::args::{AssignSpec, CodeBatch};
use pwe_planner::config::Config;
use pwe_planner::core::catalogue::{build_registry, load_catalogue, validate_references};
use pwe_planner::core::models::{join_codes, Code, Registry};
use pwe_planner::core::planner::PlannerSession;
use pwe_planner::{error, verbose as verbose_log, warn};
use std::collections::BTreeSet;
use std::path::Path;

use super::catalogue::resolve_path;

/// Run the plan command pipeline
///
/// # Arguments
/// * `file` - Path to the catalogue TOML file
/// * `assigns` - `--assign` batches in the order given
/// * `removes` - `--remove` batches in the order given
/// * `undo_steps` - Number of undos after the mutations
/// * `redo_steps` - Number of redos after the undos
/// * `config` - Loaded configuration (grid dimensions, catalogue dir)
/// * `verbose` - Whether to print history details
pub fn run(
    file: &Path,
    assigns: &[AssignSpec],
    removes: &[CodeBatch],
    undo_steps: usize,
    redo_steps: usize,
    config: &Config,
    verbose: bool,
) {
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

    // Dangling references don't block planning; the engine simply won't
    // propagate through them
    if let Err(problems) = validate_references(&registry) {
        for problem in &problems {
            warn!("{problem}");
        }
    }

    let mut session = PlannerSession::new(registry);

    for spec in assigns {
        match session.assign_to_slot(spec.year, spec.semester, &spec.codes) {
            Ok(outcome) => println!("{outcome}"),
            Err(e) => {
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
        }
    }

    for batch in removes {
        match session.remove_from_plan(&batch.0) {
            Ok(outcome) => println!("{outcome}"),
            Err(e) => {
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
        }
    }

    for _ in 0..undo_steps {
        match session.undo() {
            Ok(_) => println!("✓ Undid the latest change to the degree plan"),
            Err(e) => {
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
        }
    }

    for _ in 0..redo_steps {
        match session.redo() {
            Ok(_) => println!("✓ Redid the latest undone change to the degree plan"),
            Err(e) => {
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
        }
    }

    print_summary(session.registry());

    if verbose {
        verbose_log!(
            "\nHistory: state {} of {}",
            session.history().position(),
            session.history().depth()
        );
    }
}

/// Print the plan grid and requirement progress
fn print_summary(registry: &Registry) {
    println!("\n=== Degree Plan ===");
    for slot in registry.slots() {
        println!("{slot}");
    }

    if registry.requirements().is_empty() {
        return;
    }

    let planned: BTreeSet<Code> = registry
        .slots()
        .iter()
        .flat_map(|slot| slot.codes().iter().cloned())
        .collect();

    println!("\n=== Requirement Progress ===");
    for category in registry.requirements() {
        let planned_here: BTreeSet<Code> = category
            .codes()
            .iter()
            .filter(|code| planned.contains(*code))
            .cloned()
            .collect();
        let credits_planned: u32 = planned_here
            .iter()
            .filter_map(|code| registry.module_by_code(code))
            .map(|module| module.credits)
            .sum();

        if planned_here.is_empty() {
            println!(
                "{}: 0/{} credits planned",
                category.name(),
                category.credits()
            );
        } else {
            println!(
                "{}: {credits_planned}/{} credits planned ({})",
                category.name(),
                category.credits(),
                join_codes(&planned_here)
            );
        }
    }
}
