//! Degree plan mutation operations and session state
//!
//! A [`PlannerSession`] owns the live [`Registry`] plus its version history.
//! Every operation follows the same discipline: validate against the current
//! registry, apply the change through structural replacement, then commit one
//! snapshot. A failed validation returns before anything is touched, so the
//! registry and history are exactly as they were.

use crate::core::coreq;
use crate::core::error::{PlannerError, Result};
use crate::core::history::VersionedRegistry;
use crate::core::models::{join_codes, Code, Module, Registry, Semester, Year};
use crate::{debug, info};
use std::collections::BTreeSet;
use std::fmt;

/// Result of a successful assign operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignOutcome {
    /// Year of the target slot
    pub year: Year,
    /// Semester of the target slot
    pub semester: Semester,
    /// Codes the caller explicitly placed
    pub requested: BTreeSet<Code>,
    /// Co-requisites pulled into the slot as a side effect
    pub implicitly_added: BTreeSet<Code>,
}

impl fmt::Display for AssignOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Added new module(s) to year {} semester {} of the degree plan:\n{}",
            self.year,
            self.semester,
            join_codes(&self.requested)
        )?;
        if !self.implicitly_added.is_empty() {
            write!(
                f,
                "\nCo-requisite(s) added:\n{}",
                join_codes(&self.implicitly_added)
            )?;
        }
        Ok(())
    }
}

/// Result of a successful plan removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveOutcome {
    /// Codes the caller explicitly removed
    pub requested: BTreeSet<Code>,
    /// Co-requisites dropped from slots as a side effect
    pub implicitly_removed: BTreeSet<Code>,
}

impl fmt::Display for RemoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Removed module(s) from the degree plan:\n{}",
            join_codes(&self.requested)
        )?;
        if !self.implicitly_removed.is_empty() {
            write!(
                f,
                "\nCo-requisite(s) removed:\n{}",
                join_codes(&self.implicitly_removed)
            )?;
        }
        Ok(())
    }
}

/// Result of a successful requirement category edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementOutcome {
    /// Name of the edited category
    pub name: String,
    /// Codes added to or removed from the category
    pub codes: BTreeSet<Code>,
    /// Whether codes were added (false = removed)
    pub added: bool,
}

impl fmt::Display for RequirementOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.added { "Added" } else { "Removed" };
        let direction = if self.added { "to" } else { "from" };
        write!(
            f,
            "{verb} module(s) {direction} the requirement category '{}':\n{}",
            self.name,
            join_codes(&self.codes)
        )
    }
}

/// One planning session: the live registry plus its undo/redo history
#[derive(Debug, Clone)]
pub struct PlannerSession {
    registry: Registry,
    history: VersionedRegistry,
}

impl PlannerSession {
    /// Start a session on a bootstrapped registry
    ///
    /// The history is seeded with the starting state, so the first mutation
    /// can be undone back to it.
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self {
            history: VersionedRegistry::new(registry.clone()),
            registry,
        }
    }

    /// The current registry state
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The session's version history
    #[must_use]
    pub const fn history(&self) -> &VersionedRegistry {
        &self.history
    }

    fn commit(&mut self) {
        self.history.commit(self.registry.clone());
        debug!(
            "Committed plan state {} of {}",
            self.history.position(),
            self.history.depth()
        );
    }

    // --- degree plan mutations ---

    /// Add modules to a degree plan slot, pulling in their co-requisites
    ///
    /// # Errors
    /// - `SlotNotFound` if no slot is registered at (year, semester)
    /// - `DuplicatePlacement` if any requested code is already placed in any
    ///   slot of the plan
    /// - `UnknownModule` if any requested code has no catalogue entry
    pub fn assign_to_slot(
        &mut self,
        year: Year,
        semester: Semester,
        requested: &BTreeSet<Code>,
    ) -> Result<AssignOutcome> {
        let slot = self
            .registry
            .find_slot(year, semester)
            .ok_or(PlannerError::SlotNotFound { year, semester })?
            .clone();

        let duplicates: BTreeSet<Code> = requested
            .iter()
            .filter(|code| self.registry.is_code_planned(code))
            .cloned()
            .collect();
        if !duplicates.is_empty() {
            return Err(PlannerError::DuplicatePlacement(duplicates));
        }

        let unknown: BTreeSet<Code> = requested
            .iter()
            .filter(|code| !self.registry.has_module(code))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(PlannerError::UnknownModule(unknown));
        }

        let planned: BTreeSet<Code> = self
            .registry
            .slots()
            .iter()
            .flat_map(|slot| slot.codes().iter().cloned())
            .collect();

        let (new_codes, implicitly_added) =
            coreq::expand(requested, slot.codes(), self.registry.modules(), &planned);

        let replacement = slot.with_codes(new_codes);
        self.registry.replace_slot(&slot, replacement)?;
        self.commit();

        info!(
            "Added {} to year {year} semester {semester}",
            join_codes(requested)
        );

        Ok(AssignOutcome {
            year,
            semester,
            requested: requested.clone(),
            implicitly_added,
        })
    }

    /// Remove modules from wherever they appear in the degree plan, dropping
    /// co-requisites that sit in the same slot
    ///
    /// The whole batch commits as one version.
    ///
    /// # Errors
    /// `CodeNotPlanned` if any requested code is absent from every slot
    pub fn remove_from_plan(&mut self, requested: &BTreeSet<Code>) -> Result<RemoveOutcome> {
        let not_planned: BTreeSet<Code> = requested
            .iter()
            .filter(|code| !self.registry.is_code_planned(code))
            .cloned()
            .collect();
        if !not_planned.is_empty() {
            return Err(PlannerError::CodeNotPlanned(not_planned));
        }

        let mut implicitly_removed = BTreeSet::new();
        let slots: Vec<_> = self.registry.slots().to_vec();
        for slot in slots {
            let (new_codes, removed_here) =
                coreq::shrink(requested, slot.codes(), self.registry.modules());
            implicitly_removed.extend(removed_here);
            if new_codes != *slot.codes() {
                let replacement = slot.with_codes(new_codes);
                self.registry.replace_slot(&slot, replacement)?;
            }
        }
        self.commit();

        info!("Removed {} from the degree plan", join_codes(requested));

        Ok(RemoveOutcome {
            requested: requested.clone(),
            implicitly_removed,
        })
    }

    // --- catalogue management ---

    /// Add a module to the catalogue
    ///
    /// # Errors
    /// `DuplicateModule` if a module with the same code already exists
    pub fn add_module(&mut self, module: Module) -> Result<()> {
        let code = module.code.clone();
        if !self.registry.insert_module(module) {
            return Err(PlannerError::DuplicateModule(code));
        }
        self.commit();

        info!("Added module {code} to the catalogue");
        Ok(())
    }

    /// Delete a module from the catalogue
    ///
    /// The code is also stripped from every plan slot, every requirement
    /// category, and every other module's co-requisite set, so nothing is
    /// left referring to a module that no longer exists.
    ///
    /// # Errors
    /// `UnknownModule` if no module has this code
    pub fn remove_module(&mut self, code: &Code) -> Result<Module> {
        let Some(module) = self.registry.take_module(code) else {
            return Err(PlannerError::UnknownModule(
                [code.clone()].into_iter().collect(),
            ));
        };

        let slots: Vec<_> = self.registry.slots().to_vec();
        for slot in slots {
            if slot.contains(code) {
                let mut codes = slot.codes().clone();
                codes.remove(code);
                self.registry.replace_slot(&slot, slot.with_codes(codes))?;
            }
        }

        let requirements: Vec<_> = self.registry.requirements().to_vec();
        for category in requirements {
            if category.contains(code) {
                let mut codes = category.codes().clone();
                codes.remove(code);
                self.registry
                    .replace_requirement(&category, category.with_codes(codes))?;
            }
        }

        let peers: Vec<Code> = self.registry.modules().keys().cloned().collect();
        for peer in peers {
            if let Some(peer_module) = self.registry.module_by_code_mut(&peer) {
                peer_module.corequisites.remove(code);
            }
        }

        self.commit();

        info!("Removed module {code} from the catalogue");
        Ok(module)
    }

    /// Replace a module's co-requisite set
    ///
    /// Placements made before the edit are not revisited: a module already in
    /// the plan keeps its slot as-is even if its new co-requisites are not
    /// planned anywhere.
    ///
    /// # Errors
    /// `UnknownModule` if the target module or any referenced co-requisite is
    /// missing from the catalogue
    pub fn set_corequisites(&mut self, code: &Code, corequisites: BTreeSet<Code>) -> Result<()> {
        if !self.registry.has_module(code) {
            return Err(PlannerError::UnknownModule(
                [code.clone()].into_iter().collect(),
            ));
        }

        let unknown: BTreeSet<Code> = corequisites
            .iter()
            .filter(|coreq| !self.registry.has_module(coreq))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(PlannerError::UnknownModule(unknown));
        }

        if let Some(module) = self.registry.module_by_code_mut(code) {
            module.corequisites = corequisites;
        }
        self.commit();

        info!("Replaced co-requisites of {code}");
        Ok(())
    }

    // --- requirement category management ---

    /// Add catalogue modules to a requirement category
    ///
    /// # Errors
    /// - `UnknownRequirement` if no category has this name
    /// - `UnknownModule` if any requested code has no catalogue entry
    pub fn add_to_requirement(
        &mut self,
        name: &str,
        requested: &BTreeSet<Code>,
    ) -> Result<RequirementOutcome> {
        let category = self
            .registry
            .requirement_by_name(name)
            .ok_or_else(|| PlannerError::UnknownRequirement(name.to_string()))?
            .clone();

        let unknown: BTreeSet<Code> = requested
            .iter()
            .filter(|code| !self.registry.has_module(code))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(PlannerError::UnknownModule(unknown));
        }

        let mut codes = category.codes().clone();
        codes.extend(requested.iter().cloned());
        self.registry
            .replace_requirement(&category, category.with_codes(codes))?;
        self.commit();

        info!(
            "Added {} to requirement category '{name}'",
            join_codes(requested)
        );

        Ok(RequirementOutcome {
            name: name.to_string(),
            codes: requested.clone(),
            added: true,
        })
    }

    /// Remove codes from a requirement category
    ///
    /// # Errors
    /// - `UnknownRequirement` if no category has this name
    /// - `CodeNotInRequirement` if any requested code is not counted towards
    ///   the category
    pub fn remove_from_requirement(
        &mut self,
        name: &str,
        requested: &BTreeSet<Code>,
    ) -> Result<RequirementOutcome> {
        let category = self
            .registry
            .requirement_by_name(name)
            .ok_or_else(|| PlannerError::UnknownRequirement(name.to_string()))?
            .clone();

        let missing: BTreeSet<Code> = requested
            .iter()
            .filter(|code| !category.contains(code))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(PlannerError::CodeNotInRequirement {
                name: name.to_string(),
                codes: missing,
            });
        }

        let codes: BTreeSet<Code> = category
            .codes()
            .iter()
            .filter(|code| !requested.contains(*code))
            .cloned()
            .collect();
        self.registry
            .replace_requirement(&category, category.with_codes(codes))?;
        self.commit();

        info!(
            "Removed {} from requirement category '{name}'",
            join_codes(requested)
        );

        Ok(RequirementOutcome {
            name: name.to_string(),
            codes: requested.clone(),
            added: false,
        })
    }

    // --- history ---

    /// Restore the previous registry snapshot
    ///
    /// # Errors
    /// `NoEarlierState` when already at the earliest snapshot
    pub fn undo(&mut self) -> Result<&Registry> {
        let snapshot = self.history.undo()?.clone();
        self.registry = snapshot;
        debug!("Undid to plan state {}", self.history.position());
        Ok(&self.registry)
    }

    /// Restore the next registry snapshot
    ///
    /// # Errors
    /// `NoLaterState` when already at the latest snapshot
    pub fn redo(&mut self) -> Result<&Registry> {
        let snapshot = self.history.redo()?.clone();
        self.registry = snapshot;
        debug!("Redid to plan state {}", self.history.position());
        Ok(&self.registry)
    }
}
