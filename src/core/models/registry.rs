//! Entity registry: catalogue, degree plan slots, and requirement categories

use super::{Code, Module, PlannerSlot, RequirementCategory, Semester, Year};
use crate::core::error::{PlannerError, Result};
use std::collections::HashMap;

/// Owns the module catalogue, the degree plan slot list, and the requirement
/// categories
///
/// The registry is pure data with lookup operations; validation and the
/// co-requisite rules live in [`crate::core::planner::PlannerSession`]. Read
/// accessors never mutate, and slots/categories only change through
/// structural replacement, which keeps whole-registry snapshots cheap to
/// reason about.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    /// Modules indexed by code
    modules: HashMap<Code, Module>,

    /// Degree plan slots in registration order
    slots: Vec<PlannerSlot>,

    /// Requirement categories in registration order
    requirements: Vec<RequirementCategory>,
}

impl Registry {
    /// Create an empty registry with no slots
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with one slot per (year, semester) pair of the grid
    ///
    /// # Arguments
    /// * `years` - Number of years in the grid
    /// * `semesters` - Number of semesters per year
    ///
    /// # Errors
    /// Returns `InvalidYear`/`InvalidSemester` if a dimension falls outside
    /// the supported domain
    pub fn bootstrap(years: u8, semesters: u8) -> Result<Self> {
        let mut registry = Self::new();
        for year in 1..=years {
            let year = Year::new(year)?;
            for semester in 1..=semesters {
                let semester = Semester::new(semester)?;
                registry.slots.push(PlannerSlot::new(year, semester));
            }
        }
        Ok(registry)
    }

    // --- catalogue ---

    /// Insert a module into the catalogue
    ///
    /// # Returns
    /// `true` if the module was added, `false` if a module with the same code
    /// already exists (the existing entry is kept)
    pub fn insert_module(&mut self, module: Module) -> bool {
        if self.modules.contains_key(&module.code) {
            return false;
        }
        self.modules.insert(module.code.clone(), module);
        true
    }

    /// Remove a module from the catalogue, returning it if present
    pub fn take_module(&mut self, code: &Code) -> Option<Module> {
        self.modules.remove(code)
    }

    /// Look up a module by code
    #[must_use]
    pub fn module_by_code(&self, code: &Code) -> Option<&Module> {
        self.modules.get(code)
    }

    /// Mutable lookup of a module by code
    pub fn module_by_code_mut(&mut self, code: &Code) -> Option<&mut Module> {
        self.modules.get_mut(code)
    }

    /// Whether the catalogue has a module with this code
    #[must_use]
    pub fn has_module(&self, code: &Code) -> bool {
        self.modules.contains_key(code)
    }

    /// The full catalogue indexed by code
    #[must_use]
    pub const fn modules(&self) -> &HashMap<Code, Module> {
        &self.modules
    }

    /// Number of modules in the catalogue
    #[must_use]
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    // --- degree plan slots ---

    /// All slots in registration order
    #[must_use]
    pub fn slots(&self) -> &[PlannerSlot] {
        &self.slots
    }

    /// Find the slot for a (year, semester) pair
    #[must_use]
    pub fn find_slot(&self, year: Year, semester: Semester) -> Option<&PlannerSlot> {
        self.slots.iter().find(|slot| slot.is_at(year, semester))
    }

    /// Find the slot currently holding a code, if any
    #[must_use]
    pub fn slot_containing(&self, code: &Code) -> Option<&PlannerSlot> {
        self.slots.iter().find(|slot| slot.contains(code))
    }

    /// Whether a code is placed in any slot of the plan
    #[must_use]
    pub fn is_code_planned(&self, code: &Code) -> bool {
        self.slot_containing(code).is_some()
    }

    /// Structurally replace a registered slot with a new value
    ///
    /// # Errors
    /// Returns `SlotNotRegistered` if `old` is not currently registered
    pub fn replace_slot(&mut self, old: &PlannerSlot, new: PlannerSlot) -> Result<()> {
        let position = self.slots.iter().position(|slot| slot == old).ok_or(
            PlannerError::SlotNotRegistered {
                year: old.year(),
                semester: old.semester(),
            },
        )?;
        self.slots[position] = new;
        Ok(())
    }

    // --- requirement categories ---

    /// All requirement categories in registration order
    #[must_use]
    pub fn requirements(&self) -> &[RequirementCategory] {
        &self.requirements
    }

    /// Register a requirement category
    ///
    /// # Returns
    /// `true` if the category was added, `false` if one with the same name
    /// already exists
    pub fn insert_requirement(&mut self, category: RequirementCategory) -> bool {
        if self
            .requirements
            .iter()
            .any(|existing| existing.name() == category.name())
        {
            return false;
        }
        self.requirements.push(category);
        true
    }

    /// Look up a requirement category by name
    #[must_use]
    pub fn requirement_by_name(&self, name: &str) -> Option<&RequirementCategory> {
        self.requirements
            .iter()
            .find(|category| category.name() == name)
    }

    /// Structurally replace a registered requirement category with a new value
    ///
    /// # Errors
    /// Returns `UnknownRequirement` if `old` is not currently registered
    pub fn replace_requirement(
        &mut self,
        old: &RequirementCategory,
        new: RequirementCategory,
    ) -> Result<()> {
        let position = self
            .requirements
            .iter()
            .position(|category| category == old)
            .ok_or_else(|| PlannerError::UnknownRequirement(old.name().to_string()))?;
        self.requirements[position] = new;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn code(raw: &str) -> Code {
        raw.parse().unwrap()
    }

    fn module(raw: &str) -> Module {
        Module::new(code(raw), format!("Module {raw}"), 4)
    }

    #[test]
    fn test_bootstrap_creates_full_grid() {
        let registry = Registry::bootstrap(4, 4).unwrap();
        assert_eq!(registry.slots().len(), 16);

        let year = Year::new(3).unwrap();
        let semester = Semester::new(2).unwrap();
        assert!(registry.find_slot(year, semester).is_some());
    }

    #[test]
    fn test_bootstrap_rejects_out_of_range_grid() {
        assert!(Registry::bootstrap(5, 4).is_err());
        assert!(Registry::bootstrap(4, 7).is_err());
    }

    #[test]
    fn test_insert_module_rejects_duplicates() {
        let mut registry = Registry::new();

        assert!(registry.insert_module(module("CS1010")));
        assert!(!registry.insert_module(module("CS1010")));
        assert_eq!(registry.module_count(), 1);
    }

    #[test]
    fn test_replace_slot_swaps_value() {
        let mut registry = Registry::bootstrap(1, 1).unwrap();
        let old = registry.slots()[0].clone();
        let new = old.with_codes([code("CS1010")].into_iter().collect());

        registry.replace_slot(&old, new).unwrap();
        assert!(registry.is_code_planned(&code("CS1010")));
        assert_eq!(
            registry.slot_containing(&code("CS1010")).unwrap().year(),
            Year::new(1).unwrap()
        );
    }

    #[test]
    fn test_replace_slot_rejects_stale_value() {
        let mut registry = Registry::bootstrap(1, 1).unwrap();
        let old = registry.slots()[0].clone();
        let edited = old.with_codes([code("CS1010")].into_iter().collect());
        registry.replace_slot(&old, edited).unwrap();

        // `old` no longer matches the registered value
        let err = registry
            .replace_slot(&old, old.with_codes(BTreeSet::new()))
            .unwrap_err();
        assert!(matches!(err, PlannerError::SlotNotRegistered { .. }));
    }

    #[test]
    fn test_requirement_round_trip() {
        let mut registry = Registry::new();
        let category = RequirementCategory::new("Mathematics".to_string(), 12);

        assert!(registry.insert_requirement(category.clone()));
        assert!(!registry.insert_requirement(category));

        let old = registry.requirement_by_name("Mathematics").unwrap().clone();
        let new = old.with_codes([code("MA1511")].into_iter().collect());
        registry.replace_requirement(&old, new).unwrap();

        assert!(registry
            .requirement_by_name("Mathematics")
            .unwrap()
            .contains(&code("MA1511")));
    }
}
