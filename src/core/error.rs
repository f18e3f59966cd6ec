//! Error types for catalogue, plan, and history operations

use crate::core::models::{join_codes, Code, Semester, Year};
use std::collections::BTreeSet;
use thiserror::Error;

/// Result alias used throughout the planner core.
pub type Result<T> = std::result::Result<T, PlannerError>;

/// Errors produced by catalogue, degree-plan, and history operations.
///
/// Every variant is a deterministic validation failure detected before any
/// mutation takes place; a returned error means the registry and the version
/// history are unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    /// A module code failed lexical validation.
    #[error("invalid module code '{0}': codes should begin with two or three letters, followed by four digits, and may optionally end with a letter")]
    InvalidCode(String),

    /// A year was outside the supported range.
    #[error("invalid year '{0}': years should be a number between 1 and 4")]
    InvalidYear(String),

    /// A semester was outside the supported range.
    #[error("invalid semester '{0}': semesters should be a number between 1 and 4")]
    InvalidSemester(String),

    /// No slot is registered for the requested (year, semester) pair.
    #[error("no degree plan slot exists for year {year} semester {semester}")]
    SlotNotFound {
        /// Year of the missing slot
        year: Year,
        /// Semester of the missing slot
        semester: Semester,
    },

    /// A slot value handed to `replace_slot` is not currently registered.
    #[error("the degree plan slot for year {year} semester {semester} is not registered")]
    SlotNotRegistered {
        /// Year of the unregistered slot value
        year: Year,
        /// Semester of the unregistered slot value
        semester: Semester,
    },

    /// Requested codes are already placed somewhere in the degree plan.
    #[error("the module(s) {} already exist in the degree plan", join_codes(.0))]
    DuplicatePlacement(BTreeSet<Code>),

    /// Requested codes have no matching catalogue entry.
    #[error("the module(s) {} do not exist in the module list", join_codes(.0))]
    UnknownModule(BTreeSet<Code>),

    /// A module with this code is already in the catalogue.
    #[error("the module {0} already exists in the module list")]
    DuplicateModule(Code),

    /// Requested codes are absent from every slot of the degree plan.
    #[error("the module(s) {} do not exist in the degree plan", join_codes(.0))]
    CodeNotPlanned(BTreeSet<Code>),

    /// No requirement category is registered under the given name.
    #[error("the requirement category '{0}' does not exist")]
    UnknownRequirement(String),

    /// Requested codes are absent from the named requirement category.
    #[error("the module(s) {} do not exist in the requirement category '{name}'", join_codes(.codes))]
    CodeNotInRequirement {
        /// Name of the requirement category
        name: String,
        /// Codes that were not found in the category
        codes: BTreeSet<Code>,
    },

    /// Undo was requested at the earliest recorded state.
    #[error("no earlier plan state to restore")]
    NoEarlierState,

    /// Redo was requested at the latest recorded state.
    #[error("no later plan state to restore")]
    NoLaterState,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str) -> Code {
        raw.parse().unwrap()
    }

    #[test]
    fn test_duplicate_placement_message_lists_codes() {
        let codes: BTreeSet<Code> = [code("CS1010"), code("CS2040C")].into_iter().collect();
        let err = PlannerError::DuplicatePlacement(codes);
        let message = err.to_string();

        assert!(message.contains("CS1010, CS2040C"));
        assert!(message.contains("already exist in the degree plan"));
    }

    #[test]
    fn test_history_error_messages() {
        assert_eq!(
            PlannerError::NoEarlierState.to_string(),
            "no earlier plan state to restore"
        );
        assert_eq!(
            PlannerError::NoLaterState.to_string(),
            "no later plan state to restore"
        );
    }

    #[test]
    fn test_code_not_in_requirement_names_the_category() {
        let err = PlannerError::CodeNotInRequirement {
            name: "Computing Foundation".to_string(),
            codes: [code("CS2100")].into_iter().collect(),
        };

        let message = err.to_string();
        assert!(message.contains("CS2100"));
        assert!(message.contains("Computing Foundation"));
    }
}
