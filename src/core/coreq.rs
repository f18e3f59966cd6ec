//! Co-requisite propagation for degree plan mutations
//!
//! Both entry points are pure: they take the requested codes, the target
//! slot's current codes, and the catalogue, and return a freshly built slot
//! code set plus the set of codes that changed as a side effect. Neither
//! function fails; callers validate inputs before invoking them.

use crate::core::models::{Code, Module};
use std::collections::{BTreeSet, HashMap};

/// Compute the slot contents after adding `requested` codes
///
/// One level of co-requisites of each requested code is pulled into the slot.
/// Co-requisites already placed anywhere in the plan (`planned`) are left
/// where they are, so a code never occupies two slots.
///
/// # Arguments
/// * `requested` - Codes the caller explicitly asked to add
/// * `existing` - The target slot's current codes
/// * `catalogue` - Module catalogue; codes without an entry contribute no
///   co-requisites
/// * `planned` - Every code currently placed in any slot of the plan
///
/// # Returns
/// `(new_codes, implicitly_added)` where `implicitly_added` is the set of
/// co-requisites pulled in that the caller did not ask for
#[must_use]
pub fn expand(
    requested: &BTreeSet<Code>,
    existing: &BTreeSet<Code>,
    catalogue: &HashMap<Code, Module>,
    planned: &BTreeSet<Code>,
) -> (BTreeSet<Code>, BTreeSet<Code>) {
    let mut new_codes = existing.clone();
    let mut implicitly_added = BTreeSet::new();

    for code in requested {
        new_codes.insert(code.clone());
        let Some(module) = catalogue.get(code) else {
            continue;
        };
        for corequisite in &module.corequisites {
            if requested.contains(corequisite) || planned.contains(corequisite) {
                continue;
            }
            new_codes.insert(corequisite.clone());
            implicitly_added.insert(corequisite.clone());
        }
    }

    (new_codes, implicitly_added)
}

/// Compute the slot contents after removing `requested` codes
///
/// Each requested code present in the slot is removed together with its
/// co-requisites that sit in the same slot. Co-requisites placed in other
/// slots are untouched.
///
/// # Arguments
/// * `requested` - Codes the caller explicitly asked to remove
/// * `existing` - The slot's current codes
/// * `catalogue` - Module catalogue; codes without an entry contribute no
///   co-requisites
///
/// # Returns
/// `(new_codes, implicitly_removed)` where `implicitly_removed` is the set of
/// co-requisites dropped that the caller did not ask for
#[must_use]
pub fn shrink(
    requested: &BTreeSet<Code>,
    existing: &BTreeSet<Code>,
    catalogue: &HashMap<Code, Module>,
) -> (BTreeSet<Code>, BTreeSet<Code>) {
    let mut new_codes = existing.clone();
    let mut implicitly_removed = BTreeSet::new();

    for code in requested {
        if !existing.contains(code) {
            continue;
        }
        new_codes.remove(code);
        let Some(module) = catalogue.get(code) else {
            continue;
        };
        for corequisite in &module.corequisites {
            if new_codes.remove(corequisite) {
                implicitly_removed.insert(corequisite.clone());
            }
        }
    }

    implicitly_removed.retain(|code| !requested.contains(code));
    (new_codes, implicitly_removed)
}
