//! Integration smoke tests for `pwe_planner`

use pwe_planner::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}
