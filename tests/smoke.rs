//! Integration smoke tests for `find_my_cgpa`

use find_my_cgpa::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}
