use assessment_core::catalog::model::{ControlStatus, Framework, ImplementationGroup};
use assessment_core::catalog::Catalog;
use std::collections::HashSet;

#[test]
fn builtin_catalog_ids_are_unique() {
    let catalog = Catalog::builtin();
    let ids: HashSet<&str> = catalog.controls().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids.len(), catalog.len());
}

#[test]
fn builtin_catalog_covers_both_frameworks() {
    let catalog = Catalog::builtin();
    let counts = catalog.frameworks();
    assert_eq!(counts.get(&Framework::CIS), Some(&42));
    assert_eq!(counts.get(&Framework::NIST), Some(&34));
    assert!(catalog
        .controls()
        .iter()
        .filter(|c| c.framework == Some(Framework::CIS))
        .all(|c| c.id.starts_with("CIS-")));
    assert!(catalog
        .controls()
        .iter()
        .filter(|c| c.framework == Some(Framework::NIST))
        .all(|c| c.id.starts_with("NIST-")));
}

#[test]
fn defaults_are_planned_and_zero() {
    let defaults = Catalog::builtin().defaults();
    assert!(defaults
        .iter()
        .all(|c| c.status == ControlStatus::Planned && c.score_value() == Some(0.0) && c.notes.is_none()));
}

#[test]
fn known_entries_carry_mapping_and_group() {
    let catalog = Catalog::builtin();
    let account_inventory = catalog.get("CIS-5.1").unwrap();
    assert_eq!(account_inventory.implementation_level, Some(ImplementationGroup::IG1));
    assert_eq!(account_inventory.nist_mapping, vec!["AC-2".to_string()]);
    assert_eq!(account_inventory.category, "5. Account Management");

    let account_mgmt = catalog.get("NIST-AC-2").unwrap();
    assert_eq!(account_mgmt.framework, Some(Framework::NIST));
    assert_eq!(account_mgmt.category, "Access Control (AC)");
    assert!(catalog.get("CIS-99.9").is_none());
}

#[test]
fn every_group_is_represented() {
    let catalog = Catalog::builtin();
    for group in ImplementationGroup::ALL {
        assert!(catalog
            .controls()
            .iter()
            .any(|c| c.implementation_level == Some(group)));
    }
}
