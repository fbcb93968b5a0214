use kalite_core::models::form::TaxonomyKind;
use kalite_taxonomy::flat::FlatTable;
use kalite_taxonomy::node::{OptionItem, TaxonomyNode};
use kalite_taxonomy::tables;
use kalite_taxonomy::tree::TreeTable;
use kalite_taxonomy::{Taxonomy, TaxonomySet};
use proptest::prelude::*;

#[test]
fn waste_management_has_its_22_descriptions_in_order() {
    let dof = tables::builtin(TaxonomyKind::Dof);
    let children = dof.children_of("atik_yonetimi");

    assert_eq!(children.len(), 22);
    assert_eq!(children[0].code, "tibbi_atik_ayristirma");
    assert_eq!(children[1].code, "kesici_delici_doluluk");
    assert_eq!(children[21].code, "dokulme_mudahale");
}

#[test]
fn unknown_parent_resolves_to_empty() {
    let dof = tables::builtin(TaxonomyKind::Dof);
    assert!(dof.children_of("unknown_code").is_empty());
    assert!(dof.children_of("").is_empty());

    let events = tables::builtin(TaxonomyKind::PatientSafety);
    assert!(events.children_of("unknown_code").is_empty());
    assert!(events.children_at("ilac_guvenligi", "unknown_code").is_empty());
    assert!(events.children_at("unknown_code", "receteleme").is_empty());
}

#[test]
fn leaf_codes_have_no_children() {
    let dof = tables::builtin(TaxonomyKind::Dof);
    assert!(dof.children_of("tibbi_atik_ayristirma").is_empty());
}

#[test]
fn builtin_tables_are_well_formed() {
    tables::dof::table().validate().unwrap();
    tables::emergency::table().validate().unwrap();
    tables::patient_safety::table().validate().unwrap();
    tables::employee_safety::table().validate().unwrap();
}

#[test]
fn tree_lookups_by_category_and_pair() {
    let events = tables::builtin(TaxonomyKind::PatientSafety);
    assert_eq!(events.depth(), 3);

    let subs: Vec<_> = events
        .children_of("ilac_guvenligi")
        .into_iter()
        .map(|o| o.code)
        .collect();
    assert_eq!(subs, ["receteleme", "uygulama", "saklama"]);

    let descriptions = events.children_at("ilac_guvenligi", "uygulama");
    assert_eq!(descriptions.len(), 5);
    assert_eq!(descriptions[0].code, "yanlis_hasta");

    // A sub-category code on its own also resolves.
    assert_eq!(events.children_of("uygulama"), descriptions);
}

#[test]
fn valid_paths_in_flat_table() {
    let dof = tables::builtin(TaxonomyKind::Dof);
    assert!(dof.is_valid_path("", None, None));
    assert!(dof.is_valid_path("atik_yonetimi", None, None));
    assert!(dof.is_valid_path("atik_yonetimi", None, Some("torba_etiketsiz")));
    assert!(dof.is_valid_path("atik_yonetimi", Some(""), Some("torba_etiketsiz")));
}

#[test]
fn invalid_paths_in_flat_table() {
    let dof = tables::builtin(TaxonomyKind::Dof);
    assert!(!dof.is_valid_path("bilinmeyen", None, None));
    assert!(!dof.is_valid_path("ilac_yonetimi", None, Some("torba_etiketsiz")));
    // A flat table has no sub-category level.
    assert!(!dof.is_valid_path("atik_yonetimi", Some("torba_etiketsiz"), None));
    // Nothing may be set below an empty category.
    assert!(!dof.is_valid_path("", None, Some("torba_etiketsiz")));
}

#[test]
fn paths_in_tree_table() {
    let events = tables::builtin(TaxonomyKind::PatientSafety);
    assert!(events.is_valid_path("ilac_guvenligi", Some("uygulama"), Some("doz_atlama")));
    assert!(events.is_valid_path("ilac_guvenligi", Some("uygulama"), None));
    assert!(events.is_valid_path("ilac_guvenligi", None, None));

    // Description from another sub-category.
    assert!(!events.is_valid_path("ilac_guvenligi", Some("uygulama"), Some("yanlis_doz")));
    // Sub-category from another category.
    assert!(!events.is_valid_path("hasta_dusmesi", Some("uygulama"), None));
    // Description without its sub-category.
    assert!(!events.is_valid_path("ilac_guvenligi", None, Some("doz_atlama")));
}

#[test]
fn duplicate_sibling_codes_are_rejected() {
    let table = FlatTable::new("x", "X").with_category(
        "a",
        "A",
        vec![OptionItem::new("d", "D1"), OptionItem::new("d", "D2")],
    );
    assert!(table.validate().is_err());

    let table = TreeTable::new(
        "x",
        "X",
        vec![TaxonomyNode::leaf("a", "A"), TaxonomyNode::leaf("a", "A again")],
    );
    assert!(table.validate().is_err());
}

#[test]
fn empty_children_list_is_rejected() {
    let table = TreeTable::new("x", "X", vec![TaxonomyNode::branch("a", "A", vec![])]);
    assert!(table.validate().is_err());
}

#[test]
fn nesting_beyond_three_levels_is_rejected() {
    let deep = TaxonomyNode::branch(
        "a",
        "A",
        vec![TaxonomyNode::branch(
            "b",
            "B",
            vec![TaxonomyNode::branch("c", "C", vec![TaxonomyNode::leaf("d", "D")])],
        )],
    );
    assert!(TreeTable::new("x", "X", vec![deep]).validate().is_err());
}

#[test]
fn taxonomy_set_replaces_a_single_kind() {
    let mut set = TaxonomySet::builtin();
    let custom = FlatTable::new("dof", "Özel").with_category(
        "tek",
        "Tek",
        vec![OptionItem::new("x", "X")],
    );
    set.replace(TaxonomyKind::Dof, std::sync::Arc::new(custom));

    assert_eq!(set.get(TaxonomyKind::Dof).name(), "Özel");
    assert!(set.get(TaxonomyKind::Dof).children_of("atik_yonetimi").is_empty());
    assert_eq!(
        set.get(TaxonomyKind::Emergency).name(),
        tables::builtin(TaxonomyKind::Emergency).name()
    );
    assert_eq!(set.iter().count(), 4);
}

fn any_kind() -> impl Strategy<Value = TaxonomyKind> {
    prop_oneof![
        Just(TaxonomyKind::Dof),
        Just(TaxonomyKind::PatientSafety),
        Just(TaxonomyKind::EmployeeSafety),
        Just(TaxonomyKind::Emergency),
    ]
}

proptest! {
    #[test]
    fn lookups_are_idempotent(kind in any_kind(), code in "[a-z_]{0,24}") {
        let table = tables::builtin(kind);
        prop_assert_eq!(table.children_of(&code), table.children_of(&code));
    }

    #[test]
    fn every_listed_child_forms_a_valid_path(kind in any_kind()) {
        let table = tables::builtin(kind);
        for category in table.categories() {
            for child in table.children_of(&category.code) {
                if table.depth() == 2 {
                    prop_assert!(table.is_valid_path(&category.code, None, Some(&child.code)));
                } else {
                    prop_assert!(table.is_valid_path(&category.code, Some(&child.code), None));
                    for leaf in table.children_at(&category.code, &child.code) {
                        prop_assert!(table.is_valid_path(
                            &category.code,
                            Some(&child.code),
                            Some(&leaf.code)
                        ));
                    }
                }
            }
        }
    }
}
