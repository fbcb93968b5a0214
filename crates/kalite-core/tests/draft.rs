use jiff::civil::date;
use kalite_core::error::CoreError;
use kalite_core::models::classification::ClassificationFields;
use kalite_core::models::draft::{DraftRecord, FieldValue};
use kalite_core::models::form::{FormKind, TaxonomyKind};
use serde_json::json;

fn event_fields() -> ClassificationFields {
    ClassificationFields {
        taxonomy: TaxonomyKind::PatientSafety,
        category: "olay_kategorisi",
        sub_category: Some("olay_alt_kategorisi"),
        description: "olay_kisa_aciklama",
    }
}

fn dof_fields() -> ClassificationFields {
    ClassificationFields {
        taxonomy: TaxonomyKind::Dof,
        category: "dof_kategorisi",
        sub_category: None,
        description: "kisa_aciklama",
    }
}

#[test]
fn json_values_map_onto_field_kinds() {
    let draft = DraftRecord::from_json(json!({
        "olay_tarihi": "2025-03-10",
        "olay_yeri": "Acil Servis",
        "tekrar_sayisi": 2,
        "bildirim_anonim": true,
    }))
    .unwrap();

    assert_eq!(draft.get("olay_tarihi"), Some(&FieldValue::Date(date(2025, 3, 10))));
    assert_eq!(draft.get("olay_yeri"), Some(&FieldValue::text("Acil Servis")));
    assert_eq!(draft.get("tekrar_sayisi"), Some(&FieldValue::Number(2.0)));
    assert_eq!(draft.get("bildirim_anonim"), Some(&FieldValue::Bool(true)));
}

#[test]
fn non_object_drafts_are_rejected() {
    let err = DraftRecord::from_json(json!(["olay_yeri"])).unwrap_err();
    assert!(matches!(err, CoreError::DraftNotAnObject(_)));
}

#[test]
fn blank_means_absent_or_whitespace() {
    let draft: DraftRecord = [("a", "  "), ("b", "x")].into_iter().collect();
    assert!(draft.is_blank("a"));
    assert!(!draft.is_blank("b"));
    assert!(draft.is_blank("missing"));
    assert!(!FieldValue::Bool(false).is_blank());
    assert!(FieldValue::Number(f64::NAN).is_blank());
}

#[test]
fn text_reads_empty_for_non_text() {
    let draft = DraftRecord::new().with_field("n", 3.0);
    assert_eq!(draft.text("n"), "");
    assert_eq!(draft.text("missing"), "");
}

#[test]
fn conversions_parse_text() {
    assert_eq!(FieldValue::text(" 4 ").as_number(), Some(4.0));
    assert_eq!(FieldValue::text("dört").as_number(), None);
    assert_eq!(FieldValue::text("2025-01-31").as_date(), Some(date(2025, 1, 31)));
    assert_eq!(FieldValue::text("2025-02-30").as_date(), None);
}

#[test]
fn payload_rendering() {
    assert_eq!(FieldValue::text("  not ").to_payload(), json!("not"));
    assert_eq!(FieldValue::Number(3.0).to_payload(), json!(3));
    assert_eq!(FieldValue::Number(2.5).to_payload(), json!(2.5));
    assert_eq!(FieldValue::Date(date(2024, 12, 1)).to_payload(), json!("2024-12-01"));
}

#[test]
fn updates_are_pure() {
    let original = DraftRecord::new().with_field("a", "1");
    let updated = original.clone().with_field("a", "2").without_fields(["b"]);

    assert_eq!(original.text("a"), "1");
    assert_eq!(updated.text("a"), "2");
    assert_eq!(updated.get("b"), Some(&FieldValue::empty()));
    assert_eq!(updated.len(), 2);
}

#[test]
fn seeding_keeps_existing_values() {
    let defaults: DraftRecord = [("a", "default"), ("b", "default")].into_iter().collect();
    let existing = DraftRecord::new().with_field("a", "kayıtlı").with_field("id", "r-1");
    let merged = existing.seeded_from(defaults);

    assert_eq!(merged.text("a"), "kayıtlı");
    assert_eq!(merged.text("b"), "default");
    assert_eq!(merged.text("id"), "r-1");
}

#[test]
fn form_kinds_round_trip_through_their_names() {
    for kind in FormKind::ALL {
        assert_eq!(kind.as_str().parse::<FormKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), kind.as_str());
    }
    assert!(matches!(
        "kalite".parse::<FormKind>(),
        Err(CoreError::UnknownFormKind(_))
    ));
    assert_eq!(FormKind::Emergency.taxonomy().id(), "acil_durum");
}

#[test]
fn taxonomy_ids() {
    assert_eq!("hasta_guvenligi".parse::<TaxonomyKind>().unwrap(), TaxonomyKind::PatientSafety);
    assert_eq!(TaxonomyKind::EmployeeSafety.to_string(), "calisan_guvenligi");
    assert!("patient_safety".parse::<TaxonomyKind>().is_err());
}

#[test]
fn classification_levels() {
    let fields = event_fields();
    assert_eq!(
        fields.levels(),
        ["olay_kategorisi", "olay_alt_kategorisi", "olay_kisa_aciklama"]
    );
    assert_eq!(
        fields.descendants_of("olay_kategorisi"),
        ["olay_alt_kategorisi", "olay_kisa_aciklama"]
    );
    assert!(fields.descendants_of("olay_kisa_aciklama").is_empty());
    assert!(fields.descendants_of("olay_yeri").is_empty());

    let flat = dof_fields();
    assert_eq!(flat.descendants_of("dof_kategorisi"), ["kisa_aciklama"]);
}

#[test]
fn selection_is_trimmed() {
    let draft = DraftRecord::new()
        .with_field("dof_kategorisi", " atik_yonetimi ")
        .with_field("kisa_aciklama", "");
    let selection = dof_fields().selection(&draft);

    assert_eq!(selection.category, "atik_yonetimi");
    assert_eq!(selection.sub_category(), None);
    assert_eq!(selection.description(), None);
    assert!(!selection.is_empty());
    assert!(dof_fields().selection(&DraftRecord::new()).is_empty());
}
