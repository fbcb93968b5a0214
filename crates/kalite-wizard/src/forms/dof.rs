use std::sync::LazyLock;

use kalite_core::models::classification::ClassificationFields;
use kalite_core::models::draft::{DraftRecord, FieldValue};
use kalite_core::models::form::{FormKind, TaxonomyKind};

use crate::form::FormAdapter;
use crate::step::WizardStep;

use super::{classification, date, long_text, number, select, text};

const DOF_TYPES: &[(&str, &str)] = &[
    ("duzeltici", "Düzeltici Faaliyet"),
    ("onleyici", "Önleyici Faaliyet"),
];

const DOF_SOURCES: &[(&str, &str)] = &[
    ("ic_denetim", "İç Denetim"),
    ("dis_denetim", "Dış Denetim"),
    ("hasta_sikayeti", "Hasta Şikayeti"),
    ("calisan_bildirimi", "Çalışan Bildirimi"),
    ("olay_bildirimi", "Olay Bildirimi"),
    ("oz_degerlendirme", "Öz Değerlendirme"),
    ("yonetim_gozden_gecirme", "Yönetimin Gözden Geçirmesi"),
];

const PRIORITIES: &[(&str, &str)] = &[
    ("dusuk", "Düşük"),
    ("orta", "Orta"),
    ("yuksek", "Yüksek"),
];

/// Corrective/preventive action (DÖF) creation, five steps.
pub struct DofForm;

/// The action deadline cannot precede the finding date.
fn deadline_after_finding(draft: &DraftRecord) -> Option<(&'static str, String)> {
    let found = draft.get("tespit_tarihi").and_then(FieldValue::as_date)?;
    let deadline = draft.get("termin_tarihi").and_then(FieldValue::as_date)?;
    (deadline < found).then(|| {
        (
            "termin_tarihi",
            "Termin tarihi tespit tarihinden önce olamaz.".to_string(),
        )
    })
}

impl FormAdapter for DofForm {
    fn kind(&self) -> FormKind {
        FormKind::Dof
    }

    fn title(&self) -> &str {
        "DÖF Oluştur"
    }

    fn steps(&self) -> &[WizardStep] {
        static STEPS: LazyLock<Vec<WizardStep>> = LazyLock::new(|| {
            vec![
                WizardStep::new(
                    1,
                    "Genel Bilgiler",
                    vec![
                        date("tespit_tarihi", "Tespit tarihi"),
                        text("sorumlu_birim", "Sorumlu birim"),
                        select("dof_turu", "DÖF türü", DOF_TYPES),
                    ],
                ),
                WizardStep::new(
                    2,
                    "Sınıflandırma",
                    vec![
                        select("dof_kaynagi", "DÖF kaynağı", DOF_SOURCES),
                        classification("dof_kategorisi", "DÖF kategorisi"),
                        classification("kisa_aciklama", "Kısa açıklama"),
                    ],
                ),
                WizardStep::new(
                    3,
                    "Tespit",
                    vec![
                        long_text("tespit_detayi", "Tespit detayı"),
                        long_text("kok_neden", "Kök neden").optional(),
                    ],
                ),
                WizardStep::new(
                    4,
                    "Faaliyet Planı",
                    vec![
                        long_text("planlanan_faaliyet", "Planlanan faaliyet"),
                        date("termin_tarihi", "Termin tarihi"),
                        number("tekrar_sayisi", "Tekrar sayısı", 1.0, 1.0),
                    ],
                )
                .with_check(deadline_after_finding),
                WizardStep::new(
                    5,
                    "Onay",
                    vec![
                        text("onaylayan", "Onaylayan"),
                        select("oncelik", "Öncelik", PRIORITIES),
                        long_text("ek_not", "Ek not").optional(),
                    ],
                ),
            ]
        });
        &STEPS
    }

    fn classification(&self) -> ClassificationFields {
        ClassificationFields {
            taxonomy: TaxonomyKind::Dof,
            category: "dof_kategorisi",
            sub_category: None,
            description: "kisa_aciklama",
        }
    }
}
