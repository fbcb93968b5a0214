use std::sync::LazyLock;

use kalite_core::models::classification::ClassificationFields;
use kalite_core::models::draft::{DraftRecord, FieldValue};
use kalite_core::models::form::{FormKind, TaxonomyKind};

use crate::form::FormAdapter;
use crate::step::WizardStep;
use crate::validation;

use super::{HARM_LEVELS, classification, date, flag, long_text, number, select, text};

/// Patient-safety incident report, four steps.
pub struct PatientSafetyForm;

/// A named report needs the reporter's name.
pub(super) fn reporter_named_unless_anonymous(
    draft: &DraftRecord,
) -> Option<(&'static str, String)> {
    let anonymous = draft
        .get("bildirim_anonim")
        .and_then(FieldValue::as_bool)
        .unwrap_or(false);
    (!anonymous && draft.is_blank("bildiren_ad_soyad"))
        .then(|| ("bildiren_ad_soyad", validation::required("Bildiren ad soyad")))
}

impl FormAdapter for PatientSafetyForm {
    fn kind(&self) -> FormKind {
        FormKind::PatientSafety
    }

    fn title(&self) -> &str {
        "Hasta Güvenliği Olay Bildirimi"
    }

    fn steps(&self) -> &[WizardStep] {
        static STEPS: LazyLock<Vec<WizardStep>> = LazyLock::new(|| {
            vec![
                WizardStep::new(
                    1,
                    "Olay Bilgileri",
                    vec![
                        date("olay_tarihi", "Olay tarihi"),
                        text("olay_yeri", "Olay yeri"),
                        text("bildiren_birim", "Bildiren birim"),
                        text("hasta_protokol_no", "Hasta protokol no").optional(),
                    ],
                ),
                WizardStep::new(
                    2,
                    "Olay Sınıflandırması",
                    vec![
                        classification("olay_kategorisi", "Olay kategorisi"),
                        classification("olay_alt_kategorisi", "Olay alt kategorisi"),
                        classification("olay_kisa_aciklama", "Kısa açıklama"),
                        select("zarar_derecesi", "Zarar derecesi", HARM_LEVELS),
                    ],
                ),
                WizardStep::new(
                    3,
                    "Olay Anlatımı",
                    vec![
                        long_text("olay_detayi", "Olay detayı"),
                        long_text("alinan_onlemler", "Alınan önlemler").optional(),
                        number("tekrar_sayisi", "Tekrar sayısı", 1.0, 1.0),
                    ],
                ),
                WizardStep::new(
                    4,
                    "Bildirim",
                    vec![
                        flag("bildirim_anonim", "Anonim bildirim"),
                        text("bildiren_ad_soyad", "Bildiren ad soyad").optional(),
                    ],
                )
                .with_check(reporter_named_unless_anonymous),
            ]
        });
        &STEPS
    }

    fn classification(&self) -> ClassificationFields {
        ClassificationFields {
            taxonomy: TaxonomyKind::PatientSafety,
            category: "olay_kategorisi",
            sub_category: Some("olay_alt_kategorisi"),
            description: "olay_kisa_aciklama",
        }
    }
}
