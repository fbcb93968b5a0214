use std::sync::LazyLock;

use kalite_core::models::classification::ClassificationFields;
use kalite_core::models::form::{FormKind, TaxonomyKind};

use crate::form::FormAdapter;
use crate::step::WizardStep;

use super::patient_safety::reporter_named_unless_anonymous;
use super::{HARM_LEVELS, classification, date, flag, long_text, number, select, text};

/// Employee-safety incident report, four steps.
pub struct EmployeeSafetyForm;

impl FormAdapter for EmployeeSafetyForm {
    fn kind(&self) -> FormKind {
        FormKind::EmployeeSafety
    }

    fn title(&self) -> &str {
        "Çalışan Güvenliği Olay Bildirimi"
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
                        text("calisan_birimi", "Çalışanın birimi"),
                        text("calisan_gorevi", "Çalışanın görevi"),
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
                        number("is_gunu_kaybi", "İş günü kaybı", 0.0, 0.0),
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
            taxonomy: TaxonomyKind::EmployeeSafety,
            category: "olay_kategorisi",
            sub_category: Some("olay_alt_kategorisi"),
            description: "olay_kisa_aciklama",
        }
    }
}
