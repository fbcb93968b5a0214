use std::sync::LazyLock;

use kalite_core::models::classification::ClassificationFields;
use kalite_core::models::form::{FormKind, TaxonomyKind};

use crate::form::FormAdapter;
use crate::step::WizardStep;

use super::{classification, date, long_text, number, select, text};

const OUTCOMES: &[(&str, &str)] = &[
    ("basarili", "Başarılı müdahale"),
    ("basarisiz", "Başarısız müdahale"),
    ("devam_ediyor", "Müdahale devam ediyor"),
];

/// Emergency code event, three steps.
pub struct EmergencyForm;

impl FormAdapter for EmergencyForm {
    fn kind(&self) -> FormKind {
        FormKind::Emergency
    }

    fn title(&self) -> &str {
        "Acil Durum Olay Bildirimi"
    }

    fn steps(&self) -> &[WizardStep] {
        static STEPS: LazyLock<Vec<WizardStep>> = LazyLock::new(|| {
            vec![
                WizardStep::new(
                    1,
                    "Olay Bilgileri",
                    vec![date("olay_tarihi", "Olay tarihi"), text("olay_yeri", "Olay yeri")],
                ),
                WizardStep::new(
                    2,
                    "Kod Sınıflandırması",
                    vec![
                        classification("acil_kod", "Acil durum kodu"),
                        classification("acil_kisa_aciklama", "Kısa açıklama"),
                        number("ekip_ulasma_suresi", "Ekip ulaşma süresi (dk)", 0.0, 0.0),
                    ],
                ),
                WizardStep::new(
                    3,
                    "Müdahale Özeti",
                    vec![
                        long_text("mudahale_ozeti", "Müdahale özeti"),
                        select("sonuc", "Sonuç", OUTCOMES),
                    ],
                ),
            ]
        });
        &STEPS
    }

    fn classification(&self) -> ClassificationFields {
        ClassificationFields {
            taxonomy: TaxonomyKind::Emergency,
            category: "acil_kod",
            sub_category: None,
            description: "acil_kisa_aciklama",
        }
    }
}
