use std::sync::{Arc, LazyLock};

use crate::flat::FlatTable;

use super::items;

/// Hospital emergency codes and the event descriptions under each.
pub fn table() -> Arc<FlatTable> {
    static TABLE: LazyLock<Arc<FlatTable>> = LazyLock::new(|| {
        let table = FlatTable::new("acil_durum", "Acil Durum Kodları")
            .with_category(
                "mavi_kod",
                "Mavi Kod (Kardiyopulmoner Arrest)",
                items(&[
                    ("yatan_hasta_arrest", "Serviste yatan hastada arrest"),
                    ("poliklinik_arrest", "Poliklinik alanında arrest"),
                    ("ziyaretci_arrest", "Ziyaretçi veya refakatçide arrest"),
                    ("calisan_arrest", "Çalışanda arrest"),
                    ("ekip_gecikmesi", "Mavi kod ekibinin geç ulaşması"),
                ]),
            )
            .with_category(
                "pembe_kod",
                "Pembe Kod (Bebek/Çocuk Kaçırma)",
                items(&[
                    ("bebek_kacirma", "Bebek kaçırma girişimi"),
                    ("cocuk_kaybolma", "Çocuk hastanın kaybolması"),
                    ("kapi_kontrol", "Çıkış kapılarının zamanında kapatılmaması"),
                ]),
            )
            .with_category(
                "beyaz_kod",
                "Beyaz Kod (Çalışana Şiddet)",
                items(&[
                    ("sozlu_saldiri", "Çalışana sözlü saldırı"),
                    ("fiziksel_saldiri", "Çalışana fiziksel saldırı"),
                    ("guvenlik_gecikmesi", "Güvenlik biriminin geç ulaşması"),
                ]),
            )
            .with_category(
                "kirmizi_kod",
                "Kırmızı Kod (Yangın)",
                items(&[
                    ("yangin_baslangici", "Yangın başlangıcı"),
                    ("duman_algilama", "Duman algılama sistemi alarmı"),
                    ("tahliye", "Hasta tahliyesi gerektiren yangın"),
                ]),
            )
            .with_category(
                "turuncu_kod",
                "Turuncu Kod (KBRN)",
                items(&[
                    ("kimyasal_maruziyet", "Kimyasal maruziyetli hasta kabulü"),
                    ("radyasyon_sizintisi", "Radyasyon sızıntısı"),
                    ("dekontaminasyon", "Dekontaminasyon alanının hazır olmaması"),
                ]),
            );
        Arc::new(table)
    });
    Arc::clone(&TABLE)
}
