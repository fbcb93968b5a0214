use std::sync::{Arc, LazyLock};

use crate::flat::FlatTable;

use super::items;

/// DÖF categories and their short-description lists.
/// Descriptions are keyed by category only.
pub fn table() -> Arc<FlatTable> {
    static TABLE: LazyLock<Arc<FlatTable>> = LazyLock::new(|| {
        let table = FlatTable::new("dof", "DÖF Kategorileri")
            .with_category(
                "atik_yonetimi",
                "Atık Yönetimi",
                items(&[
                    ("tibbi_atik_ayristirma", "Tıbbi atıkların evsel atıklarla karıştırılması"),
                    ("kesici_delici_doluluk", "Kesici-delici atık kutusunun 3/4'ten fazla doldurulması"),
                    ("kesici_delici_kapak", "Kesici-delici atık kutusunun ağzının açık bırakılması"),
                    ("torba_renk_hatasi", "Atıkların yanlış renk torbaya atılması"),
                    ("torba_etiketsiz", "Atık torbasının etiketlenmemesi"),
                    ("torba_doluluk", "Atık torbasının 3/4'ten fazla doldurulması"),
                    ("gecici_depo_kapi", "Geçici atık deposu kapısının açık bırakılması"),
                    ("gecici_depo_temizlik", "Geçici atık deposunun temizlik ve dezenfeksiyonunun yapılmaması"),
                    ("gecici_depo_sure", "Atıkların geçici depoda yasal süreden fazla bekletilmesi"),
                    ("toplama_araci", "Atık toplama aracının uygun olmaması"),
                    ("tasima_guzergahi", "Atık taşıma güzergahına uyulmaması"),
                    ("koruyucu_ekipman", "Atık personelinin kişisel koruyucu ekipman kullanmaması"),
                    ("kimyasal_atik", "Kimyasal atıkların ayrı toplanmaması"),
                    ("farmasotik_atik", "Farmasötik atıkların uygun bertaraf edilmemesi"),
                    ("sitotoksik_atik", "Sitotoksik atıkların ayrı toplanmaması"),
                    ("patolojik_atik", "Patolojik atıkların uygun şekilde toplanmaması"),
                    ("radyoaktif_atik", "Radyoaktif atıkların kurallara uygun saklanmaması"),
                    ("ambalaj_atigi", "Ambalaj atıklarının geri dönüşüme ayrılmaması"),
                    ("miktar_kaydi", "Atık miktarlarının kayıt altına alınmaması"),
                    ("yonetim_plani", "Atık yönetim planının güncel olmaması"),
                    ("personel_egitimi", "Atık personeline eğitim verilmemesi"),
                    ("dokulme_mudahale", "Atık dökülmelerine uygun müdahale edilmemesi"),
                ]),
            )
            .with_category(
                "enfeksiyon_kontrolu",
                "Enfeksiyon Kontrolü",
                items(&[
                    ("el_hijyeni", "El hijyeni kurallarına uyulmaması"),
                    ("izolasyon_onlemleri", "İzolasyon önlemlerinin uygulanmaması"),
                    ("sterilizasyon_kaydi", "Sterilizasyon kayıtlarının eksik tutulması"),
                    ("dezenfektan_kullanimi", "Dezenfektanların uygun seyreltilmemesi"),
                    ("kateter_bakimi", "Kateter bakım protokolüne uyulmaması"),
                    ("surveyans_bildirimi", "Sürveyans bildiriminin zamanında yapılmaması"),
                ]),
            )
            .with_category(
                "ilac_yonetimi",
                "İlaç Yönetimi",
                items(&[
                    ("skt_takibi", "Son kullanma tarihi geçmiş ilaç bulunması"),
                    ("soguk_zincir", "Soğuk zincir sıcaklık takibinin yapılmaması"),
                    ("yuksek_riskli_ilac", "Yüksek riskli ilaçların ayrı saklanmaması"),
                    ("narkotik_kayit", "Narkotik ilaç kayıtlarında uyumsuzluk"),
                    ("acik_flakon", "Açılan flakonlara açılış tarihi yazılmaması"),
                ]),
            )
            .with_category(
                "tibbi_cihaz",
                "Tıbbi Cihaz Yönetimi",
                items(&[
                    ("kalibrasyon", "Cihaz kalibrasyonunun süresinin geçmesi"),
                    ("bakim_plani", "Periyodik bakım planına uyulmaması"),
                    ("ariza_bildirimi", "Arızalı cihazın etiketlenmemesi"),
                    ("kullanici_egitimi", "Cihaz kullanıcı eğitiminin verilmemesi"),
                ]),
            )
            .with_category(
                "hasta_kayitlari",
                "Hasta Kayıtları",
                items(&[
                    ("onam_eksik", "Aydınlatılmış onam formunun eksik olması"),
                    ("epikriz_gecikme", "Epikrizin zamanında yazılmaması"),
                    ("imzasiz_order", "Tedavi orderinin imzasız olması"),
                    ("kimlik_bilgisi", "Hasta kimlik bilgilerinin eksik girilmesi"),
                ]),
            )
            .with_category(
                "tesis_guvenligi",
                "Tesis Güvenliği",
                items(&[
                    ("yangin_tupu", "Yangın söndürme tüpü kontrolünün yapılmaması"),
                    ("acil_cikis", "Acil çıkış yolunun kapatılması"),
                    ("elektrik_panosu", "Elektrik panosunun kilitsiz bırakılması"),
                    ("zemin_islak", "Islak zemin uyarı levhasının konulmaması"),
                ]),
            )
            .with_category(
                "personel_egitimi",
                "Personel Eğitimi",
                items(&[
                    ("oryantasyon", "Yeni personele oryantasyon eğitimi verilmemesi"),
                    ("yillik_plan", "Yıllık eğitim planına uyulmaması"),
                    ("egitim_kaydi", "Eğitim katılım kayıtlarının tutulmaması"),
                ]),
            )
            .with_category(
                "hasta_haklari",
                "Hasta Hakları",
                items(&[
                    ("mahremiyet", "Hasta mahremiyetine uyulmaması"),
                    ("bilgilendirme", "Hastanın tedavisi hakkında bilgilendirilmemesi"),
                    ("sikayet_yaniti", "Hasta şikayetine süresi içinde yanıt verilmemesi"),
                ]),
            );
        Arc::new(table)
    });
    Arc::clone(&TABLE)
}
