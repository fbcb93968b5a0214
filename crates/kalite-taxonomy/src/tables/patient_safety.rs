use std::sync::{Arc, LazyLock};

use crate::node::TaxonomyNode;
use crate::tree::TreeTable;

use super::sub;

/// Patient-safety event classification: category → sub-category →
/// description, each category with its own sub-table.
pub fn table() -> Arc<TreeTable> {
    static TABLE: LazyLock<Arc<TreeTable>> = LazyLock::new(|| {
        let roots = vec![
            TaxonomyNode::branch(
                "ilac_guvenligi",
                "İlaç Güvenliği",
                vec![
                    sub(
                        "receteleme",
                        "Reçeteleme",
                        &[
                            ("yanlis_ilac", "Yanlış ilaç order edilmesi"),
                            ("yanlis_doz", "Yanlış doz order edilmesi"),
                            ("alerji_gozardi", "Bilinen alerjinin göz ardı edilmesi"),
                            ("okunaksiz_order", "Okunaksız veya eksik order"),
                        ],
                    ),
                    sub(
                        "uygulama",
                        "İlaç Uygulama",
                        &[
                            ("yanlis_hasta", "İlacın yanlış hastaya uygulanması"),
                            ("yanlis_yol", "İlacın yanlış yoldan uygulanması"),
                            ("yanlis_zaman", "İlacın yanlış zamanda uygulanması"),
                            ("doz_atlama", "Dozun atlanması"),
                            ("infuzyon_hizi", "İnfüzyon hızının yanlış ayarlanması"),
                        ],
                    ),
                    sub(
                        "saklama",
                        "İlaç Saklama",
                        &[
                            ("soguk_zincir_kirilmasi", "Soğuk zincirin kırılması"),
                            ("skt_gecmis_uygulama", "Son kullanma tarihi geçmiş ilacın uygulanması"),
                            ("benzer_ambalaj", "Benzer ambalajlı ilaçların karıştırılması"),
                        ],
                    ),
                ],
            ),
            TaxonomyNode::branch(
                "hasta_dusmesi",
                "Hasta Düşmesi",
                vec![
                    sub(
                        "yataktan_dusme",
                        "Yataktan Düşme",
                        &[
                            ("kenarlik_kapali_degil", "Yatak kenarlığının kaldırılmaması"),
                            ("fren_acik", "Yatak frenlerinin açık bırakılması"),
                            ("sedasyon_sonrasi", "Sedasyon sonrası gözetimsiz bırakılma"),
                        ],
                    ),
                    sub(
                        "yururken_dusme",
                        "Yürürken Düşme",
                        &[
                            ("kaygan_zemin", "Kaygan zemin nedeniyle düşme"),
                            ("refakatsiz_mobilizasyon", "Refakatsiz mobilizasyon"),
                            ("uygunsuz_terlik", "Uygun olmayan ayakkabı/terlik"),
                        ],
                    ),
                    sub(
                        "banyo_tuvalet",
                        "Banyo/Tuvalette Düşme",
                        &[
                            ("tutunma_bari_yok", "Tutunma barının bulunmaması"),
                            ("cagri_zili_ulasilamaz", "Hasta çağrı ziline ulaşılamaması"),
                        ],
                    ),
                ],
            ),
            TaxonomyNode::branch(
                "kimlik_dogrulama",
                "Hasta Kimlik Doğrulama",
                vec![
                    sub(
                        "kol_bandi",
                        "Kimlik Bandı",
                        &[
                            ("band_takilmamis", "Kimlik bandının takılmaması"),
                            ("band_bilgi_hatali", "Kimlik bandında hatalı bilgi"),
                        ],
                    ),
                    sub(
                        "numune_etiketleme",
                        "Numune Etiketleme",
                        &[
                            ("etiketsiz_numune", "Etiketsiz numune gönderilmesi"),
                            ("yanlis_etiket", "Numuneye başka hastanın etiketinin yapıştırılması"),
                        ],
                    ),
                ],
            ),
            TaxonomyNode::branch(
                "transfuzyon",
                "Kan Transfüzyonu",
                vec![
                    sub(
                        "uygunsuz_kan",
                        "Uygunsuz Kan Ürünü",
                        &[
                            ("kan_grubu_uyumsuz", "Kan grubu uyumsuz ürün verilmesi"),
                            ("cross_match_yok", "Cross-match yapılmadan transfüzyon"),
                        ],
                    ),
                    sub(
                        "transfuzyon_reaksiyonu",
                        "Transfüzyon Reaksiyonu",
                        &[
                            ("reaksiyon_bildirilmedi", "Reaksiyonun bildirilmemesi"),
                            ("izlem_eksik", "Transfüzyon sırasında vital bulgu izleminin yapılmaması"),
                        ],
                    ),
                ],
            ),
            TaxonomyNode::branch(
                "cerrahi_guvenlik",
                "Cerrahi Güvenlik",
                vec![
                    sub(
                        "taraf_hatasi",
                        "Taraf/Bölge Hatası",
                        &[
                            ("yanlis_taraf", "Yanlış taraf ameliyatı"),
                            ("isaretleme_yok", "Ameliyat bölgesinin işaretlenmemesi"),
                        ],
                    ),
                    sub(
                        "kontrol_listesi",
                        "Güvenli Cerrahi Kontrol Listesi",
                        &[
                            ("liste_doldurulmadi", "Kontrol listesinin doldurulmaması"),
                            ("mola_yapilmadi", "Cerrahi molanın yapılmaması"),
                        ],
                    ),
                    sub(
                        "yabanci_cisim",
                        "Yabancı Cisim Unutulması",
                        &[
                            ("gazli_bez", "Gazlı bez unutulması"),
                            ("cerrahi_alet", "Cerrahi alet unutulması"),
                        ],
                    ),
                ],
            ),
        ];
        Arc::new(TreeTable::new("hasta_guvenligi", "Hasta Güvenliği Olayları", roots))
    });
    Arc::clone(&TABLE)
}
