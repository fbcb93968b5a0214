use std::sync::{Arc, LazyLock};

use crate::node::TaxonomyNode;
use crate::tree::TreeTable;

use super::sub;

/// Employee-safety event classification.
pub fn table() -> Arc<TreeTable> {
    static TABLE: LazyLock<Arc<TreeTable>> = LazyLock::new(|| {
        let roots = vec![
            TaxonomyNode::branch(
                "kesici_delici_yaralanma",
                "Kesici-Delici Alet Yaralanması",
                vec![
                    sub(
                        "igne_batmasi",
                        "İğne Batması",
                        &[
                            ("kapak_takma", "İğnenin kapağı takılırken batma"),
                            ("atik_kutusu", "Atık kutusuna atılırken batma"),
                            ("yere_dusen", "Yere düşen iğnenin batması"),
                        ],
                    ),
                    sub(
                        "kesik",
                        "Kesik",
                        &[
                            ("bisturi", "Bistüri ile kesilme"),
                            ("kirik_ampul", "Kırık ampul ile kesilme"),
                        ],
                    ),
                ],
            ),
            TaxonomyNode::branch(
                "kan_sivi_temasi",
                "Kan ve Vücut Sıvısı Teması",
                vec![
                    sub(
                        "mukoza_temasi",
                        "Mukoza Teması",
                        &[
                            ("goz_sicramasi", "Göze sıçrama"),
                            ("agiz_sicramasi", "Ağız mukozasına sıçrama"),
                        ],
                    ),
                    sub(
                        "deri_temasi",
                        "Deri Teması",
                        &[
                            ("bozuk_deri", "Bütünlüğü bozuk deriye temas"),
                            ("eldivensiz", "Eldivensiz temas"),
                        ],
                    ),
                ],
            ),
            TaxonomyNode::branch(
                "siddet",
                "Şiddet",
                vec![
                    sub(
                        "sozel_siddet",
                        "Sözel Şiddet",
                        &[
                            ("hasta_yakini", "Hasta yakını tarafından sözel şiddet"),
                            ("hasta", "Hasta tarafından sözel şiddet"),
                        ],
                    ),
                    sub(
                        "fiziksel_siddet",
                        "Fiziksel Şiddet",
                        &[
                            ("darp", "Darp"),
                            ("esya_firlatma", "Eşya fırlatma"),
                        ],
                    ),
                ],
            ),
            TaxonomyNode::branch(
                "is_kazasi",
                "İş Kazası",
                vec![
                    sub(
                        "kayma_dusme",
                        "Kayma/Düşme",
                        &[
                            ("islak_zemin", "Islak zeminde kayma"),
                            ("merdiven", "Merdivenden düşme"),
                        ],
                    ),
                    sub(
                        "elektrik",
                        "Elektrik Çarpması",
                        &[
                            ("hasarli_kablo", "Hasarlı kablodan elektrik çarpması"),
                            ("topraklama", "Topraklaması olmayan cihaz"),
                        ],
                    ),
                    sub(
                        "kimyasal",
                        "Kimyasal Maruziyet",
                        &[
                            ("dezenfektan", "Dezenfektan solunması"),
                            ("sitotoksik_dokulme", "Sitotoksik ilaç dökülmesi"),
                        ],
                    ),
                ],
            ),
            TaxonomyNode::branch(
                "ergonomi",
                "Ergonomik Riskler",
                vec![sub(
                    "hasta_tasima",
                    "Hasta Taşıma",
                    &[
                        ("bel_zorlanmasi", "Hasta kaldırırken bel zorlanması"),
                        ("transfer_ekipmani", "Transfer ekipmanı bulunmaması"),
                    ],
                )],
            ),
        ];
        Arc::new(TreeTable::new("calisan_guvenligi", "Çalışan Güvenliği Olayları", roots))
    });
    Arc::clone(&TABLE)
}
