//! 基础遗传学概念数据

use crate::models::{Complexity, ConceptRecord};

pub fn table() -> Vec<ConceptRecord> {
    vec![
        ConceptRecord::new(
            "基因",
            "遗传学",
            Complexity::Basic,
            0.8,
            &["dna_structure", "gene_location", "gene_expression"],
            &["DNA", "遗传信息", "蛋白质", "等位基因", "基因座"],
        ),
        ConceptRecord::new(
            "DNA",
            "分子遗传学",
            Complexity::Basic,
            0.95,
            &["double_helix", "nucleotide_structure", "base_pairing"],
            &["脱氧核糖核酸", "双螺旋", "核苷酸", "碱基", "磷酸", "脱氧核糖"],
        ),
        ConceptRecord::new(
            "RNA",
            "分子遗传学",
            Complexity::Basic,
            0.85,
            &["rna_structure", "rna_types", "transcription"],
            &["核糖核酸", "mRNA", "tRNA", "rRNA", "单链", "核糖"],
        ),
        ConceptRecord::new(
            "染色体",
            "细胞遗传学",
            Complexity::Basic,
            0.9,
            &["chromosome_structure", "karyotype", "chromosome_number"],
            &["染色质", "着丝粒", "端粒", "同源染色体", "性染色体", "常染色体"],
        ),
        ConceptRecord::new(
            "性染色体",
            "遗传学",
            Complexity::Basic,
            0.85,
            &["sex_chromosomes", "xy_system", "sex_determination"],
            &["X染色体", "Y染色体", "性别决定", "伴性遗传"],
        ),
        ConceptRecord::new(
            "细胞分裂",
            "细胞生物学",
            Complexity::Basic,
            0.9,
            &["cell_division_stages", "mitosis_vs_meiosis"],
            &["有丝分裂", "减数分裂", "细胞周期", "纺锤体", "染色体分配"],
        ),
        ConceptRecord::new(
            "有丝分裂",
            "细胞生物学",
            Complexity::Intermediate,
            0.95,
            &["mitosis_stages", "chromosome_movement"],
            &["间期", "前期", "中期", "后期", "末期"],
        ),
        ConceptRecord::new(
            "中心法则",
            "分子遗传学",
            Complexity::Basic,
            0.9,
            &["central_dogma", "information_flow"],
            &["DNA", "RNA", "蛋白质", "转录", "翻译", "逆转录"],
        ),
    ]
}
