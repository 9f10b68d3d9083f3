//! 孟德尔遗传概念数据

use crate::models::{Complexity, ConceptRecord};

pub fn table() -> Vec<ConceptRecord> {
    vec![
        ConceptRecord::new(
            "孟德尔第一定律",
            "遗传学",
            Complexity::Basic,
            0.8,
            &["punnett_square", "inheritance_pattern"],
            &["等位基因", "显性", "隐性", "分离", "配子"],
        ),
        ConceptRecord::new(
            "孟德尔第二定律",
            "遗传学",
            Complexity::Intermediate,
            0.85,
            &["dihybrid_cross", "punnett_square_16"],
            &["自由组合", "两对性状", "独立分配", "配子组合"],
        ),
        ConceptRecord::new(
            "伴性遗传",
            "遗传学",
            Complexity::Intermediate,
            0.9,
            &["sex_chromosome_inheritance", "pedigree_chart"],
            &["性染色体", "X连锁", "Y连锁", "伴性遗传", "携带者"],
        ),
        ConceptRecord::new(
            "连锁互换",
            "遗传学",
            Complexity::Advanced,
            0.85,
            &["chromosome_crossover", "genetic_mapping"],
            &["连锁", "互换", "同源染色体", "交叉", "基因定位"],
        ),
        ConceptRecord::new(
            "基因型与表型",
            "遗传学",
            Complexity::Basic,
            0.75,
            &["genotype_phenotype_mapping"],
            &["基因型", "表型", "表现度", "外显率"],
        ),
    ]
}
