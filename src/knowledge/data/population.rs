//! 群体遗传学概念数据

use crate::models::{Complexity, ConceptRecord};

pub fn table() -> Vec<ConceptRecord> {
    vec![ConceptRecord::new(
        "哈代-温伯格定律",
        "群体遗传学",
        Complexity::Advanced,
        0.7,
        &["allele_frequency", "population_equilibrium"],
        &["基因频率", "基因型频率", "遗传平衡", "理想群体"],
    )]
}
