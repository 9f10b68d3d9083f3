//! 细胞遗传学概念数据

use crate::models::{Complexity, ConceptRecord};

pub fn table() -> Vec<ConceptRecord> {
    vec![
        ConceptRecord::new(
            "减数分裂",
            "细胞遗传学",
            Complexity::Intermediate,
            0.95,
            &["meiosis_stages", "chromosome_segregation"],
            &["减数分裂", "配子", "同源染色体", "交叉互换", "四分体"],
        ),
        ConceptRecord::new(
            "染色体变异",
            "细胞遗传学",
            Complexity::Advanced,
            0.85,
            &["chromosome_aberration", "karyotype"],
            &["缺失", "重复", "倒位", "易位", "非整倍体"],
        ),
    ]
}
