//! 分子遗传学概念数据

use crate::models::{Complexity, ConceptRecord};

pub fn table() -> Vec<ConceptRecord> {
    vec![
        ConceptRecord::new(
            "DNA复制",
            "分子遗传学",
            Complexity::Intermediate,
            0.9,
            &["dna_replication_fork", "semi_conservative"],
            &["半保留复制", "复制叉", "DNA聚合酶", "引物", "冈崎片段"],
        ),
        ConceptRecord::new(
            "转录与翻译",
            "分子遗传学",
            Complexity::Intermediate,
            0.9,
            &["central_dogma", "protein_synthesis"],
            &["转录", "翻译", "mRNA", "tRNA", "核糖体", "密码子", "反密码子"],
        ),
        ConceptRecord::new(
            "基因突变",
            "遗传学",
            Complexity::Intermediate,
            0.8,
            &["mutation_types", "dna_sequence_change"],
            &["点突变", "插入", "缺失", "置换", "移码突变"],
        ),
    ]
}
