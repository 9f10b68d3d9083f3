//! 静态数据表
//!
//! 预定义的遗传学概念数据，按领域分表维护。注册表在进程启动时
//! 将这些表按概念键合并（后表覆盖前表），避免频繁调用 AI。

pub mod basic_concepts;
pub mod chromosomal;
pub mod enrichment;
pub mod hardcoded_viz;
pub mod mendelian;
pub mod molecular;
pub mod population;
pub mod prerequisites;

use crate::models::ConceptRecord;

/// 全部概念分析表，按合并顺序排列（后表覆盖前表）
pub fn concept_tables() -> Vec<Vec<ConceptRecord>> {
    vec![
        basic_concepts::table(),
        mendelian::table(),
        molecular::table(),
        chromosomal::table(),
        population::table(),
    ]
}
