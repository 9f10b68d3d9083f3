//! 概念记录模型
//!
//! 概念（Concept）是整个子系统的主查找键，例如 "DNA"、"孟德尔第一定律"。
//! 记录在注册表构建时由多张数据表合并得到，构建后不再变更。

use serde::{Deserialize, Serialize};

/// 概念复杂度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Basic,
    Intermediate,
    Advanced,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Basic => "basic",
            Complexity::Intermediate => "intermediate",
            Complexity::Advanced => "advanced",
        }
    }
}

/// 概念分析记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptRecord {
    /// 概念名称（唯一键）
    pub concept: String,
    /// 所属领域（如：分子遗传学）
    pub domain: String,
    /// 复杂度
    pub complexity: Complexity,
    /// 可视化潜力 (0..1)
    pub visualization_potential: f32,
    /// 建议的可视化方式（按优先级排列）
    pub suggested_visualizations: Vec<String>,
    /// 关键术语
    pub key_terms: Vec<String>,
}

impl ConceptRecord {
    /// 构建一条概念记录
    pub fn new(
        concept: &str,
        domain: &str,
        complexity: Complexity,
        visualization_potential: f32,
        suggested_visualizations: &[&str],
        key_terms: &[&str],
    ) -> Self {
        Self {
            concept: concept.to_string(),
            domain: domain.to_string(),
            complexity,
            visualization_potential: visualization_potential.clamp(0.0, 1.0),
            suggested_visualizations: suggested_visualizations
                .iter()
                .map(|s| s.to_string())
                .collect(),
            key_terms: key_terms.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// 为注册表中不存在的概念合成最小记录
    ///
    /// 知识门面保证三路内容永不为空，未收录的概念落到这个桩记录上。
    pub fn stub(concept: &str) -> Self {
        Self {
            concept: concept.to_string(),
            domain: "遗传学".to_string(),
            complexity: Complexity::Intermediate,
            visualization_potential: 0.5,
            suggested_visualizations: vec!["knowledge_graph".to_string()],
            key_terms: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concept_record_clamps_potential() {
        let record = ConceptRecord::new("DNA", "分子遗传学", Complexity::Basic, 1.5, &[], &[]);
        assert_eq!(record.visualization_potential, 1.0);
    }

    #[test]
    fn test_stub_record_carries_concept_name() {
        let record = ConceptRecord::stub("表观遗传钟");
        assert_eq!(record.concept, "表观遗传钟");
        assert_eq!(record.complexity, Complexity::Intermediate);
        assert!(record.key_terms.is_empty());
    }

    #[test]
    fn test_complexity_serde_lowercase() {
        let json = serde_json::to_string(&Complexity::Advanced).unwrap();
        assert_eq!(json, "\"advanced\"");
        let back: Complexity = serde_json::from_str("\"basic\"").unwrap();
        assert_eq!(back, Complexity::Basic);
    }
}
