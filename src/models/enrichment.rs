//! 遗传学丰富内容模型

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::visualization::{VisualizationSpec, VisualizationType};

/// 公式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formula {
    /// 公式名称
    pub key: String,
    /// LaTeX 表示
    pub latex: String,
    /// 变量含义（符号 -> 说明）
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

impl Formula {
    pub fn new(key: &str, latex: &str, variables: &[(&str, &str)]) -> Self {
        Self {
            key: key.to_string(),
            latex: latex.to_string(),
            variables: variables
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// 实例
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkedExample {
    pub name: String,
    pub description: String,
}

impl WorkedExample {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// 概念的详细丰富内容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentRecord {
    /// 概念名称
    pub concept: String,
    /// 定义
    pub definition: String,
    /// 核心原理（有序）
    pub principles: Vec<String>,
    /// 相关公式
    pub formulas: Vec<Formula>,
    /// 典型例子
    pub examples: Vec<WorkedExample>,
    /// 常见误区
    pub misconceptions: Vec<String>,
    /// 配套可视化方案
    pub visualization: VisualizationSpec,
}

impl EnrichmentRecord {
    /// 未收录概念的默认桩记录
    ///
    /// 列表字段为空，定义与可视化标题由概念名模板化生成。
    pub fn default_for(concept: &str) -> Self {
        Self {
            concept: concept.to_string(),
            definition: format!("{}的相关概念解释", concept),
            principles: Vec::new(),
            formulas: Vec::new(),
            examples: Vec::new(),
            misconceptions: Vec::new(),
            visualization: VisualizationSpec::new(
                VisualizationType::KnowledgeGraph,
                &format!("{} 可视化", concept),
                &format!("通过可视化帮助理解{}的核心概念", concept),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_templated_from_concept() {
        let record = EnrichmentRecord::default_for("端粒酶");
        assert!(record.definition.contains("端粒酶"));
        assert!(record.visualization.title.contains("端粒酶"));
        assert!(record.principles.is_empty());
        assert!(record.formulas.is_empty());
        assert!(record.examples.is_empty());
        assert!(record.misconceptions.is_empty());
    }

    #[test]
    fn test_formula_variables() {
        let formula = Formula::new(
            "基因频率平衡公式",
            "p + q = 1",
            &[("p", "显性基因频率"), ("q", "隐性基因频率")],
        );
        assert_eq!(formula.variables.len(), 2);
        assert_eq!(formula.variables["p"], "显性基因频率");
    }
}
