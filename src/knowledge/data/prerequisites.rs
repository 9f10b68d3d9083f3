//! 前置知识树数据表
//!
//! 独立于概念分析表维护，允许存在缺口；缺口由解析器以默认树恢复。

use std::collections::HashMap;

use crate::models::PrerequisiteNode;

pub fn table() -> HashMap<String, PrerequisiteNode> {
    let entries = vec![
        (
            "孟德尔第一定律",
            PrerequisiteNode::new(
                "基因",
                1,
                vec![
                    PrerequisiteNode::foundation("DNA", 2),
                    PrerequisiteNode::foundation("染色体", 2),
                ],
            ),
        ),
        (
            "孟德尔第二定律",
            PrerequisiteNode::new(
                "孟德尔第一定律",
                1,
                vec![
                    PrerequisiteNode::foundation("基因", 2),
                    PrerequisiteNode::foundation("配子形成", 2),
                ],
            ),
        ),
        (
            "伴性遗传",
            PrerequisiteNode::new(
                "孟德尔定律",
                1,
                vec![
                    PrerequisiteNode::foundation("性染色体", 2),
                    PrerequisiteNode::foundation("基因", 2),
                ],
            ),
        ),
        (
            "连锁互换",
            PrerequisiteNode::new(
                "孟德尔第二定律",
                1,
                vec![
                    PrerequisiteNode::foundation("同源染色体", 2),
                    PrerequisiteNode::foundation("交叉互换", 2),
                ],
            ),
        ),
        (
            "哈代-温伯格定律",
            PrerequisiteNode::new(
                "孟德尔定律",
                1,
                vec![
                    PrerequisiteNode::foundation("基因频率", 2),
                    PrerequisiteNode::foundation("基因型频率", 2),
                    PrerequisiteNode::foundation("群体", 2),
                ],
            ),
        ),
        (
            "基因型与表型",
            PrerequisiteNode::new(
                "基因",
                1,
                vec![
                    PrerequisiteNode::foundation("DNA", 2),
                    PrerequisiteNode::foundation("蛋白质", 2),
                ],
            ),
        ),
        (
            "DNA复制",
            PrerequisiteNode::new(
                "DNA",
                1,
                vec![
                    PrerequisiteNode::foundation("DNA结构", 2),
                    PrerequisiteNode::foundation("酶", 2),
                ],
            ),
        ),
        (
            "转录与翻译",
            PrerequisiteNode::new(
                "DNA",
                1,
                vec![
                    PrerequisiteNode::foundation("RNA", 2),
                    PrerequisiteNode::foundation("蛋白质合成", 2),
                    PrerequisiteNode::foundation("核糖体", 2),
                ],
            ),
        ),
        (
            "基因突变",
            PrerequisiteNode::new(
                "DNA",
                1,
                vec![
                    PrerequisiteNode::foundation("DNA复制", 2),
                    PrerequisiteNode::foundation("DNA修复", 2),
                ],
            ),
        ),
        (
            "减数分裂",
            PrerequisiteNode::new(
                "细胞分裂",
                1,
                vec![
                    PrerequisiteNode::foundation("有丝分裂", 2),
                    PrerequisiteNode::foundation("染色体", 2),
                    PrerequisiteNode::foundation("配子", 2),
                ],
            ),
        ),
    ];

    entries
        .into_iter()
        .map(|(concept, node)| (concept.to_string(), node))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_trees_well_formed() {
        for (concept, tree) in table() {
            assert!(tree.is_well_formed(), "树不合法: {}", concept);
        }
    }
}
