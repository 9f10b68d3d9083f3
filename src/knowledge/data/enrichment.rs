//! 丰富内容数据表
//!
//! 与概念分析表、前置树表相互独立，覆盖面可以不一致。

use std::collections::HashMap;

use crate::models::{
    EnrichmentRecord, Formula, VisualizationSpec, VisualizationType, WorkedExample,
};

fn viz(viz_type: VisualizationType, elements: &[&str], colors: &[(&str, &str)]) -> VisualizationSpec {
    let mut spec = VisualizationSpec::new(viz_type, "", "");
    spec.elements = elements.iter().map(|s| s.to_string()).collect();
    spec.colors = colors
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    spec
}

pub fn table() -> HashMap<String, EnrichmentRecord> {
    let mut map = HashMap::new();

    let mut mendel_first_viz = viz(
        VisualizationType::KnowledgeGraph,
        &["Punnett方格", "配子", "等位基因", "表型比例"],
        &[
            ("dominant", "#4CAF50"),
            ("recessive", "#9E9E9E"),
            ("hybrid", "#2196F3"),
        ],
    );
    mendel_first_viz.title = "孟德尔第一定律知识图谱".to_string();
    mendel_first_viz.description = "展示分离定律涉及的核心概念及其联系".to_string();
    map.insert(
        "孟德尔第一定律".to_string(),
        EnrichmentRecord {
            concept: "孟德尔第一定律".to_string(),
            definition: "在生物体的体细胞中，控制同一性状的遗传因子成对存在，不相融合；在形成配子时，成对的遗传因子彼此分离，分别进入不同的配子中，随配子遗传给后代".to_string(),
            principles: vec![
                "分离定律：等位基因在配子形成时分离".to_string(),
                "显隐性原理：显性基因掩盖隐性基因的表达".to_string(),
                "纯合与杂合：AA、aa为纯合子，Aa为杂合子".to_string(),
            ],
            formulas: vec![Formula::new(
                "分离比",
                "3:1",
                &[("3", "显性性状个体数"), ("1", "隐性性状个体数")],
            )],
            examples: vec![WorkedExample::new(
                "豌豆高茎 × 矮茎",
                "纯合高茎(DD) × 纯合矮茎(dd) → F1全为高茎(Dd)，F2自交得到高茎:矮茎 = 3:1",
            )],
            misconceptions: vec![
                "显性基因不是更优越，只是表达被优先显示".to_string(),
                "杂合子携带的隐性基因可能在后代中表达".to_string(),
                "分离比3:1只在大量样本中成立".to_string(),
            ],
            visualization: mendel_first_viz,
        },
    );

    let mut sex_linked_viz = viz(
        VisualizationType::KnowledgeGraph,
        &["性染色体", "系谱图", "携带者", "交叉遗传"],
        &[("X", "#FF69B4"), ("Y", "#4169E1"), ("affected", "#FF4444")],
    );
    sex_linked_viz.title = "伴性遗传知识图谱".to_string();
    sex_linked_viz.description = "展示伴性遗传的染色体基础与传递特点".to_string();
    map.insert(
        "伴性遗传".to_string(),
        EnrichmentRecord {
            concept: "伴性遗传".to_string(),
            definition: "位于性染色体上的基因所控制的性状在遗传时与性别相关联的遗传方式".to_string(),
            principles: vec![
                "X连锁遗传：基因位于X染色体上".to_string(),
                "Y连锁遗传：基因位于Y染色体上".to_string(),
                "男性只有一条X染色体，更容易表现X连锁隐性性状".to_string(),
            ],
            formulas: vec![Formula::new(
                "伴性遗传概率",
                "P = \\frac{1}{2}",
                &[("P", "携带者母亲将X连锁基因传给儿子的概率")],
            )],
            examples: vec![
                WorkedExample::new(
                    "红绿色盲",
                    "X连锁隐性遗传，男性发病率高于女性，女性携带者正常但可遗传给儿子",
                ),
                WorkedExample::new("血友病", "X连锁隐性遗传，主要通过女性携带者传递给男性后代"),
            ],
            misconceptions: vec![
                "不是所有伴性遗传都是男性发病更多".to_string(),
                "女性X连锁隐性纯合子也会发病".to_string(),
                "Y连锁基因只从父亲传给儿子".to_string(),
            ],
            visualization: sex_linked_viz,
        },
    );

    let mut hardy_viz = viz(
        VisualizationType::Chart,
        &["基因频率分布", "群体遗传平衡", "基因型频率"],
        &[("p", "#4CAF50"), ("q", "#FF9800")],
    );
    hardy_viz.title = "哈代-温伯格平衡图表".to_string();
    hardy_viz.description = "展示理想群体中基因频率与基因型频率的平衡关系".to_string();
    map.insert(
        "哈代-温伯格定律".to_string(),
        EnrichmentRecord {
            concept: "哈代-温伯格定律".to_string(),
            definition: "在一个理想群体中，若无突变、迁移、选择和遗传漂变，则基因频率和基因型频率将代代保持不变".to_string(),
            principles: vec![
                "理想群体条件：无限大、随机交配、无突变、无迁移、无自然选择".to_string(),
                "p + q = 1，p² + 2pq + q² = 1".to_string(),
                "可用于计算携带者频率".to_string(),
            ],
            formulas: vec![
                Formula::new(
                    "基因频率平衡公式",
                    "p + q = 1",
                    &[("p", "显性基因频率"), ("q", "隐性基因频率")],
                ),
                Formula::new(
                    "基因型频率平衡公式",
                    "p^2 + 2pq + q^2 = 1",
                    &[
                        ("p²", "显性纯合子频率"),
                        ("2pq", "杂合子频率"),
                        ("q²", "隐性纯合子频率"),
                    ],
                ),
            ],
            examples: vec![WorkedExample::new(
                "计算白化病携带者频率",
                "白化病发病率为1/10000(q²)，则q=1/100，携带者频率2pq≈1/50",
            )],
            misconceptions: vec![
                "自然群体很少完全符合哈代-温伯格平衡".to_string(),
                "该定律提供的是理论基准，用于检测进化因素".to_string(),
            ],
            visualization: hardy_viz,
        },
    );

    let mut replication_viz = viz(
        VisualizationType::Animation,
        &["复制叉", "前导链", "后随链", "冈崎片段"],
        &[
            ("leading", "#4CAF50"),
            ("lagging", "#2196F3"),
            ("parent", "#9E9E9E"),
        ],
    );
    replication_viz.title = "DNA复制动画".to_string();
    replication_viz.description = "动态展示半保留复制过程中复制叉的推进".to_string();
    map.insert(
        "DNA复制".to_string(),
        EnrichmentRecord {
            concept: "DNA复制".to_string(),
            definition: "以亲代DNA分子为模板合成子代DNA分子的过程，是半保留复制".to_string(),
            principles: vec![
                "半保留复制：每个子代DNA含一条亲代链和一条新合成的链".to_string(),
                "双向复制：从复制起点向两个方向进行".to_string(),
                "5'→3'方向合成：DNA聚合酶只能从5'端向3'端延伸".to_string(),
            ],
            formulas: Vec::new(),
            examples: vec![WorkedExample::new(
                "大肠杆菌DNA复制",
                "大肠杆菌基因组复制从单一起点开始，约40分钟完成",
            )],
            misconceptions: vec![
                "DNA复制不是全保留复制".to_string(),
                "后随链合成冈崎片段，然后连接".to_string(),
                "需要RNA引物启动DNA合成".to_string(),
            ],
            visualization: replication_viz,
        },
    );

    let mut meiosis_viz = viz(
        VisualizationType::Animation,
        &["间期", "减数第一次分裂", "减数第二次分裂", "配子"],
        &[
            ("phase1", "#4CAF50"),
            ("phase2", "#2196F3"),
            ("gamete", "#FF9800"),
        ],
    );
    meiosis_viz.title = "减数分裂动画".to_string();
    meiosis_viz.description = "展示染色体数目减半的两次连续分裂过程".to_string();
    map.insert(
        "减数分裂".to_string(),
        EnrichmentRecord {
            concept: "减数分裂".to_string(),
            definition: "进行有性生殖的生物，在产生成熟生殖细胞时进行的染色体数目减半的细胞分裂".to_string(),
            principles: vec![
                "减数分裂结果：染色体数目减半".to_string(),
                "DNA复制一次，细胞连续分裂两次".to_string(),
                "同源染色体联会、交叉互换".to_string(),
            ],
            formulas: Vec::new(),
            examples: vec![WorkedExample::new(
                "精子形成",
                "精原细胞经减数分裂产生4个精细胞，再经变形成为精子",
            )],
            misconceptions: vec![
                "减数分裂不是产生体细胞的方式".to_string(),
                "同源染色体分离发生在减数第一次分裂".to_string(),
            ],
            visualization: meiosis_viz,
        },
    );

    map
}
