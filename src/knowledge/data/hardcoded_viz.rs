//! 硬编码可视化模板
//!
//! 精选概念的手工可视化配置，构成快路径的数据来源。
//! 与概念分析表相互独立：此处收录的概念才可走硬编码路径。

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde_json::json;

use crate::models::{AnimationConfig, Interaction, Layout, VisualizationSpec, VisualizationType};

fn spec(
    viz_type: VisualizationType,
    title: &str,
    description: &str,
    elements: &[&str],
    layout: Layout,
    colors: &[(&str, &str)],
    annotations: &[&str],
) -> VisualizationSpec {
    let mut s = VisualizationSpec::new(viz_type, title, description);
    s.elements = elements.iter().map(|e| e.to_string()).collect();
    s.layout = Some(layout);
    s.interactions = vec![Interaction::Hover, Interaction::Click];
    s.colors = colors
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    s.annotations = annotations.iter().map(|a| a.to_string()).collect();
    s
}

static TEMPLATES: Lazy<BTreeMap<String, VisualizationSpec>> = Lazy::new(|| {
    let mut map = BTreeMap::new();

    let mut dna = spec(
        VisualizationType::from_tag("double_helix"),
        "DNA双螺旋结构可视化",
        "展示DNA的双螺旋结构：两条反向平行的脱氧核苷酸链通过碱基互补配对盘旋成双螺旋。",
        &["磷酸骨架", "脱氧核糖", "碱基对", "氢键", "大沟", "小沟"],
        Layout::Hierarchical,
        &[
            ("backbone", "#607D8B"),
            ("adenine", "#4CAF50"),
            ("thymine", "#FF9800"),
            ("guanine", "#2196F3"),
            ("cytosine", "#F44336"),
        ],
        &[
            "A与T配对形成2个氢键，G与C配对形成3个氢键",
            "两条链反向平行：一条5'→3'，另一条3'→5'",
            "碱基互补配对原则是复制与转录的基础",
        ],
    );
    dna.data = Some(json!({
        "basePairs": [
            { "left": "A", "right": "T", "bonds": 2 },
            { "left": "G", "right": "C", "bonds": 3 }
        ],
        "turnsPerHelix": 10,
        "risePerBasePair": "0.34nm"
    }));
    map.insert("DNA".to_string(), dna);

    let mut mendel_first = spec(
        VisualizationType::PunnettSquare,
        "孟德尔第一定律（分离定律）可视化",
        "通过豌豆杂交实验展示基因的分离规律：在杂合子中，等位基因在形成配子时彼此分离，每个配子只获得其中一个基因。",
        &["显性基因", "隐性基因", "配子", "基因型", "表型"],
        Layout::Grid,
        &[
            ("dominant", "#4CAF50"),
            ("recessive", "#FF9800"),
            ("heterozygous", "#2196F3"),
        ],
        &[
            "A为显性基因（高茎），a为隐性基因（矮茎）",
            "配子形成时，A和a基因分离到不同配子中",
            "受精时配子随机结合，形成不同基因型的合子",
        ],
    );
    mendel_first.data = Some(json!({
        "maleGametes": ["A", "a"],
        "femaleGametes": ["A", "a"],
        "parentalCross": {
            "male": { "genotype": "Aa", "phenotype": "杂合子（高茎）" },
            "female": { "genotype": "Aa", "phenotype": "杂合子（高茎）" }
        },
        "offspring": [
            { "genotype": "AA", "phenotype": "显性纯合（高茎）", "probability": 0.25 },
            { "genotype": "Aa", "phenotype": "杂合子（高茎）", "probability": 0.5 },
            { "genotype": "aa", "phenotype": "隐性纯合（矮茎）", "probability": 0.25 }
        ],
        "description": "单因子杂交：Aa × Aa → 1AA:2Aa:1aa，表型比为3:1"
    }));
    map.insert("孟德尔第一定律".to_string(), mendel_first);

    let mut mendel_second = spec(
        VisualizationType::PunnettSquare,
        "孟德尔第二定律（自由组合定律）可视化",
        "展示两对等位基因在遗传时的自由组合规律：不同对的等位基因在配子形成时独立分配。",
        &["双杂合子", "配子组合", "自由组合", "表型比例"],
        Layout::Grid,
        &[
            ("dominant", "#4CAF50"),
            ("recessive", "#FF9800"),
            ("heterozygous", "#2196F3"),
        ],
        &[
            "A/a控制种子颜色（黄色/绿色），B/b控制种子形状（圆粒/皱粒）",
            "两对基因独立分配，形成4种配子：AB、Ab、aB、ab",
            "16种组合产生9种基因型，4种表型，比例为9:3:3:1",
        ],
    );
    mendel_second.data = Some(json!({
        "maleGametes": ["AB", "Ab", "aB", "ab"],
        "femaleGametes": ["AB", "Ab", "aB", "ab"],
        "parentalCross": {
            "male": { "genotype": "AaBb", "phenotype": "双显性（黄色圆粒）" },
            "female": { "genotype": "AaBb", "phenotype": "双显性（黄色圆粒）" }
        },
        "description": "双因子杂交：AaBb × AaBb，表型比为9:3:3:1"
    }));
    map.insert("孟德尔第二定律".to_string(), mendel_second);

    let mut sex_linked = spec(
        VisualizationType::InheritancePath,
        "伴性遗传（X连锁隐性遗传）可视化",
        "展示X连锁隐性遗传（如色盲、血友病）的传递规律：男性从母亲获得X染色体，女性从双亲各获得一条X染色体。",
        &["X染色体", "Y染色体", "携带者", "患者", "遗传传递"],
        Layout::Hierarchical,
        &[
            ("affected", "#F44336"),
            ("carrier", "#FFB74D"),
            ("normal", "#4CAF50"),
            ("male", "#64B5F6"),
            ("female", "#F06292"),
        ],
        &[
            "男性只有一条X染色体，半合子，隐性基因也会表达",
            "女性有两条X染色体，需要纯合隐性才会患病",
            "携带者女性：X^AX^a，表型正常但携带致病基因",
        ],
    );
    sex_linked.data = Some(json!({
        "generations": [
            {
                "generation": 1,
                "individuals": [
                    { "id": "I-1", "sex": "male", "genotype": "X^aY", "phenotype": "色盲", "affected": true },
                    { "id": "I-2", "sex": "female", "genotype": "X^AX^A", "phenotype": "正常", "affected": false }
                ]
            },
            {
                "generation": 2,
                "individuals": [
                    { "id": "II-1", "sex": "female", "genotype": "X^AX^a", "phenotype": "携带者", "affected": false, "carrier": true, "parents": ["I-1", "I-2"] },
                    { "id": "II-2", "sex": "male", "genotype": "X^AY", "phenotype": "正常", "affected": false, "parents": ["I-1", "I-2"] }
                ]
            },
            {
                "generation": 3,
                "individuals": [
                    { "id": "III-1", "sex": "male", "genotype": "X^aY", "phenotype": "色盲", "affected": true, "parents": ["II-1", "II-2"] },
                    { "id": "III-2", "sex": "female", "genotype": "X^AX^a", "phenotype": "携带者", "affected": false, "carrier": true, "parents": ["II-1", "II-2"] }
                ]
            }
        ],
        "inheritance": {
            "pattern": "X连锁隐性遗传",
            "chromosome": "X染色体",
            "gene": "色盲基因"
        },
        "explanation": "男性发病率高于女性；男性从母亲获得致病基因；女性携带者表型正常但可传递给后代；不存在父亲到儿子的传递。"
    }));
    map.insert("伴性遗传".to_string(), sex_linked);

    let mut central_dogma = spec(
        VisualizationType::Diagram,
        "中心法则可视化",
        "展示遗传信息的流动方向：DNA → RNA → 蛋白质，以及某些病毒中RNA → RNA和RNA → DNA的特殊情况。",
        &["DNA", "RNA", "蛋白质", "转录", "翻译", "逆转录"],
        Layout::Hierarchical,
        &[
            ("dna", "#4CAF50"),
            ("rna", "#2196F3"),
            ("protein", "#FF9800"),
            ("transcription", "#9C27B0"),
            ("reverseTranscription", "#F44336"),
        ],
        &[
            "中心法则由Crick于1958年提出",
            "转录：遗传信息从DNA转移到RNA",
            "翻译：遗传信息从RNA转移到蛋白质",
            "逆转录是对中心法则的重要补充",
        ],
    );
    central_dogma.data = Some(json!({
        "flow": [
            { "from": "DNA", "to": "RNA", "process": "转录", "enzyme": "RNA聚合酶", "location": "细胞核" },
            { "from": "RNA", "to": "蛋白质", "process": "翻译", "enzyme": "核糖体", "location": "细胞质" }
        ],
        "exceptions": [
            { "virus": "逆转录病毒", "flow": "RNA → DNA → RNA → 蛋白质", "process": "逆转录", "enzyme": "逆转录酶", "example": "HIV、乙肝病毒" }
        ],
        "summary": "大多数生物遵循 DNA → RNA → 蛋白质"
    }));
    map.insert("中心法则".to_string(), central_dogma);

    let mut genotype_phenotype = spec(
        VisualizationType::ProbabilityDistribution,
        "基因型与表型关系可视化",
        "展示基因型如何决定表型，以及显性和隐性的表达方式。",
        &["显性", "隐性", "表型", "基因型"],
        Layout::Hierarchical,
        &[
            ("dominant", "#4CAF50"),
            ("recessive", "#FF9800"),
            ("heterozygous", "#2196F3"),
        ],
        &[
            "显性基因掩盖隐性基因的表达",
            "杂合子Aa表现为显性表型",
            "基因型比1:2:1，表型比3:1",
        ],
    );
    genotype_phenotype.data = Some(json!({
        "categories": ["AA（显性纯合）", "Aa（杂合子）", "aa（隐性纯合）"],
        "values": [0.25, 0.5, 0.25],
        "total": "Aa × Aa 杂交结果",
        "formula": "1AA : 2Aa : 1aa",
        "phenotypeRatio": "3显性 : 1隐性"
    }));
    map.insert("基因型与表型".to_string(), genotype_phenotype);

    let mut meiosis = spec(
        VisualizationType::Animation,
        "减数分裂过程动画",
        "动态展示染色体数目减半的两次连续分裂：联会、交叉互换、同源染色体分离与姐妹染色单体分离。",
        &["间期", "减数第一次分裂", "减数第二次分裂", "四分体", "配子"],
        Layout::Hierarchical,
        &[
            ("phase1", "#4CAF50"),
            ("phase2", "#2196F3"),
            ("gamete", "#FF9800"),
        ],
        &[
            "DNA复制一次，细胞连续分裂两次",
            "同源染色体分离发生在减数第一次分裂",
            "姐妹染色单体分离发生在减数第二次分裂",
        ],
    );
    meiosis.animation = Some(AnimationConfig {
        duration: 8000,
        easing: "easeInOut".to_string(),
        autoplay: false,
    });
    map.insert("减数分裂".to_string(), meiosis);

    map
});

/// 查找概念的硬编码模板
pub fn get(concept: &str) -> Option<&'static VisualizationSpec> {
    TEMPLATES.get(concept)
}

/// 概念是否收录在硬编码模板中
pub fn is_hardcoded(concept: &str) -> bool {
    TEMPLATES.contains_key(concept)
}

/// 所有硬编码概念（快路径可用的精选子集）
pub fn hardcoded_concepts() -> Vec<String> {
    TEMPLATES.keys().cloned().collect()
}
