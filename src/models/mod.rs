//! 数据模型模块

pub mod concept;
pub mod enrichment;
pub mod prerequisite;
pub mod visualization;

pub use concept::{Complexity, ConceptRecord};
pub use enrichment::{EnrichmentRecord, Formula, WorkedExample};
pub use prerequisite::PrerequisiteNode;
pub use visualization::{
    AnimationConfig, BundleSource, GraphData, GraphLink, GraphNode, Insight, Interaction, Layout,
    ResolutionMode, VisualizationBundle, VisualizationSpec, VisualizationType,
};
