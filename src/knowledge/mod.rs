//! 遗传学知识库
//!
//! 三张相互独立的数据表（概念分析、前置树、丰富内容）加上
//! 硬编码可视化模板，统一经由知识门面对外提供查询。

pub mod data;
pub mod enrichment_resolver;
pub mod facade;
pub mod prerequisite_resolver;
pub mod registry;

pub use enrichment_resolver::EnrichmentResolver;
pub use facade::{create_knowledge_facade, ConceptBundle, KnowledgeFacade};
pub use prerequisite_resolver::PrerequisiteResolver;
pub use registry::ConceptRegistry;
