//! 服务层

pub mod dispatcher;
pub mod result_cache;

pub use dispatcher::{build_graph, create_dispatcher, VisualizationDispatcher};
pub use result_cache::{CacheKey, ResultCache};
