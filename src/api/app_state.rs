use std::sync::Arc;

use crate::knowledge::KnowledgeFacade;
use crate::observability::AppMetrics;
use crate::services::VisualizationDispatcher;

/// Application state containing all shared services
#[derive(Clone)]
pub struct AppState {
    /// 可视化调度器
    pub dispatcher: Arc<VisualizationDispatcher>,
    /// 知识门面
    pub facade: Arc<KnowledgeFacade>,
    /// 应用指标
    pub metrics: Arc<AppMetrics>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("dispatcher", &"Arc<VisualizationDispatcher>")
            .field("facade", &"Arc<KnowledgeFacade>")
            .field("metrics", &"Arc<AppMetrics>")
            .finish()
    }
}

impl AppState {
    pub fn new(
        dispatcher: Arc<VisualizationDispatcher>,
        facade: Arc<KnowledgeFacade>,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        Self {
            dispatcher,
            facade,
            metrics,
        }
    }
}
