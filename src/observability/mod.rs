//! 可观测性模块
//!
//! 提供 Prometheus 指标、结构化日志和健康检查。

use axum::{Json, Router, response::IntoResponse, routing::get};

use crate::config::LoggingConfig;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

// ===== Simple Metrics (using atomics for zero-dep implementation) =====

/// 简单应用指标
#[derive(Clone, Default)]
pub struct AppMetrics {
    pub http_requests_total: Arc<AtomicU64>,
    pub http_request_duration_sum: Arc<AtomicU64>,
    pub active_connections: Arc<AtomicUsize>,
    pub design_requests_total: Arc<AtomicU64>,
    pub cache_hits_total: Arc<AtomicU64>,
    pub cache_misses_total: Arc<AtomicU64>,
    pub hardcoded_served_total: Arc<AtomicU64>,
    pub generated_served_total: Arc<AtomicU64>,
    pub provider_calls_total: Arc<AtomicU64>,
    pub provider_failures_total: Arc<AtomicU64>,
    pub search_requests_total: Arc<AtomicU64>,
    pub errors_total: Arc<AtomicU64>,
}

impl AppMetrics {
    /// 记录 HTTP 请求
    pub fn record_http_request(&self, duration_ms: u64) {
        self.http_requests_total.fetch_add(1, Ordering::SeqCst);
        self.http_request_duration_sum
            .fetch_add(duration_ms, Ordering::SeqCst);
    }

    /// 记录活跃连接
    pub fn record_connection(&self, delta: isize) {
        self.active_connections
            .fetch_add(delta as usize, Ordering::SeqCst);
    }

    /// 记录一次可视化设计请求
    pub fn record_design_request(&self) {
        self.design_requests_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录缓存命中/未命中
    pub fn record_cache(&self, hit: bool) {
        if hit {
            self.cache_hits_total.fetch_add(1, Ordering::SeqCst);
        } else {
            self.cache_misses_total.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// 记录方案来源
    pub fn record_source(&self, hardcoded: bool) {
        if hardcoded {
            self.hardcoded_served_total.fetch_add(1, Ordering::SeqCst);
        } else {
            self.generated_served_total.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// 记录生成式后端调用
    pub fn record_provider_call(&self) {
        self.provider_calls_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录生成式后端失败
    pub fn record_provider_failure(&self) {
        self.provider_failures_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录搜索请求
    pub fn record_search(&self) {
        self.search_requests_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录错误
    pub fn record_error(&self) {
        self.errors_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 生成 Prometheus 格式指标
    pub fn gather(&self) -> String {
        format!(
            r#"# HELP http_requests_total Total HTTP requests
# TYPE http_requests_total counter
http_requests_total {}
# HELP http_request_duration_seconds HTTP request duration in seconds
# TYPE http_request_duration_seconds histogram
http_request_duration_seconds_sum {}
http_request_duration_seconds_count {}
# HELP active_connections Active HTTP connections
# TYPE active_connections gauge
active_connections {}
# HELP design_requests_total Total visualization design requests
# TYPE design_requests_total counter
design_requests_total {}
# HELP cache_hits_total Result cache hits
# TYPE cache_hits_total counter
cache_hits_total {}
# HELP cache_misses_total Result cache misses
# TYPE cache_misses_total counter
cache_misses_total {}
# HELP hardcoded_served_total Bundles served from curated templates
# TYPE hardcoded_served_total counter
hardcoded_served_total {}
# HELP generated_served_total Bundles served from the generative backend
# TYPE generated_served_total counter
generated_served_total {}
# HELP provider_calls_total Generative backend calls
# TYPE provider_calls_total counter
provider_calls_total {}
# HELP provider_failures_total Generative backend failures
# TYPE provider_failures_total counter
provider_failures_total {}
# HELP search_requests_total Total concept search requests
# TYPE search_requests_total counter
search_requests_total {}
# HELP errors_total Total errors
# TYPE errors_total counter
errors_total {}
"#,
            self.http_requests_total.load(Ordering::SeqCst),
            self.http_request_duration_sum.load(Ordering::SeqCst) as f64 / 1000.0,
            self.http_requests_total.load(Ordering::SeqCst),
            self.active_connections.load(Ordering::SeqCst),
            self.design_requests_total.load(Ordering::SeqCst),
            self.cache_hits_total.load(Ordering::SeqCst),
            self.cache_misses_total.load(Ordering::SeqCst),
            self.hardcoded_served_total.load(Ordering::SeqCst),
            self.generated_served_total.load(Ordering::SeqCst),
            self.provider_calls_total.load(Ordering::SeqCst),
            self.provider_failures_total.load(Ordering::SeqCst),
            self.search_requests_total.load(Ordering::SeqCst),
            self.errors_total.load(Ordering::SeqCst),
        )
    }
}

// ===== Health Check =====

/// 健康检查状态
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime_seconds: f64,
    pub concepts_loaded: usize,
    pub provider_enabled: bool,
}

/// 应用状态（用于健康检查）
#[derive(Clone)]
pub struct ObservabilityState {
    pub metrics: Arc<AppMetrics>,
    pub start_time: DateTime<Utc>,
    pub version: String,
    pub concepts_loaded: usize,
    pub provider_enabled: bool,
}

impl ObservabilityState {
    pub fn new(
        metrics: Arc<AppMetrics>,
        version: String,
        concepts_loaded: usize,
        provider_enabled: bool,
    ) -> Self {
        Self {
            metrics,
            start_time: Utc::now(),
            version,
            concepts_loaded,
            provider_enabled,
        }
    }

    /// 获取应用正常运行时间
    pub fn uptime_seconds(&self) -> f64 {
        (Utc::now() - self.start_time).num_seconds() as f64
    }
}

// ===== Health Check Handlers =====

/// 获取完整健康状态
pub async fn health_check(
    state: axum::extract::State<Arc<ObservabilityState>>,
) -> impl IntoResponse {
    let healthy = state.concepts_loaded > 0;

    let health_status = HealthStatus {
        status: if healthy {
            "healthy".to_string()
        } else {
            "unhealthy".to_string()
        },
        timestamp: Utc::now().to_rfc3339(),
        version: state.version.clone(),
        uptime_seconds: state.uptime_seconds(),
        concepts_loaded: state.concepts_loaded,
        provider_enabled: state.provider_enabled,
    };

    let status_code = if healthy {
        axum::http::StatusCode::OK
    } else {
        axum::http::StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(health_status))
}

/// 简单存活检查
pub async fn liveness() -> impl IntoResponse {
    "OK"
}

/// 就绪检查（注册表为空则视为未就绪）
pub async fn readiness(state: axum::extract::State<Arc<ObservabilityState>>) -> impl IntoResponse {
    if state.concepts_loaded > 0 {
        (axum::http::StatusCode::OK, "Ready")
    } else {
        (axum::http::StatusCode::SERVICE_UNAVAILABLE, "Not Ready")
    }
}

/// Prometheus 指标端点
pub async fn metrics(state: axum::extract::State<Arc<ObservabilityState>>) -> impl IntoResponse {
    let output = state.metrics.gather();
    (axum::http::StatusCode::OK, output)
}

/// 版本信息端点
pub async fn version(state: axum::extract::State<Arc<ObservabilityState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "version": state.version,
        "uptime_seconds": state.uptime_seconds(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// 创建可观测性路由
pub fn create_observability_router(state: Arc<ObservabilityState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
        .route("/metrics", get(metrics))
        .route("/version", get(version))
        .with_state(state)
}

// ===== Structured Logging =====

/// 初始化结构化日志
///
/// 日志级别取自配置，RUST_LOG 环境变量优先；
/// `structured` 为真时输出 JSON 格式日志。
pub fn init_tracing(config: &LoggingConfig) {
    let env_filter = filter_directives(std::env::var("RUST_LOG").ok(), config);

    if config.structured {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_line_number(true)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    } else {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_line_number(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    }
}

fn filter_directives(env_override: Option<String>, config: &LoggingConfig) -> String {
    env_override.unwrap_or_else(|| config.level.clone())
}
