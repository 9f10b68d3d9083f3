//! 配置模块

pub mod config;
pub mod loader;

pub use config::{AppConfig, CacheConfig, LoggingConfig, ProviderConfig, ServerConfig};
pub use loader::{ConfigLoader, ConfigValidationError};
