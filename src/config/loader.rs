use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Toml},
};

use crate::config::config::AppConfig;

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 搜索路径：
    /// 1. ./config.toml
    /// 2. 环境变量（GENOVIZ_ 前缀）
    pub fn load() -> Result<AppConfig, figment::Error> {
        let figment = Figment::new()
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("GENOVIZ_").split("_").global());

        figment.extract()
    }

    /// 从指定路径加载配置
    pub fn load_from(path: PathBuf) -> Result<AppConfig, figment::Error> {
        let figment = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("GENOVIZ_").split("_").global());

        figment.extract()
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        match config.provider.backend.as_str() {
            "http" => {
                if config.provider.base_url.is_empty() {
                    return Err(ConfigValidationError::MissingProviderUrl);
                }
                if config.provider.request_timeout == 0 {
                    return Err(ConfigValidationError::InvalidTimeout);
                }
            }
            "disabled" => {}
            other => {
                return Err(ConfigValidationError::UnknownProviderBackend(
                    other.to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("生成式后端地址未配置")]
    MissingProviderUrl,

    #[error("请求超时无效，必须大于 0")]
    InvalidTimeout,

    #[error("未知的生成式后端类型: {0}")]
    UnknownProviderBackend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = AppConfig::default();
        assert!(ConfigLoader::validate(&config).is_ok());
    }

    #[test]
    fn test_http_backend_requires_url() {
        let mut config = AppConfig::default();
        config.provider.backend = "http".to_string();
        config.provider.base_url = String::new();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::MissingProviderUrl)
        ));
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let mut config = AppConfig::default();
        config.provider.backend = "grpc".to_string();
        assert!(ConfigLoader::validate(&config).is_err());
    }
}
