//! 配置服务

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use domain_console_api::DEFAULT_BASE_URL;
use domain_console_core::DEFAULT_PAGE_SIZE;
use serde::Deserialize;

use crate::view::theme::Theme;

/// 覆盖服务端地址的环境变量
pub const API_URL_ENV: &str = "DOMAIN_CONSOLE_API_URL";

const APP_DIR: &str = "domain-console";
const CONFIG_FILE: &str = "config.toml";

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub page_size: usize,
    pub language: String,
    pub theme: Theme,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            language: "en-US".to_string(),
            theme: Theme::Dark,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// 日志目录：配置值，否则为本地数据目录下的 logs
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_DIR)
                .join("logs")
        })
    }

    fn apply_env(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
            self.api_base_url = url;
        }
        self
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 本地配置服务
pub struct LocalConfigService {
    path: Option<PathBuf>,
}

impl LocalConfigService {
    /// 使用默认位置 `<config_dir>/domain-console/config.toml`
    pub fn new() -> Self {
        Self {
            path: dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE)),
        }
    }

    #[cfg(test)]
    fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn read_file(path: &Path) -> Result<AppConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    fn load_with_env(&self, api_url: Option<String>) -> Result<AppConfig> {
        let config = match &self.path {
            Some(path) if path.exists() => Self::read_file(path)?,
            _ => AppConfig::default(),
        };
        Ok(config.apply_env(api_url))
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        self.load_with_env(std::env::var(API_URL_ENV).ok())
    }
}
