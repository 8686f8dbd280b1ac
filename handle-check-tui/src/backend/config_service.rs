//! 配置服务
//!
//! 配置文件位置：<config_dir>/handle-check/config.json，不存在时使用默认值。
//! 运行期间只读；主题切换不会写回配置。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use handle_check_core::{ThemeMode, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};

/// 覆盖 `endpoint` 的环境变量
pub const ENDPOINT_ENV: &str = "HANDLE_CHECK_ENDPOINT";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// checkName 接口地址
    pub endpoint: String,
    /// 启动时的主题
    pub theme: ThemeMode,
    /// 界面语言（BCP 47）
    pub language: String,
    /// 日志文件路径，为空时使用缓存目录
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            theme: ThemeMode::Light,
            language: "en-US".to_string(),
            log_file: None,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 基于 JSON 文件的配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    /// 使用默认配置文件路径
    pub fn new() -> Self {
        Self::with_path(Self::default_path())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 获取默认配置文件路径
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("handle-check")
            .join("config.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 从文件读取，不含环境变量覆盖
    fn load_file(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read config file {}", self.path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("invalid config file {}", self.path.display()))
    }
}

impl Default for JsonConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig> {
        let mut config = self.load_file()?;
        apply_endpoint_override(&mut config, std::env::var(ENDPOINT_ENV).ok());
        Ok(config)
    }
}

/// 非空的环境变量值优先于配置文件
fn apply_endpoint_override(config: &mut AppConfig, value: Option<String>) {
    if let Some(endpoint) = value.filter(|v| !v.trim().is_empty()) {
        config.endpoint = endpoint;
    }
}
