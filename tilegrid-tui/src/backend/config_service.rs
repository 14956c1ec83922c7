//! 配置服务
//!
//! `config.json` 位于 `dirs::config_dir()/tilegrid/`，所有字段可省略。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tilegrid_core::CollectionPreference;

use crate::view::theme::Theme;

/// 离线模式：设置后改用本地目录作为数据源
pub const SOURCE_DIR_ENV: &str = "TILEGRID_SOURCE_DIR";

/// 默认 CDN 地址
pub const DEFAULT_BASE_URL: &str = "https://cd-static.bamgrid.com/dp-117731241344";

const CONFIG_DIR: &str = "tilegrid";
const CONFIG_FILE: &str = "config.json";

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 数据源配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceConfig {
    Http {
        base_url: String,
    },
    File {
        dir: PathBuf,
    },
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::Http {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub source: SourceConfig,
    /// 行内容的回退集合类型，按顺序尝试
    pub fallback_collections: CollectionPreference,
    pub theme: Theme,
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            fallback_collections: CollectionPreference::default(),
            theme: Theme::Dark,
            language: "en-US".to_string(),
        }
    }
}

impl AppConfig {
    /// 解析配置文本
    pub fn from_json(text: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 应用环境变量覆盖
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_source_dir(std::env::var_os(SOURCE_DIR_ENV).map(PathBuf::from))
    }

    #[must_use]
    pub fn with_source_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir.filter(|d| !d.as_os_str().is_empty()) {
            self.source = SourceConfig::File { dir };
        }
        self
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置；文件不存在时返回默认值
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 配置文件路径
    fn path(&self) -> &Path;
}

/// 本地配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        let path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR)
            .join(CONFIG_FILE);
        Self::with_path(path)
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            log::debug!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let text = fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        AppConfig::from_json(&text, &self.path)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
