//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rdgtt_portal_core::Language;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 配置目录下的应用子目录名
const APP_DIR: &str = "rdgtt-portal";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub language: Language,
    pub theme: Theme,
    /// 自定义路由表（JSON），缺省使用内置表
    pub route_table: Option<PathBuf>,
    /// 含 `fr.json` / `en.json` 的目录，覆盖内置翻译
    pub catalog_dir: Option<PathBuf>,
    /// 看板数据文件，缺省使用内置演示数据
    pub feed_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            theme: Theme::Dark,
            route_table: None,
            catalog_dir: None,
            feed_file: None,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// 日志文件位置：配置值 > 本地数据目录 > 临时目录
    pub fn resolved_log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .or_else(|| dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join("portal.log")))
            .unwrap_or_else(|| std::env::temp_dir().join("rdgtt-portal.log"))
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地 JSON 文件配置
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config_dir>/rdgtt-portal/config.json`
    pub fn default_location() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::new(dir.join(APP_DIR).join("config.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading config {}", self.path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing config {}", self.path.display()))
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("writing config {}", self.path.display()))?;
        log::debug!("Config saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(dir.path().join("config.json"));
        let config = service.load().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.language, Language::Fr);
    }

    #[test]
    fn save_then_load_keeps_settings() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(dir.path().join("nested").join("config.json"));
        let config = AppConfig {
            language: Language::En,
            theme: Theme::Light,
            feed_file: Some(PathBuf::from("/srv/feed.json")),
            ..AppConfig::default()
        };
        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "theme": "light" }"#).unwrap();
        let config = LocalConfigService::new(&path).load().unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.language, Language::Fr);
        assert!(config.route_table.is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let err = LocalConfigService::new(&path).load().unwrap_err();
        assert!(err.to_string().contains("parsing config"));
    }
}
