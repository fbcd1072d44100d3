use serde::{Deserialize, Serialize};

use crate::errors::{Result, TrackerError};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀，例如 `IPTRACKER__GEO__API_KEY`
pub const ENV_PREFIX: &str = "IPTRACKER";

/// 静态配置（启动时加载一次，之后显式传递）
///
/// - geo: 地理位置 API 地址、凭证、超时
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub geo: GeoApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    /// ENV 前缀：IPTRACKER，分隔符：__
    /// 示例：IPTRACKER__GEO__API_KEY=at_xxx
    pub fn load(path: Option<&str>) -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_with_env(path, None)
    }

    /// 加载配置，可指定环境变量来源（None 表示读取进程环境）
    pub fn load_with_env(path: Option<&str>, env: Option<config::Map<String, String>>) -> Result<Self> {
        use config::{Config, Environment, File};

        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

        let builder = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            );

        let settings = builder.build()?;
        let config = settings
            .try_deserialize::<StaticConfig>()
            .map_err(|e| TrackerError::config(format!("Failed to deserialize config: {}", e)))?;

        Ok(config)
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 地理位置 API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoApiConfig {
    /// API 地址（不含查询参数）
    #[serde(default = "default_geo_endpoint")]
    pub endpoint: String,
    /// API Key，未配置时请求会在服务端失败
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_geo_timeout")]
    pub timeout_secs: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "text" 或 "json"
    #[serde(default = "default_log_format")]
    pub format: String,
    /// 日志文件路径；TUI 模式下未配置则丢弃日志
    #[serde(default)]
    pub file: Option<String>,
}

fn default_geo_endpoint() -> String {
    "https://geo.ipify.org/api/v2/country,city".to_string()
}

fn default_geo_timeout() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for GeoApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_geo_endpoint(),
            api_key: String::new(),
            timeout_secs: default_geo_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_env() -> Option<config::Map<String, String>> {
        Some(config::Map::new())
    }

    #[test]
    fn test_defaults_without_file() {
        let config =
            StaticConfig::load_with_env(Some("/nonexistent/iptracker.toml"), empty_env()).unwrap();
        assert_eq!(config.geo.endpoint, "https://geo.ipify.org/api/v2/country,city");
        assert!(config.geo.api_key.is_empty());
        assert_eq!(config.geo.timeout_secs, 10);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("iptracker.toml");
        std::fs::write(
            &path,
            "[geo]\napi_key = \"from_file\"\ntimeout_secs = 3\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let mut env = config::Map::new();
        env.insert("IPTRACKER__GEO__API_KEY".to_string(), "from_env".to_string());

        let config =
            StaticConfig::load_with_env(Some(path.to_str().unwrap()), Some(env)).unwrap();
        assert_eq!(config.geo.api_key, "from_env");
        assert_eq!(config.geo.timeout_secs, 3);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_sample_config_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        StaticConfig::default().save_to_file(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[geo]"));
        assert!(content.contains("[logging]"));

        let loaded = StaticConfig::load_with_env(Some(path.to_str().unwrap()), empty_env()).unwrap();
        assert_eq!(loaded.geo.endpoint, StaticConfig::default().geo.endpoint);
    }
}
