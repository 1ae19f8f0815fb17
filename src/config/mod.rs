//! Configuration management.
//!
//! Settings come from an optional TOML file layered under environment
//! variables prefixed with `ART_GALLERY` (nested keys use `__`):
//!
//! ```toml
//! [http]
//! timeout_secs = 30
//! connect_timeout_secs = 10
//! user_agent = "art-gallery-explorer/0.1.0"
//!
//! [search]
//! default_limit = 20
//! detail_batch_size = 6
//!
//! [logging]
//! level = "info"
//! format = "text"
//! ```
//!
//! The collection search and resolver bases are fixed and cannot be set
//! here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "ART_GALLERY";

/// Config file name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "art-gallery.toml";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP transport settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP transport configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// User-Agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Search defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Page size used when none is requested
    #[serde(default)]
    pub default_limit: Option<u32>,

    /// How many results the images view hydrates with detail lookups
    #[serde(default = "default_batch_size")]
    pub detail_batch_size: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: None,
            detail_batch_size: default_batch_size(),
        }
    }
}

fn default_batch_size() -> usize {
    6
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialize error: {0}")]
    Serialize(String),

    #[error("Build error: {0}")]
    Build(String),
}

/// Load configuration from a file, with environment overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::Io(format!(
            "config file not found: {}",
            path.display()
        )));
    }

    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(environment())
        .build()
        .map_err(|e| ConfigError::Build(e.to_string()))?;

    deserialize(settings)
}

/// Get the configuration from environment variables and defaults
pub fn get_config() -> Result<Config, ConfigError> {
    let settings = config::Config::builder()
        .add_source(environment())
        .build()
        .map_err(|e| ConfigError::Build(e.to_string()))?;

    deserialize(settings)
}

fn deserialize(settings: config::Config) -> Result<Config, ConfigError> {
    settings
        .try_deserialize()
        .map_err(|e| ConfigError::Parse(e.to_string()))
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Find a config file in the working directory or the user config directory
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(env!("CARGO_PKG_NAME")).join("config.toml"))
        .filter(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.http.timeout_secs, 30);
        assert_eq!(config.http.connect_timeout_secs, 10);
        assert!(config.http.user_agent.starts_with("art-gallery-explorer/"));
        assert_eq!(config.search.detail_batch_size, 6);
        assert_eq!(config.search.default_limit, None);
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_config_file_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let toml_content = r#"
[http]
timeout_secs = 5
user_agent = "gallery-test"

[search]
default_limit = 12
detail_batch_size = 3

[logging]
level = "debug"
format = "json"
"#;

        let mut file = File::create(&path).unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.http.connect_timeout_secs, 10);
        assert_eq!(config.http.user_agent, "gallery-test");
        assert_eq!(config.search.default_limit, Some(12));
        assert_eq!(config.search.detail_batch_size, 3);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_config_file_nonexistent() {
        let result = load_config(Path::new("/nonexistent/art-gallery.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_config_file_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid.toml");
        std::fs::write(&path, "invalid = toml = content").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Build(_))));
    }

    #[test]
    fn test_config_file_wrong_type() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wrong.toml");
        std::fs::write(&path, "[search]\ndetail_batch_size = \"many\"\n").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_environment_overrides() {
        // Same values as test_config_file_load, so parallel tests agree
        std::env::set_var("ART_GALLERY__HTTP__TIMEOUT_SECS", "5");
        std::env::set_var("ART_GALLERY__LOGGING__FORMAT", "json");

        let config = get_config();

        std::env::remove_var("ART_GALLERY__HTTP__TIMEOUT_SECS");
        std::env::remove_var("ART_GALLERY__LOGGING__FORMAT");

        let config = config.unwrap();
        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.http.connect_timeout_secs, 10);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.search.detail_batch_size, 6);
    }

    #[test]
    fn test_to_toml_round_trip() {
        let mut config = Config::default();
        config.search.default_limit = Some(50);

        let rendered = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
