use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid [filter] today value {0:?}, expected YYYY-MM-DD")]
    InvalidToday(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub filter: FilterSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DataConfig {
    /// JSON file with records keyed by collection name; built-in samples if unset
    pub seed_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FilterSettings {
    /// Pin "today" for date buckets (YYYY-MM-DD); the local date if unset
    pub today: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log file; no file layer if unset
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl FilterSettings {
    pub fn fixed_today(&self) -> Result<Option<NaiveDate>, ConfigError> {
        match self.today.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| ConfigError::InvalidToday(value.to_string())),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[data]

[filter]

[logging]
filter = "info"
file = "target/logs/dashboard.log"
"#;

/// Where the loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// Embedded default; `missing` is the config.toml path that was tried
    Embedded { missing: Option<PathBuf> },
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Embedded { missing: Some(path) } => write!(
                f,
                "default embedded configuration (config.toml not found at {})",
                path.display()
            ),
            ConfigSource::Embedded { missing: None } => {
                write!(f, "default embedded configuration")
            }
        }
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
///
/// Runs before logging is set up, so the source is returned for the caller
/// to log.
pub fn load_config() -> anyhow::Result<(Config, ConfigSource)> {
    let mut missing = None;
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                let config = load_config_from(&config_path)?;
                return Ok((config, ConfigSource::File(config_path)));
            }
            missing = Some(config_path);
        }
    }

    Ok((parse_config(DEFAULT_CONFIG)?, ConfigSource::Embedded { missing }))
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.filter.fixed_today()?;
    Ok(config)
}

/// Resolve a configured path: absolute as is, relative against the
/// executable directory, or the current directory as a last resort
pub fn resolve_path(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    PathBuf::from(path_str)
}

/// Get the seed file path from configuration, if any
pub fn get_seed_path(config: &Config) -> Option<PathBuf> {
    config.data.seed_path.as_deref().map(resolve_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.logging.file.as_deref(), Some("target/logs/dashboard.log"));
        assert!(get_seed_path(&config).is_none());
        assert_eq!(config.filter.fixed_today().unwrap(), None);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.logging.filter, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_fixed_today() {
        let config = parse_config("[filter]\ntoday = \"2025-04-15\"\n").unwrap();
        assert_eq!(
            config.filter.fixed_today().unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 15)
        );
    }

    #[test]
    fn test_invalid_today_is_rejected() {
        assert!(parse_config("[filter]\ntoday = \"15.04.2025\"\n").is_err());
    }

    #[test]
    fn test_config_source_display() {
        let source = ConfigSource::Embedded {
            missing: Some(PathBuf::from("/opt/app/config.toml")),
        };
        assert_eq!(
            source.to_string(),
            "default embedded configuration (config.toml not found at /opt/app/config.toml)"
        );
        assert_eq!(
            ConfigSource::File(PathBuf::from("/etc/dashboard.toml")).to_string(),
            "/etc/dashboard.toml"
        );
    }

    #[test]
    fn test_absolute_seed_path() {
        let config = parse_config("[data]\nseed_path = \"/tmp/seed.json\"\n").unwrap();
        assert_eq!(get_seed_path(&config), Some(PathBuf::from("/tmp/seed.json")));
    }
}
