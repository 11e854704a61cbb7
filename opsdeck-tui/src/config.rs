//! Configuration loading for the Opsdeck TUI.
//!
//! All fields are required unless explicitly marked optional. No defaults.

use opsdeck_core::Industry;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    /// Industry shown on first launch (persisted state takes precedence).
    pub default_industry: Industry,
    pub tick_interval_ms: u64,
    /// Latency before the studio test chat's simulated reply arrives.
    pub reply_latency_ms: u64,
    pub persistence_path: PathBuf,
    pub log_path: PathBuf,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (use --config or OPSDECK_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let path = path.ok_or(ConfigError::MissingConfigPath)?;
        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: TuiConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_interval_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.reply_latency_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "reply_latency_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.persistence_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "persistence_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.theme.name.to_ascii_lowercase() != "opsdeck" {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "only 'opsdeck' is supported".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("OPSDECK_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> TuiConfig {
        TuiConfig {
            default_industry: Industry::Clinic,
            tick_interval_ms: 200,
            reply_latency_ms: 900,
            persistence_path: "tmp/opsdeck-state.json".into(),
            log_path: "tmp/opsdeck.log".into(),
            theme: ThemeConfig {
                name: "opsdeck".to_string(),
            },
        }
    }

    #[test]
    fn base_config_is_valid() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn zero_tick_interval_is_rejected() {
        let mut config = base_config();
        config.tick_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let mut config = base_config();
        config.theme.name = "synthwave".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_full_toml() {
        let toml = r#"
            default_industry = "hotel"
            tick_interval_ms = 250
            reply_latency_ms = 900
            persistence_path = "tmp/state.json"
            log_path = "tmp/opsdeck.log"

            [theme]
            name = "opsdeck"
        "#;
        let config: TuiConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.default_industry, Industry::Hotel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let toml = r#"
            default_industry = "hotel"
            tick_interval_ms = 250
            reply_latency_ms = 900
            persistence_path = "tmp/state.json"
            log_path = "tmp/opsdeck.log"
            surprise = true

            [theme]
            name = "opsdeck"
        "#;
        assert!(toml::from_str::<TuiConfig>(toml).is_err());
    }
}
