use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::{LogFormat, LoggingConfig};
use super::reply::{MultiAddressStyle, ReplyConfig};
use super::resolver::{ResolverBackend, ResolverConfig};

const LOCAL_CONFIG_PATH: &str = "dnsnative.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dnsnative/config.toml";

/// Main configuration structure for dnsnative
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Lookup behaviour (timeout, backend, de-duplication)
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Reply rendering
    #[serde(default)]
    pub reply: ReplyConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsnative.toml in current directory
    /// 3. /etc/dnsnative/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        Self::from_toml_str(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(timeout) = overrides.timeout_secs {
            self.resolver.timeout_secs = timeout;
        }
        if let Some(backend) = overrides.backend {
            self.resolver.backend = backend;
        }
        if let Some(dedupe) = overrides.dedupe_addresses {
            self.resolver.dedupe_addresses = dedupe;
        }
        if let Some(style) = overrides.multi_address_style {
            self.reply.multi_address_style = style;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Resolver timeout cannot be 0".to_string(),
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Log level cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub timeout_secs: Option<u64>,
    pub backend: Option<ResolverBackend>,
    pub dedupe_addresses: Option<bool>,
    pub multi_address_style: Option<MultiAddressStyle>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}
