use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::lookup::LookupConfig;
use super::pacing::{PacingConfig, PacingStrategy};
use super::providers::ProvidersConfig;

/// Main configuration structure for Ferrous RevIP
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Input/output paths and request settings
    #[serde(default)]
    pub lookup: LookupConfig,

    /// Spacing between task launches
    #[serde(default)]
    pub pacing: PacingConfig,

    /// Reverse IP providers
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-revip.toml in current directory
    /// 3. /etc/ferrous-revip/config.toml
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

    /// Parse configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(input) = overrides.input_file {
            self.lookup.input_file = input;
        }
        if let Some(output) = overrides.output_file {
            self.lookup.output_file = output;
        }
        if let Some(timeout) = overrides.request_timeout_secs {
            self.lookup.request_timeout_secs = timeout;
        }
        if let Some(delay) = overrides.delay_ms {
            self.pacing.delay_ms = delay;
        }
        if let Some(key) = overrides.securitytrails_api_key {
            self.providers.securitytrails.api_key = Some(key);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lookup.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        if self.pacing.strategy == PacingStrategy::TokenBucket && self.pacing.burst == 0 {
            return Err(ConfigError::Validation(
                "Token bucket pacing needs a burst of at least 1".to_string(),
            ));
        }

        let active = self.providers.active();
        if active.is_empty() {
            return Err(ConfigError::Validation(
                "No reverse IP providers enabled".to_string(),
            ));
        }

        for provider in &active {
            if provider.endpoint.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Provider '{}' has an empty endpoint",
                    provider.kind
                )));
            }
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("ferrous-revip.toml").exists() {
            Some("ferrous-revip.toml".to_string())
        } else if std::path::Path::new("/etc/ferrous-revip/config.toml").exists() {
            Some("/etc/ferrous-revip/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub input_file: Option<String>,
    pub output_file: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub delay_ms: Option<u64>,
    pub securitytrails_api_key: Option<String>,
    pub log_level: Option<String>,
}
