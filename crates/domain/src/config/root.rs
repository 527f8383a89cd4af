use serde::Deserialize;
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;
use crate::ForwardNames;

const LOCAL_CONFIG_PATH: &str = "stubdns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/stubdns/config.toml";

/// Process-wide configuration. Built once at startup and never mutated.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults, then layer the
    /// command-line values on top and validate the result.
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. stubdns.toml in current directory
    /// 3. /etc/stubdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.upstream.host = config.upstream.host.trim().to_string();
        Ok(config)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) -> Result<(), ConfigError> {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(ip4) = overrides.ip4 {
            self.server.static_ipv4 = ip4
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidIpv4(ip4.clone()))?;
        }
        if let Some(ip6) = overrides.ip6 {
            self.server.static_ipv6 = ip6
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidIpv6(ip6.clone()))?;
        }
        if let Some(upstream) = overrides.upstream {
            self.upstream.host = upstream.trim().to_string();
        }
        if let Some(forward) = overrides.forward {
            self.upstream.forward = ForwardNames::parse(&forward);
        }
        if let Some(log_date) = overrides.log_date {
            self.logging.log_date = log_date;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upstream.host.trim().is_empty() {
            return Err(ConfigError::Validation(
                "upstream cannot be blank".to_string(),
            ));
        }
        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "upstream timeout must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Command-line overrides for configuration.
///
/// Addresses stay as raw strings here so that an invalid literal is reported
/// as a configuration error rather than a usage error.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub ip4: Option<String>,
    pub ip6: Option<String>,
    pub upstream: Option<String>,
    pub forward: Option<String>,
    pub log_date: Option<bool>,
    pub log_level: Option<String>,
}
