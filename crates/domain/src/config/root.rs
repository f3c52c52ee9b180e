use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::fallback::FallbackConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::web::WebConfig;
use crate::AddressFamily;

const LOCAL_CONFIG_PATH: &str = "wilddns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/wilddns/config.toml";

/// Main configuration structure for wilddns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// DNS listener (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Fallback address sources
    #[serde(default)]
    pub fallback: FallbackConfig,

    /// Static documentation server
    #[serde(default)]
    pub web: WebConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. wilddns.toml in current directory
    /// 3. /etc/wilddns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(port) = overrides.web_port {
            self.web.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(ipv4) = overrides.external_ipv4 {
            self.fallback.external_ipv4 = Some(ipv4);
        }
        if let Some(ipv6) = overrides.external_ipv6 {
            self.fallback.external_ipv6 = Some(ipv6);
        }
        if overrides.no_web {
            self.web.enabled = false;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.web.enabled && self.web.port == 0 {
            return Err(ConfigError::Validation(
                "Web port cannot be 0 while the web server is enabled".to_string(),
            ));
        }

        for family in [AddressFamily::V4, AddressFamily::V6] {
            if self.fallback.static_address(family).is_none()
                && self.fallback.echo_url(family).trim().is_empty()
            {
                return Err(ConfigError::Validation(format!(
                    "No static {} address and no echo URL configured",
                    family
                )));
            }
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub external_ipv4: Option<String>,
    pub external_ipv6: Option<String>,
    pub no_web: bool,
    pub log_level: Option<String>,
}
