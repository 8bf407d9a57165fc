use super::{ConfigError, LoggingConfig, ServerConfig, SiteConfig, UpstreamConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub upstream_base_url: Option<String>,
    pub static_dir: Option<String>,
}

impl Config {
    /// Load configuration from an optional TOML file and apply CLI
    /// overrides. A missing path means built-in defaults.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_string(),
                    source,
                })?;
                toml::from_str(&raw).map_err(|source| ConfigError::Parse {
                    path: path.to_string(),
                    source,
                })?
            }
            None => Self::default(),
        };

        if let Some(port) = overrides.port {
            config.server.port = port;
        }
        if let Some(bind_address) = overrides.bind_address {
            config.server.bind_address = bind_address;
        }
        if let Some(base_url) = overrides.upstream_base_url {
            config.upstream.base_url = base_url;
        }
        if let Some(static_dir) = overrides.static_dir {
            config.server.static_dir = static_dir;
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be nonzero".into()));
        }
        if self.upstream.base_url.is_empty() {
            return Err(ConfigError::Invalid(
                "upstream.base_url must not be empty".into(),
            ));
        }
        if !self.upstream.base_url.starts_with("http://")
            && !self.upstream.base_url.starts_with("https://")
        {
            return Err(ConfigError::Invalid(format!(
                "upstream.base_url must be an http(s) URL, got {}",
                self.upstream.base_url
            )));
        }
        if self.upstream.refresh_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "upstream.refresh_interval_secs must be nonzero".into(),
            ));
        }
        if self.upstream.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "upstream.request_timeout_secs must be nonzero".into(),
            ));
        }
        Ok(())
    }
}
