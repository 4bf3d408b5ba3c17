use reqwest::Url;

use crate::client::error::config::ConfigError;

/// Backend used when `DEVLA_API_URL` was not set at build time
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Name of the build-time variable overriding the backend URL
pub const API_URL_VAR: &str = "DEVLA_API_URL";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_url: String,
}

impl Config {
    /// Reads the backend URL baked in at compile time.
    ///
    /// The web target has no process environment, so the value is captured with
    /// `option_env!` when the crate is built.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(option_env!("DEVLA_API_URL"))
    }

    pub fn from_value(value: Option<&str>) -> Result<Self, ConfigError> {
        let raw = value.unwrap_or(DEFAULT_API_URL).trim();

        let url = Url::parse(raw).map_err(|e| ConfigError::InvalidEnvValue {
            var: API_URL_VAR.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEnvValue {
                var: API_URL_VAR.to_string(),
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }

        Ok(Self {
            api_url: raw.trim_end_matches('/').to_string(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
