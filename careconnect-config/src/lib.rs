use core::fmt::{Debug, Display};

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;

/// Process-wide configuration for talking to the facility API.
///
/// Constructed once at startup and injected into the dispatcher; nothing in
/// this workspace reads environment variables ad hoc.
#[derive(Deserialize, Clone)]
pub struct Config {
    /// Base URL of the facility API, including the trailing slash
    /// (collection paths are appended verbatim).
    pub api_url: String,
    /// Static bearer token forwarded on every request.
    pub api_token: String,
}

#[derive(thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Extract(#[from] figment::Error),
}

impl Debug for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

pub fn get_config() -> Result<Config, ConfigError> {
    Ok(Figment::new()
        .merge(Toml::file("careconnect.toml"))
        .merge(Env::prefixed("CARECONNECT_"))
        .extract()?)
}
