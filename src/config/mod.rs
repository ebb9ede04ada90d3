//! Configuration management

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub upstream: UpstreamConfig,
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.spacexdata.com/v3".to_string()
}

pub fn load_config() -> Result<Config> {
    let config = ::config::Config::builder()
        // Load from config file if it exists
        .add_source(::config::File::with_name("launchdeck").required(false))
        // Override with environment variables (LAUNCHDECK_PORT, LAUNCHDECK_UPSTREAM__BASE_URL)
        .add_source(
            ::config::Environment::with_prefix("LAUNCHDECK")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}
