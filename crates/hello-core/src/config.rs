//! Embedded greeting configuration

use serde::Deserialize;

use crate::error::Result;

/// Configuration literal compiled into both binaries
pub const DEFAULT_CONFIG: &str = "What = 'world'\n";

/// Greeting configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Greeting target (`What` in the text format)
    #[serde(rename = "What", alias = "what", default)]
    pub what: String,
}

impl Config {
    /// Decode a TOML document into a config
    pub fn decode(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        tracing::debug!(what = %config.what, "decoded config");
        Ok(config)
    }

    /// Decode [`DEFAULT_CONFIG`], falling back to an empty config on failure
    pub fn embedded() -> Self {
        Self::decode(DEFAULT_CONFIG).unwrap_or_else(|e| {
            tracing::warn!("ignoring embedded config: {}", e);
            Self::default()
        })
    }
}
