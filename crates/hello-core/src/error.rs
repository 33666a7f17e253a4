use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to decode config: {0}")]
    Decode(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
