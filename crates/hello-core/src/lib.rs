//! Embedded configuration decode and greeting formatting

mod config;
mod error;
mod greeting;
mod runtime;

pub use config::{Config, DEFAULT_CONFIG};
pub use error::{ConfigError, Result};
pub use greeting::{greeting, greeting_from, Greeting};
pub use runtime::runtime_version;
