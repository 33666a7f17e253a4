//! Greeting line formatting

use std::fmt;

use crate::config::Config;

/// Greeting line, optionally naming where it comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Greeting {
    /// `hello <What>`
    Plain(String),
    /// `hello <What> from <label>`
    From { what: String, from: String },
}

impl Greeting {
    pub fn plain(config: &Config) -> Self {
        Greeting::Plain(config.what.clone())
    }

    pub fn from_label(config: &Config, from: impl Into<String>) -> Self {
        Greeting::From {
            what: config.what.clone(),
            from: from.into(),
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Greeting::Plain(what) => write!(f, "hello {}", what),
            Greeting::From { what, from } => write!(f, "hello {} from {}", what, from),
        }
    }
}

pub fn greeting(config: &Config) -> String {
    Greeting::plain(config).to_string()
}

pub fn greeting_from(config: &Config, from: &str) -> String {
    Greeting::from_label(config, from).to_string()
}
