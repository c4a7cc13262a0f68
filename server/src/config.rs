//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// A boolean variable holds something other than 1/0, true/false, yes/no, on/off.
    #[error("invalid boolean for {var}: {value}")]
    InvalidBool { var: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// YAML or JSON category list. Built-in categories are used when unset.
    pub catalog_path: Option<PathBuf>,
    pub reduced_motion: bool,
    /// Path handed to `leptos::config::get_configuration`.
    pub leptos_config: Option<String>,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `STOREFRONT_CATALOG_PATH`: catalog file to load at startup
    /// - `STOREFRONT_REDUCED_MOTION`: disable entrance/hover animation
    /// - `STOREFRONT_LEPTOS_CONFIG`: Cargo.toml carrying `[package.metadata.leptos]`
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match non_empty_var("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let reduced_motion = match non_empty_var("STOREFRONT_REDUCED_MOTION") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidBool {
                var: "STOREFRONT_REDUCED_MOTION".into(),
                value: raw,
            })?,
            None => false,
        };

        Ok(Self {
            port,
            catalog_path: non_empty_var("STOREFRONT_CATALOG_PATH").map(PathBuf::from),
            reduced_motion,
            leptos_config: non_empty_var("STOREFRONT_LEPTOS_CONFIG"),
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
