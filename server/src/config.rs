//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT '{value}': expected an integer between 1 and 65535")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Overrides the Leptos `site-root` when serving `/pkg` assets.
    pub site_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `INKLY_SITE_DIR`: directory holding the compiled `pkg/` bundle
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but not a
    /// non-zero `u16`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let site_dir = parse_site_dir(std::env::var("INKLY_SITE_DIR").ok().as_deref());
        Ok(Self { port, site_dir })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    match raw.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort { value: raw.to_owned() }),
    }
}

fn parse_site_dir(raw: Option<&str>) -> Option<PathBuf> {
    raw.map(str::trim).filter(|v| !v.is_empty()).map(PathBuf::from)
}
