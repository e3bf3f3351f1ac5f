//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle cannot read server environment at runtime, so the backend
//! base URL is baked in from `INKLY_API_BASE` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend base URL used when `INKLY_API_BASE` is unset at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "inkly_token";

/// `localStorage` key holding the writer dashboard's last list query.
pub const DASHBOARD_QUERY_KEY: &str = "inkly_dashboard_query";

/// Backend base URL without a trailing slash.
pub fn api_base() -> String {
    normalize_base(option_env!("INKLY_API_BASE"))
}

fn normalize_base(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|base| !base.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_owned()
}
