//! Browser `localStorage` helpers for the bearer token and UI preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so the data
//! fetcher and pages never repeat web-sys glue. On the server every read
//! yields `None` and every write is a no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::TOKEN_STORAGE_KEY;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read a raw string value for `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a raw string value for `key`.
pub fn save_raw(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from storage.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_raw(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    save_raw(key, &raw);
}

/// Bearer token persisted by the login flow, if any.
pub fn load_token() -> Option<String> {
    load_raw(TOKEN_STORAGE_KEY).and_then(|raw| clean_token(&raw))
}

pub fn save_token(token: &str) {
    if let Some(token) = clean_token(token) {
        save_raw(TOKEN_STORAGE_KEY, &token);
    }
}

pub fn clear_token() {
    remove(TOKEN_STORAGE_KEY);
}

/// Trim a stored token; blank values count as absent.
fn clean_token(raw: &str) -> Option<String> {
    let token = raw.trim();
    (!token.is_empty()).then(|| token.to_owned())
}
