//! Authenticated user identity and the closed role set.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};

use crate::de::opt_id_from_string_or_number;

/// Role attached to an account.
///
/// The set is closed: anything the backend sends outside of the known roles
/// deserializes to [`Role::Unknown`], which no protected area accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Role {
    /// Regular reader account (`"reader"` or `"user"` on the wire).
    Reader,
    /// Author with access to the writer dashboard.
    Writer,
    /// Site administrator.
    Admin,
    #[default]
    Unknown,
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl Role {
    /// Parse a wire role name, case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "reader" | "user" => Self::Reader,
            "writer" => Self::Writer,
            "admin" => Self::Admin,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Reader => "reader",
            Self::Writer => "writer",
            Self::Admin => "admin",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An authenticated user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, alias = "_id", deserialize_with = "opt_id_from_string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// Name for headers and audit lines: display name, else email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.email)
    }

    /// Stable identifier for audit records: id, else email, else `None`.
    #[must_use]
    pub fn actor_id(&self) -> Option<String> {
        self.id
            .clone()
            .or_else(|| (!self.email.is_empty()).then(|| self.email.clone()))
    }
}

/// `data` payload of `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub user: Option<User>,
}

/// `data` payload of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginGrant {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}
