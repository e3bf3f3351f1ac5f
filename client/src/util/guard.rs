//! Route authorization decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same four-way decision: wait while the
//! session resolves, send anonymous visitors to `/login` with a return path,
//! deny signed-in users whose role is not listed for the area, or render.
//!
//! Roles are matched exactly against [`ACCESS_RULES`]. A higher-privilege
//! role does not inherit a lower one's areas: `admin` is denied the
//! writer-only dashboard.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use records::Role;

use crate::state::session::Session;

/// Login route path.
pub const LOGIN_PATH: &str = "/login";

/// Where a successful login lands when no return path was captured.
pub const DEFAULT_RETURN_PATH: &str = "/writer";

/// Areas of the app that require a specific role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProtectedArea {
    WriterDashboard,
}

/// `(area, allowed roles)` pairs consulted by [`decide`].
pub const ACCESS_RULES: &[(ProtectedArea, &[Role])] = &[(ProtectedArea::WriterDashboard, &[Role::Writer])];

impl ProtectedArea {
    /// Roles allowed into this area; empty when the area has no rule.
    #[must_use]
    pub fn allowed_roles(self) -> &'static [Role] {
        ACCESS_RULES
            .iter()
            .find(|(area, _)| *area == self)
            .map(|(_, roles)| *roles)
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::WriterDashboard => "writer dashboard",
        }
    }
}

/// Record of a signed-in user turned away from a protected area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeniedAttempt {
    pub area: ProtectedArea,
    /// User id or email, when the session carries a user.
    pub actor: Option<String>,
    /// Role the user holds; `None` when the session has no user record.
    pub current_role: Option<Role>,
    pub required: &'static [Role],
}

impl DeniedAttempt {
    #[must_use]
    pub fn current_role_label(&self) -> &'static str {
        self.current_role.map_or("None", Role::label)
    }

    #[must_use]
    pub fn required_label(&self) -> String {
        if self.required.is_empty() {
            return "None".to_owned();
        }
        self.required
            .iter()
            .map(|role| role.label())
            .collect::<Vec<_>>()
            .join(" or ")
    }

    /// One-line audit record for the console log.
    #[must_use]
    pub fn audit_line(&self) -> String {
        format!(
            "access denied: area={} actor={} role={} required={}",
            self.area.label(),
            self.actor.as_deref().unwrap_or("unknown"),
            self.current_role_label(),
            self.required_label(),
        )
    }
}

/// Outcome of a guard check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving; show a placeholder.
    Pending,
    /// Not signed in; navigate to `to` (login with the return path attached).
    Redirect { to: String },
    /// Signed in with the wrong role.
    Forbidden(DeniedAttempt),
    Authorized,
}

/// Decide what a protected route renders for `session`.
///
/// `from` is the current in-app location, carried to the login page so the
/// user returns there afterwards.
#[must_use]
pub fn decide(session: &Session, area: ProtectedArea, from: &str) -> GuardDecision {
    if session.loading() {
        return GuardDecision::Pending;
    }
    if !session.is_authenticated() {
        return GuardDecision::Redirect { to: login_redirect(from) };
    }

    let required = area.allowed_roles();
    let user = session.user();
    match user {
        Some(user) if required.contains(&user.role) => GuardDecision::Authorized,
        _ => GuardDecision::Forbidden(DeniedAttempt {
            area,
            actor: user.and_then(records::User::actor_id),
            current_role: user.map(|u| u.role),
            required,
        }),
    }
}

/// Login URL carrying `from` as the `from` query parameter.
#[must_use]
pub fn login_redirect(from: &str) -> String {
    let from = sanitize_return_path(Some(from));
    if from == "/" {
        return LOGIN_PATH.to_owned();
    }
    format!("{LOGIN_PATH}?from={}", urlencoding::encode(&from))
}

/// Post-login destination recovered from the `from` query parameter.
///
/// Only same-origin absolute paths are honored; anything else lands on
/// [`DEFAULT_RETURN_PATH`].
#[must_use]
pub fn return_target(from: Option<&str>) -> String {
    match from.map(str::trim) {
        Some(path) if is_local_path(path) && !path.starts_with(LOGIN_PATH) => path.to_owned(),
        _ => DEFAULT_RETURN_PATH.to_owned(),
    }
}

fn sanitize_return_path(from: Option<&str>) -> String {
    match from.map(str::trim) {
        Some(path) if is_local_path(path) => path.to_owned(),
        _ => "/".to_owned(),
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}

/// Join a router pathname and search string into one in-app location.
#[must_use]
pub fn location_path(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}
