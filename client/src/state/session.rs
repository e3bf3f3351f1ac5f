//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and identity-aware components read a [`Session`] snapshot
//! from context on every render. Only the auth flow (bootstrap, login,
//! logout) writes it, and only through [`SessionActions`], so no view can
//! assign fields directly.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use records::{FetchError, Role, User};

/// Where the auth flow currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Auth resolution has not finished; nothing about identity is trusted.
    #[default]
    Pending,
    /// A valid credential is present.
    Authenticated,
    /// Resolution finished without a valid credential.
    Anonymous,
}

/// Immutable snapshot of the auth session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    status: SessionStatus,
    user: Option<User>,
}

impl Session {
    /// Initial state before the auth flow resolves.
    #[must_use]
    pub fn pending() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self {
            status: SessionStatus::Authenticated,
            user: Some(user),
        }
    }

    /// Credential accepted but the backend returned no user profile.
    #[must_use]
    pub fn authenticated_without_profile() -> Self {
        Self {
            status: SessionStatus::Authenticated,
            user: None,
        }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self {
            status: SessionStatus::Anonymous,
            user: None,
        }
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.status == SessionStatus::Pending
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// Signed-in user. Always `None` while pending.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        if self.loading() { None } else { self.user.as_ref() }
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user().map(|user| user.role)
    }
}

/// What the startup token check applies once `/auth/me` answers.
#[derive(Clone, Debug, PartialEq)]
pub enum RestoreStep {
    /// The session settled first (an interactive login or logout won).
    Ignore,
    Resolve(Option<User>),
    SignOut { clear_token: bool },
}

impl Session {
    /// Decide how a late `/auth/me` reply affects this session. Only a
    /// still-pending session accepts it.
    #[must_use]
    pub fn restore_step(&self, result: Result<Option<User>, FetchError>) -> RestoreStep {
        if !self.loading() {
            return RestoreStep::Ignore;
        }
        match result {
            Ok(user) => RestoreStep::Resolve(user),
            Err(err) => RestoreStep::SignOut {
                clear_token: err.is_unauthorized(),
            },
        }
    }
}

/// Write handle owned by the auth flow.
#[derive(Clone, Copy)]
pub struct SessionActions {
    session: RwSignal<Session>,
}

impl SessionActions {
    #[must_use]
    pub fn new(session: RwSignal<Session>) -> Self {
        Self { session }
    }

    /// Read-only view handed to every other component.
    #[must_use]
    pub fn reader(self) -> ReadSignal<Session> {
        self.session.read_only()
    }

    /// Finish auth resolution with a verified credential.
    pub fn resolve(self, user: Option<User>) {
        let next = user.map_or_else(Session::authenticated_without_profile, Session::signed_in);
        self.session.set(next);
    }

    /// Finish auth resolution without a credential, or log out.
    pub fn sign_out(self) {
        self.session.set(Session::signed_out());
    }
}
