//! Request lifecycle state shared by every data-fetching view.
//!
//! DESIGN
//! ======
//! Each view owns one `FetchState` per resource. Every request is tagged with
//! a monotonically increasing [`RequestTicket`]; a response is applied only if
//! its ticket is still the latest one issued for that state, so a slow reply
//! to an earlier navigation can never overwrite a newer one.
//!
//! `loading` is set by [`FetchState::begin`] and cleared by
//! [`FetchState::settle`] on both success and failure.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::fmt::Display;
use std::future::Future;

use leptos::prelude::*;

/// Tag identifying one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// `{data, loading, error}` for one fetched resource.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    issued: u64,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            issued: 0,
        }
    }
}

impl<T> FetchState<T> {
    /// State for a view that fetches on mount.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Mark a new request in flight and return its ticket.
    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        self.loading = true;
        self.error = None;
        RequestTicket(self.issued)
    }

    /// `true` when `ticket` is the most recently issued one.
    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Apply a response. Returns `false` (and changes nothing) when a newer
    /// request has been issued since `ticket`.
    pub fn settle<E: Display>(&mut self, ticket: RequestTicket, result: Result<T, E>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => {
                self.data = None;
                self.error = Some(err.to_string());
            }
        }
        true
    }

    /// Settled successfully with a value for which `is_empty` holds.
    pub fn is_empty_with(&self, is_empty: impl Fn(&T) -> bool) -> bool {
        !self.loading && self.error.is_none() && self.data.as_ref().is_some_and(is_empty)
    }
}

/// Issue `request` against `state`, applying its result when it resolves.
///
/// Responses that arrive after a newer request was issued are dropped.
pub fn spawn_fetch<T, E, Fut>(state: RwSignal<FetchState<T>>, request: Fut)
where
    T: Send + Sync + 'static,
    E: Display + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let Some(ticket) = state.try_update(FetchState::begin) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let result = request.await;
        let applied = state.try_update(|s| s.settle(ticket, result)).unwrap_or(false);
        if !applied {
            leptos::logging::log!("discarded stale response for request {}", ticket.0);
        }
    });
}
