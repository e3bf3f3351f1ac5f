//! Shared client state provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! `session` is the single source of truth for who is signed in; `fetch`
//! is the per-view request lifecycle container every page reuses.

pub mod fetch;
pub mod session;
