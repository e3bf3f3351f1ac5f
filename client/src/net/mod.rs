//! Networking for the Inkly REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds endpoint URLs, attaches credentials, and decodes envelopes
//! into canonical records from the `records` crate.

pub mod api;
