//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, panels, and route chrome while reading shared
//! state from Leptos context providers. None of them fetch data.

pub mod access_denied;
pub mod article_card;
pub mod category_card;
pub mod empty_state;
pub mod error_panel;
pub mod loading;
pub mod route_guard;
pub mod site_header;
pub mod status_badge;
