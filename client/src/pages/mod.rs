//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod article;
pub mod category;
pub mod home;
pub mod login;
pub mod writer_dashboard;
