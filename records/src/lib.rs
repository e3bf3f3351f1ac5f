//! Shared record model and response-envelope handling for the Inkly backend.
//!
//! This crate owns the wire representation of articles, categories, and users
//! as the REST backend returns them, plus the normalization step that turns
//! loosely-shaped JSON into one canonical record per kind. It is UI-framework
//! agnostic so both the Leptos client and its tests consume it directly.

pub mod article;
pub mod category;
mod de;
pub mod envelope;
pub mod user;

pub use article::{Article, ArticleDetail, ArticleList, ArticleRecord, ArticleStatus, normalize_articles};
pub use category::{Category, CategoryList, CategoryLookupError, resolve_category};
pub use envelope::{Envelope, FetchError, interpret};
pub use user::{CurrentUser, LoginGrant, Role, User};
