//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This host only server-renders the Leptos shell and serves the compiled
//! `/pkg` bundle. Article, category, and auth data come from the separate
//! REST backend that the browser calls directly.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Host-level routes that do not depend on Leptos options.
fn static_routes(site_root: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
}

/// Leptos SSR frontend plus static assets and health check.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = config
        .site_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(leptos_options.site_root.as_ref()));
    tracing::info!(site_root = %site_root.display(), "serving static assets");

    Ok(static_routes(&site_root)
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
