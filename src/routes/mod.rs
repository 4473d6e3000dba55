//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server has no API of its own: it renders the Leptos app, serves the
//! compiled WASM/CSS bundle under `/pkg`, and answers health checks.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
}

/// Build the full application router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (the
/// `LEPTOS_*` environment set by `cargo leptos` is missing or malformed).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = config
        .site_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(leptos_options.site_root.as_ref()));
    let pkg_dir = site_root.join(leptos_options.site_pkg_dir.as_ref());
    tracing::info!(pkg_dir = %pkg_dir.display(), "serving static assets");

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
