//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON/receipt endpoints and stitches them with
//! Leptos SSR rendering under a single Axum router. Each SSR render receives
//! the startup catalog and motion hints as Leptos context.

pub mod catalog;
pub mod receipt;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes shared by the SSR app and external callers.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/catalog/categories", get(catalog::list_categories))
        .route("/api/orders/{order_id}/receipt", get(receipt::download_receipt))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// API routes + Leptos SSR pages + static site assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `LEPTOS_*` env vars and no readable `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState, leptos_config: Option<&str>) -> Result<Router, String> {
    let conf = get_configuration(leptos_config).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let context_state = state.clone();
    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || {
                provide_context(context_state.catalog.as_ref().clone());
                provide_context(context_state.motion);
            },
            {
                let opts = leptos_options.clone();
                move || client::app::shell(opts.clone())
            },
        )
        .with_state(leptos_options.clone());

    // WASM/CSS bundle under /pkg, everything else in the site root (images).
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(site_root_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
