//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor and
//! into each SSR render as Leptos context. Everything in it is read-only
//! after startup.

use std::path::Path;
use std::sync::Arc;

use client::state::presentation::MotionHints;
use storefront::Catalog;

use crate::config::ServerConfig;

/// Clone is required by Axum; the catalog is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub motion: MotionHints,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog, motion: MotionHints) -> Self {
        Self { catalog: Arc::new(catalog), motion }
    }

    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        let catalog = load_catalog(config.catalog_path.as_deref());
        Self::new(catalog, MotionHints::from_reduced_motion(config.reduced_motion))
    }
}

/// Load the configured catalog, falling back to the built-in categories.
pub fn load_catalog(path: Option<&Path>) -> Catalog {
    let Some(path) = path else {
        let catalog = Catalog::builtin();
        tracing::info!(categories = catalog.len(), "using built-in catalog");
        return catalog;
    };
    match Catalog::load(path) {
        Ok(catalog) => {
            tracing::info!(path = %path.display(), categories = catalog.len(), "catalog loaded");
            catalog
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "catalog load failed — using built-in catalog");
            Catalog::builtin()
        }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
