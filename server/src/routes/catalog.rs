//! Read-only catalog endpoint.

use axum::extract::State;
use axum::response::Json;
use storefront::Catalog;

use crate::state::AppState;

/// `GET /api/catalog/categories` — the catalog loaded at startup, in display order.
pub async fn list_categories(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.catalog.as_ref().clone())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
