//! Shared storefront model used by both `server` and `client`.
//!
//! This crate owns the category catalog, the order confirmation derivation,
//! and the fixed page content rendered by the checkout success screen. It has
//! no UI dependency so the same data can be validated on the server at startup
//! and rendered by the Leptos views during SSR and hydration.

pub mod category;
pub mod content;
pub mod order;
pub mod receipt;
pub mod routes;

pub use category::{CardSize, Catalog, CatalogError, Category};
pub use order::OrderConfirmation;
