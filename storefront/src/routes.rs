//! Navigation targets shared by the router, the views, and the server.

use crate::order::OrderConfirmation;

pub const HOME: &str = "/";
pub const PRODUCTS: &str = "/products";
pub const HELP: &str = "/help";
pub const CHECKOUT_SUCCESS: &str = "/checkout/success";

/// Product listing scoped to one category. Category ids are validated to be
/// URL-safe when the catalog is built.
#[must_use]
pub fn category_listing_href(category_id: &str) -> String {
    format!("{PRODUCTS}?category={category_id}")
}

/// Server endpoint that exports a receipt for `confirmation`.
///
/// Carries the placement offset in minutes east of UTC so the server derives
/// the same local delivery date the shopper saw.
#[must_use]
pub fn receipt_href(confirmation: &OrderConfirmation) -> String {
    format!(
        "/api/orders/{}/receipt?placed_at={}&offset={}",
        confirmation.order_id,
        confirmation.placed_at.unix_timestamp(),
        confirmation.placed_at.offset().whole_minutes()
    )
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
