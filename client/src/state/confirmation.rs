//! Order confirmation state owned by one checkout success view.
//!
//! DESIGN
//! ======
//! The confirmation is generated on activation and then frozen. Re-renders
//! read the stored value; only a fresh mount (a new `ConfirmationState`)
//! produces a new order id.

#[cfg(test)]
#[path = "confirmation_test.rs"]
mod confirmation_test;

use storefront::OrderConfirmation;
use time::OffsetDateTime;

/// Shown while the view is server-rendered and not yet activated.
pub const PENDING_LABEL: &str = "…";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfirmationState {
    pub current: Option<OrderConfirmation>,
}

impl ConfirmationState {
    /// Generate the confirmation for `now` unless one already exists.
    pub fn activate(&mut self, now: OffsetDateTime) -> &OrderConfirmation {
        self.current.get_or_insert_with(|| OrderConfirmation::generate(now))
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn order_id_label(&self) -> &str {
        self.current.as_ref().map_or(PENDING_LABEL, |c| c.order_id.as_str())
    }

    #[must_use]
    pub fn delivery_label(&self) -> &str {
        self.current.as_ref().map_or(PENDING_LABEL, |c| c.estimated_delivery_label.as_str())
    }
}
