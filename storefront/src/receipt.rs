//! Plain-text receipt served by the receipt export endpoint.

use time::macros::format_description;

use crate::content::{SUPPORT_EMAIL, SUPPORT_PHONE};
use crate::order::OrderConfirmation;

/// Attachment filename for a receipt download.
#[must_use]
pub fn receipt_filename(order_id: &str) -> String {
    format!("receipt-{order_id}.txt")
}

/// Render the receipt body. Lines end with `\n`.
#[must_use]
pub fn render_receipt(confirmation: &OrderConfirmation) -> String {
    let placed = confirmation
        .placed_at
        .format(format_description!(
            "[year]-[month]-[day] [hour]:[minute] [offset_hour sign:mandatory]:[offset_minute]"
        ))
        .unwrap_or_else(|_| confirmation.placed_at.unix_timestamp().to_string());

    let mut out = String::new();
    out.push_str("ORDER RECEIPT\n");
    out.push_str("=============\n");
    out.push_str(&format!("Order number:       {}\n", confirmation.order_id));
    out.push_str(&format!("Placed:             {placed}\n"));
    out.push_str(&format!("Estimated delivery: {}\n", confirmation.estimated_delivery_label));
    out.push('\n');
    out.push_str(&format!("Questions? {SUPPORT_EMAIL} / {SUPPORT_PHONE}\n"));
    out
}

#[cfg(test)]
#[path = "receipt_test.rs"]
mod tests;
