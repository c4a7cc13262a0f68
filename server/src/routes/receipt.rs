//! Receipt export endpoint backing the "Download Receipt" action.

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use storefront::OrderConfirmation;
use storefront::order::is_order_id;
use storefront::receipt::{receipt_filename, render_receipt};
use time::{OffsetDateTime, UtcOffset};

#[derive(Debug, Deserialize)]
pub struct ReceiptQuery {
    /// Unix seconds when the order was confirmed. Defaults to now.
    pub placed_at: Option<i64>,
    /// Shopper's UTC offset in minutes east of UTC. Defaults to UTC.
    pub offset: Option<i32>,
}

/// `GET /api/orders/:order_id/receipt` — plain-text receipt as an attachment.
pub async fn download_receipt(
    Path(order_id): Path<String>,
    Query(query): Query<ReceiptQuery>,
) -> Result<Response, StatusCode> {
    if !is_order_id(&order_id) {
        tracing::debug!(%order_id, "receipt requested for malformed order id");
        return Err(StatusCode::BAD_REQUEST);
    }
    let offset = match query.offset {
        Some(minutes) => minutes
            .checked_mul(60)
            .and_then(|secs| UtcOffset::from_whole_seconds(secs).ok())
            .ok_or(StatusCode::BAD_REQUEST)?,
        None => UtcOffset::UTC,
    };
    let placed_at = match query.placed_at {
        Some(secs) => OffsetDateTime::from_unix_timestamp(secs).map_err(|_| StatusCode::BAD_REQUEST)?,
        None => OffsetDateTime::now_utc(),
    }
    .to_offset(offset);

    let confirmation = OrderConfirmation::restore(order_id, placed_at);
    let body = render_receipt(&confirmation);
    let disposition = format!("attachment; filename=\"{}\"", receipt_filename(&confirmation.order_id));
    tracing::info!(order_id = %confirmation.order_id, "receipt exported");

    Ok(([(CONTENT_TYPE, "text/plain; charset=utf-8".to_owned()), (CONTENT_DISPOSITION, disposition)], body)
        .into_response())
}

#[cfg(test)]
#[path = "receipt_test.rs"]
mod tests;
