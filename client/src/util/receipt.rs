//! Receipt export capability used by the "Download Receipt" action.
//!
//! SYSTEM CONTEXT
//! ==============
//! The checkout view never builds receipts itself. It calls whatever
//! `ReceiptExport` is in context; the app installs the browser download
//! below unless the host provided its own.

#[cfg(test)]
#[path = "receipt_test.rs"]
mod receipt_test;

use leptos::prelude::*;
use storefront::OrderConfirmation;

#[derive(Clone, Copy)]
pub struct ReceiptExport(pub Callback<OrderConfirmation>);

impl ReceiptExport {
    pub fn new(export: impl Fn(OrderConfirmation) + Send + Sync + 'static) -> Self {
        Self(Callback::new(export))
    }

    /// Navigate the browser to the server receipt endpoint. No-op outside the browser.
    pub fn browser_download() -> Self {
        Self::new(download_via_browser)
    }

    pub fn export(&self, confirmation: OrderConfirmation) {
        self.0.run(confirmation);
    }
}

fn download_via_browser(confirmation: OrderConfirmation) {
    let href = storefront::routes::receipt_href(&confirmation);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href(&href) {
                log::warn!("receipt download failed for {}: {err:?}", confirmation.order_id);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}
