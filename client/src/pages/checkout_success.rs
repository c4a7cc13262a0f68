//! Checkout success page shown after an order is placed.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing here talks to a backend. The order id and delivery estimate are
//! synthesized from the clock when the page mounts in the browser; during SSR
//! the page renders with placeholders. Receipt export is delegated to the
//! `ReceiptExport` capability in context.

use leptos::prelude::*;
use storefront::content::ACTIVE_STEP;
use storefront::routes;

use crate::components::help_panel::HelpPanel;
use crate::components::info_panels::InfoPanels;
use crate::components::progress_steps::ProgressSteps;
use crate::state::confirmation::ConfirmationState;
use crate::state::presentation::{MotionHints, class_list};
use crate::util::receipt::ReceiptExport;

#[component]
pub fn CheckoutSuccessPage() -> impl IntoView {
    let motion = use_context::<MotionHints>().unwrap_or_default();
    let receipt = use_context::<ReceiptExport>().unwrap_or_else(ReceiptExport::browser_download);
    let confirmation = RwSignal::new(ConfirmationState::default());

    // Effects only run in the browser, so activation happens once per mount.
    Effect::new(move || {
        if confirmation.with_untracked(ConfirmationState::is_active) {
            return;
        }
        let now = crate::util::clock::now();
        confirmation.update(|state| {
            state.activate(now);
        });
    });

    let order_id = move || confirmation.with(|state| state.order_id_label().to_owned());
    let delivery = move || confirmation.with(|state| state.delivery_label().to_owned());
    let on_download = move |_| {
        if let Some(current) = confirmation.with_untracked(|state| state.current.clone()) {
            receipt.export(current);
        }
    };

    let hero_class = class_list(&["checkout-success__hero", motion.entrance_class()]);

    view! {
        <div class="checkout-success">
            <section class=hero_class>
                <div class="checkout-success__badge" role="img" aria-label="Order confirmed">"✓"</div>
                <h1 class="checkout-success__title">"Order Confirmed!"</h1>
                <p class="checkout-success__subtitle">
                    "Thank you for your purchase. Your order has been received and is being processed."
                </p>

                <dl class="checkout-success__summary">
                    <div class="checkout-success__summary-item">
                        <dt>"Order Number"</dt>
                        <dd class="checkout-success__order-id">{order_id}</dd>
                    </div>
                    <div class="checkout-success__summary-item">
                        <dt>"Estimated Delivery"</dt>
                        <dd class="checkout-success__delivery">{delivery}</dd>
                    </div>
                </dl>
            </section>

            <InfoPanels/>

            <ProgressSteps active=ACTIVE_STEP/>

            <div class="checkout-success__actions">
                <a class="btn btn--primary btn--lg" href=routes::PRODUCTS>
                    "Continue Shopping"
                </a>
                <button
                    class="btn btn--lg"
                    on:click=on_download
                    disabled=move || !confirmation.with(ConfirmationState::is_active)
                >
                    "Download Receipt"
                </button>
            </div>

            <HelpPanel/>
        </div>
    }
}
