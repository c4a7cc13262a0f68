//! Static help-center page.

use leptos::prelude::*;
use storefront::routes;

use crate::components::help_panel::HelpPanel;

#[component]
pub fn HelpPage() -> impl IntoView {
    view! {
        <div class="help-page">
            <h1 class="help-page__title">"Help Center"</h1>
            <p>"Questions about an order, shipping, or returns? Reach us any way you like."</p>
            <HelpPanel/>
            <a class="btn" href=routes::HOME>"Back to shop"</a>
        </div>
    }
}
