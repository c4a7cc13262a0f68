//! Storefront landing page hosting the category showcase.

use leptos::prelude::*;

use crate::components::category_showcase::CategoryShowcase;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <CategoryShowcase/>
        </div>
    }
}
