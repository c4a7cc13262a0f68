//! Product listing landing, optionally scoped by `?category=<id>`.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use storefront::{Catalog, routes};

use crate::state::showcase::ListingHeading;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let query = use_query_map();
    let heading = Memo::new(move |_| {
        let requested = query.with(|params| params.get("category"));
        ListingHeading::resolve(&catalog, requested.as_deref())
    });

    view! {
        <div class="products-page">
            <header class="products-page__header">
                <a class="products-page__back" href=routes::HOME>"← All categories"</a>
                <h1 class="products-page__title">{move || heading.with(|h| h.title.clone())}</h1>
            </header>
            <Show when=move || heading.with(|h| h.notice.is_some())>
                <p class="products-page__notice">{move || heading.with(|h| h.notice.clone().unwrap_or_default())}</p>
            </Show>
            <p class="products-page__empty">"Products will appear here."</p>
        </div>
    }
}
