//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use storefront::Catalog;

use crate::pages::{
    checkout_success::CheckoutSuccessPage, help::HelpPage, home::HomePage, products::ProductsPage,
};
use crate::state::presentation::MotionHints;
use crate::util::bootstrap::{CATALOG_ELEMENT_ID, MOTION_META_NAME};
use crate::util::receipt::ReceiptExport;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Embeds the catalog and motion preference from context so hydration
/// renders the same data the server did.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let catalog = use_context::<Catalog>().unwrap_or_else(Catalog::builtin);
    let motion = use_context::<MotionHints>().unwrap_or_default();
    let catalog_json = catalog.to_script_json().unwrap_or_else(|_| "[]".to_owned());

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=MOTION_META_NAME content=motion.as_str()/>
                <script type="application/json" id=CATALOG_ELEMENT_ID inner_html=catalog_json></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Fills in any startup context the host did not provide, then sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    if use_context::<Catalog>().is_none() {
        provide_context(Catalog::builtin());
    }
    if use_context::<MotionHints>().is_none() {
        provide_context(MotionHints::default());
    }
    if use_context::<ReceiptExport>().is_none() {
        provide_context(ReceiptExport::browser_download());
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <Router>
            <main class="storefront">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("products") view=ProductsPage/>
                    <Route path=StaticSegment("help") view=HelpPage/>
                    <Route path=(StaticSegment("checkout"), StaticSegment("success")) view=CheckoutSuccessPage/>
                </Routes>
            </main>
        </Router>
    }
}
