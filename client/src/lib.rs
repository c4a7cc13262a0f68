//! # client
//!
//! Leptos + WASM frontend for the storefront: the category showcase on the
//! home route and the checkout success screen, plus the small product
//! listing and help routes they link to.
//!
//! The server renders these views with the `ssr` feature; the browser
//! bundle is built with `hydrate` and enters through [`hydrate`].

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point. Reads the startup data the server embedded in the
/// shell and hydrates the body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let catalog = util::bootstrap::read_catalog();
    let motion = util::bootstrap::read_motion();
    log::info!("hydrating storefront with {} categories ({})", catalog.len(), motion.as_str());

    leptos::mount::hydrate_body(move || {
        provide_context(catalog);
        provide_context(motion);
        view! { <App/> }
    });
}
