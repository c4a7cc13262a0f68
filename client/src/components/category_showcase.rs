//! "Shop by Category" section: header, card grid, and trailing CTA.
//!
//! DESIGN
//! ======
//! The header and CTA render unconditionally; an empty catalog just leaves
//! the grid empty.

#[cfg(test)]
#[path = "category_showcase_test.rs"]
mod category_showcase_test;

use leptos::prelude::*;
use storefront::{Catalog, routes};

use crate::components::category_card::CategoryCard;
use crate::state::presentation::{MotionHints, class_list};
use crate::state::showcase::showcase_cards;

#[component]
pub fn CategoryShowcase() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let motion = use_context::<MotionHints>().unwrap_or_default();
    let cards = showcase_cards(&catalog);
    let header_class = class_list(&["category-showcase__header", motion.entrance_class()]);

    view! {
        <section class="category-showcase" aria-labelledby="category-showcase-title">
            <header class=header_class>
                <h2 id="category-showcase-title" class="category-showcase__title">"Shop by Category"</h2>
                <p class="category-showcase__subtitle">
                    "Explore our wide range of products across popular categories"
                </p>
            </header>

            <div class="category-showcase__grid">
                {cards
                    .into_iter()
                    .enumerate()
                    .map(|(index, card)| view! { <CategoryCard card=card index=index/> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="category-showcase__cta">
                <a class="btn btn--primary btn--lg" href=routes::PRODUCTS>
                    "View All Categories"
                </a>
            </div>
        </section>
    }
}
