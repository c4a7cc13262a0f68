//! Single category tile in the showcase grid.

use leptos::prelude::*;

use crate::state::presentation::MotionHints;
use crate::state::showcase::CategoryCardModel;

/// A clickable card linking to the category-scoped product listing.
///
/// Featured cards span two grid cells and use larger type; the choice comes
/// from `card.size` so the flag and the rendered variant cannot drift.
#[component]
pub fn CategoryCard(card: CategoryCardModel, index: usize) -> impl IntoView {
    let motion = use_context::<MotionHints>().unwrap_or_default();
    let class = card.card_class(motion);
    let overlay_class = card.overlay_class();
    let name_class = card.name_class();
    let alt = card.name.clone();

    view! {
        <a class=class href=card.href style=motion.entrance_delay(index) data-category=card.id>
            {card.image.map(|src| view! { <img class="category-card__image" src=src alt=alt loading="lazy"/> })}
            <span class=overlay_class aria-hidden="true"></span>
            <span class="category-card__icon" aria-hidden="true">{card.icon}</span>
            <span class="category-card__body">
                <span class=name_class>{card.name}</span>
                <span class="category-card__description">{card.description}</span>
                <span class="category-card__count">{card.product_count}</span>
            </span>
            <span class="category-card__arrow" aria-hidden="true">"→"</span>
        </a>
    }
}
