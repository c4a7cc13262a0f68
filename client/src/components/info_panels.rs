//! Email, shipping, and protection cards under the order summary.

use leptos::prelude::*;
use storefront::content::INFO_PANELS;

use crate::state::presentation::{MotionHints, class_list};
use crate::util::icons;

#[component]
pub fn InfoPanels() -> impl IntoView {
    let motion = use_context::<MotionHints>().unwrap_or_default();
    let card_class = class_list(&["info-card", motion.entrance_class()]);

    view! {
        <div class="info-panels">
            {INFO_PANELS
                .iter()
                .enumerate()
                .map(|(index, panel)| {
                    view! {
                        <article class=card_class.clone() style=motion.entrance_delay(index)>
                            <span class="info-card__icon" aria-hidden="true">{icons::glyph(Some(panel.icon))}</span>
                            <h3 class="info-card__title">{panel.title}</h3>
                            <p class="info-card__body">{panel.body}</p>
                        </article>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
