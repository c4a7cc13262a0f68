//! "Need help?" panel with the support contact affordances.

use leptos::prelude::*;
use storefront::content::{CONTACT_CHANNELS, ContactKind};

use crate::util::icons;

fn contact_icon(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Email => icons::glyph(Some("mail")),
        ContactKind::Phone => icons::glyph(Some("phone")),
        ContactKind::HelpCenter => icons::glyph(Some("help")),
    }
}

/// `mailto:`/`tel:` links are left to the host environment; the help-center
/// link is an in-app route.
#[component]
pub fn HelpPanel() -> impl IntoView {
    view! {
        <aside class="help-panel">
            <h2 class="help-panel__title">"Need help?"</h2>
            <p class="help-panel__intro">"Our support team is here for you around the clock."</p>
            <ul class="help-panel__channels">
                {CONTACT_CHANNELS
                    .iter()
                    .map(|channel| {
                        view! {
                            <li class="help-panel__channel">
                                <a class="help-panel__link" href=channel.href>
                                    <span class="help-panel__icon" aria-hidden="true">{contact_icon(channel.kind)}</span>
                                    <span class="help-panel__label">{channel.label}</span>
                                    <span class="help-panel__value">{channel.value}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </aside>
    }
}
