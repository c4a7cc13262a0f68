//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront sections and read shared startup data
//! (catalog, motion hints) from Leptos context providers.

pub mod category_card;
pub mod category_showcase;
pub mod help_panel;
pub mod info_panels;
pub mod progress_steps;
