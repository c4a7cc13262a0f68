//! Server-to-browser handoff of startup data.
//!
//! The server embeds the catalog and the motion preference in `<head>` when
//! it renders the shell. Hydration reads them back so both sides render the
//! same cards. Anything missing or malformed falls back to built-in defaults.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use storefront::Catalog;

use crate::state::presentation::MotionHints;

pub const CATALOG_ELEMENT_ID: &str = "storefront-catalog";
pub const MOTION_META_NAME: &str = "storefront-motion";

pub fn parse_catalog(raw: Option<&str>) -> Catalog {
    let Some(raw) = raw else {
        return Catalog::builtin();
    };
    match Catalog::from_json_str(raw) {
        Ok(catalog) => catalog,
        Err(_err) => {
            #[cfg(feature = "hydrate")]
            log::warn!("embedded catalog rejected, using built-in categories: {_err}");
            Catalog::builtin()
        }
    }
}

pub fn parse_motion(raw: Option<&str>) -> MotionHints {
    raw.map_or_else(MotionHints::default, MotionHints::parse)
}

#[cfg(feature = "hydrate")]
pub fn read_catalog() -> Catalog {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CATALOG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    parse_catalog(text.as_deref())
}

#[cfg(feature = "hydrate")]
pub fn read_motion() -> MotionHints {
    let content = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.query_selector(&format!("meta[name=\"{MOTION_META_NAME}\"]")).ok().flatten())
        .and_then(|el| el.get_attribute("content"));
    parse_motion(content.as_deref())
}
