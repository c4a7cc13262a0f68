//! Icon token to glyph mapping.
//!
//! Missing or unknown tokens map to [`PLACEHOLDER_GLYPH`] so bad catalog data
//! degrades to a neutral mark instead of failing the render.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

pub const PLACEHOLDER_GLYPH: &str = "◆";

pub fn glyph(token: Option<&str>) -> &'static str {
    match token.map(str::trim) {
        Some("laptop") => "💻",
        Some("shirt") => "👕",
        Some("home") => "🏠",
        Some("dumbbell") => "🏋",
        Some("sparkles") => "✨",
        Some("book") => "📚",
        Some("package") => "📦",
        Some("shield") => "🛡",
        Some("truck") => "🚚",
        Some("check") => "✓",
        Some("mail") => "✉",
        Some("phone") => "☎",
        Some("help") => "?",
        _ => PLACEHOLDER_GLYPH,
    }
}
