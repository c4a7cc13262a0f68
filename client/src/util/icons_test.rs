use super::*;

#[test]
fn known_tokens_have_glyphs() {
    for token in ["laptop", "shirt", "home", "dumbbell", "sparkles", "book", "package", "shield", "truck", "check"] {
        assert_ne!(glyph(Some(token)), PLACEHOLDER_GLYPH, "token {token}");
    }
}

#[test]
fn missing_or_unknown_tokens_use_placeholder() {
    assert_eq!(glyph(None), PLACEHOLDER_GLYPH);
    assert_eq!(glyph(Some("")), PLACEHOLDER_GLYPH);
    assert_eq!(glyph(Some("unicorn")), PLACEHOLDER_GLYPH);
}

#[test]
fn tokens_are_trimmed() {
    assert_eq!(glyph(Some(" laptop ")), glyph(Some("laptop")));
}
