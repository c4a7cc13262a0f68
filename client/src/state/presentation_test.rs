use super::*;

// =============================================================
// MotionHints
// =============================================================

#[test]
fn default_is_animated_with_stagger() {
    assert_eq!(MotionHints::default(), MotionHints::Animated { stagger_ms: DEFAULT_STAGGER_MS });
}

#[test]
fn reduced_motion_selects_static() {
    assert_eq!(MotionHints::from_reduced_motion(true), MotionHints::Static);
    assert_eq!(MotionHints::from_reduced_motion(false), MotionHints::default());
}

#[test]
fn animated_hints_emit_classes_and_delays() {
    let hints = MotionHints::Animated { stagger_ms: 80 };
    assert_eq!(hints.entrance_class(), "motion-enter");
    assert_eq!(hints.hover_class(), "motion-hover");
    assert_eq!(hints.entrance_delay(0).as_deref(), Some("animation-delay: 0ms"));
    assert_eq!(hints.entrance_delay(3).as_deref(), Some("animation-delay: 240ms"));
}

#[test]
fn static_hints_emit_nothing() {
    let hints = MotionHints::Static;
    assert_eq!(hints.entrance_class(), "");
    assert_eq!(hints.hover_class(), "");
    assert_eq!(hints.entrance_delay(5), None);
}

#[test]
fn parse_round_trips_as_str() {
    assert_eq!(MotionHints::parse(MotionHints::Static.as_str()), MotionHints::Static);
    assert_eq!(MotionHints::parse(MotionHints::default().as_str()), MotionHints::default());
    assert_eq!(MotionHints::parse(" STATIC "), MotionHints::Static);
    assert_eq!(MotionHints::parse("bogus"), MotionHints::default());
}

// =============================================================
// class_list
// =============================================================

#[test]
fn class_list_skips_empty_parts() {
    assert_eq!(class_list(&["a", "", "b", ""]), "a b");
    assert_eq!(class_list(&["", ""]), "");
}
