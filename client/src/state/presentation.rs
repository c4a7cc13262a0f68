//! Optional animation hints for entrance and hover effects.
//!
//! Views ask the hints for class names and inline delays instead of
//! hardcoding them, so `MotionHints::Static` renders the same document with
//! no animation at all.

#[cfg(test)]
#[path = "presentation_test.rs"]
mod presentation_test;

pub const DEFAULT_STAGGER_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionHints {
    /// Staggered fade-in on mount plus hover lift.
    Animated { stagger_ms: u32 },
    /// No animation classes or delays.
    Static,
}

impl Default for MotionHints {
    fn default() -> Self {
        Self::Animated { stagger_ms: DEFAULT_STAGGER_MS }
    }
}

impl MotionHints {
    #[must_use]
    pub fn from_reduced_motion(reduced: bool) -> Self {
        if reduced { Self::Static } else { Self::default() }
    }

    /// Parse the value written by [`MotionHints::as_str`]. Unknown values animate.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::from_reduced_motion(raw.trim().eq_ignore_ascii_case("static"))
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Animated { .. } => "animated",
            Self::Static => "static",
        }
    }

    #[must_use]
    pub fn entrance_class(self) -> &'static str {
        match self {
            Self::Animated { .. } => "motion-enter",
            Self::Static => "",
        }
    }

    #[must_use]
    pub fn hover_class(self) -> &'static str {
        match self {
            Self::Animated { .. } => "motion-hover",
            Self::Static => "",
        }
    }

    /// Inline `animation-delay` for the `index`-th item of a staggered list.
    #[must_use]
    pub fn entrance_delay(self, index: usize) -> Option<String> {
        match self {
            Self::Animated { stagger_ms } => {
                let delay = u64::from(stagger_ms).saturating_mul(u64::try_from(index).unwrap_or(u64::MAX));
                Some(format!("animation-delay: {delay}ms"))
            }
            Self::Static => None,
        }
    }
}

/// Join non-empty class names with single spaces.
#[must_use]
pub fn class_list(parts: &[&str]) -> String {
    parts.iter().filter(|part| !part.is_empty()).copied().collect::<Vec<_>>().join(" ")
}
