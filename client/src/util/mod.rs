//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, DOM handoff,
//! downloads) from page and component logic to improve reuse and testability.

pub mod bootstrap;
pub mod clock;
pub mod icons;
pub mod receipt;
