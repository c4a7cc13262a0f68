//! Client-side state and view models.
//!
//! DESIGN
//! ======
//! Everything here is plain data with pure transitions so it can be unit
//! tested without a reactive runtime or browser.

pub mod confirmation;
pub mod presentation;
pub mod showcase;
