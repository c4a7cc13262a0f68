//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and delegates rendering details to
//! `components`.

pub mod checkout_success;
pub mod help;
pub mod home;
pub mod products;
