//! Trait definitions
//!
//! Abstracts the external lookup service so front ends and tests can supply
//! their own implementation.

mod handle_lookup;

pub use handle_lookup::HandleLookup;
