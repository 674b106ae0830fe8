//! Configuration module for the burger builder.

mod debug; // Private: use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod pricing;

// Re-export commonly used items
pub use pricing::PRICING;
