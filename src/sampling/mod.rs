//! Sampling functions

mod rejection;

// Re-export.
pub use rejection::*;
