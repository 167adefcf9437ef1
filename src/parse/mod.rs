//! Parsing module for the pitch circle
//!
//! Turns the free-text period and interval fields into cents values.

pub mod interval;

// Re-export commonly used types
pub use interval::*;
