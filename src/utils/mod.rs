//! Utility modules for the pitch circle
//!
//! Small formatting helpers used by the SVG serializer and the export API.

pub mod filename;
pub mod format;

// Re-export commonly used types
pub use filename::*;
pub use format::*;
