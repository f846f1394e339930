//! Text rendering of parsed traces.
//!
//! Converts `Trace` records into an indented tree, one per goroutine,
//! styled with a `Theme`.

pub mod render;
pub mod tree;

// Re-export main types
pub use render::Formatter;
pub use tree::Tree;
