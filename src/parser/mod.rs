//! Goroutine dump parsing and record definitions.
//!
//! This module handles:
//! - Classifying dump lines (headers, frames, locations, trailers)
//! - Segmenting a dump into per-goroutine traces
//! - Defining the structured records

pub mod cursor;
pub mod goroutine;
pub mod rules;
pub mod schema;

// Re-export main types
pub use cursor::LineCursor;
pub use goroutine::{base_name, Parser, ParserState};
pub use rules::{classify, LineKind};
pub use schema::{Entry, Trace, TraceReport};
