//! Per-trace aggregation for rendering.
//!
//! This module provides:
//! - Frequency counts and collapsing of repeated frames
//! - Column widths for aligned output

pub mod columns;
pub mod frequency;

// Re-export main types
pub use columns::{pad_to, ColumnWidths};
pub use frequency::{collapse_repeated, CollapsedEntry, FrameCounts};
