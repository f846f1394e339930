//! Column widths for aligned rendering.

use super::frequency::CollapsedEntry;
use unicode_width::UnicodeWidthStr;

/// Widest function name, file and line number among a trace's nodes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    pub function: usize,
    pub file: usize,
    pub line: usize,
}

impl ColumnWidths {
    /// Measure the nodes that will actually be rendered.
    ///
    /// Trailers do not share the function column, and repeated nodes have
    /// no location line, so neither contributes to those columns.
    pub fn measure(nodes: &[CollapsedEntry<'_>]) -> Self {
        let mut widths = Self::default();

        for node in nodes {
            let entry = node.entry;
            if !entry.is_spawn_trailer {
                widths.function = widths.function.max(entry.display_name().width());
            }
            if !node.is_repeated() && entry.has_location() {
                widths.file = widths.file.max(entry.file.width());
                widths.line = widths.line.max(entry.line.width());
            }
        }

        widths
    }
}

/// Pad `text` with trailing spaces to `width` display columns
pub fn pad_to(text: &str, width: usize) -> String {
    let current = text.width();
    if current >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - current))
}
