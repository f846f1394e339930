//! Tree rendering of parsed traces.
//!
//! Each trace becomes a tree rooted at its goroutine header. Entries whose
//! function name is unique get a location child; names that repeat collapse
//! into one compact node with a "(repeated N times)" suffix.

use super::tree::Tree;
use crate::aggregator::{collapse_repeated, pad_to, CollapsedEntry, ColumnWidths};
use crate::parser::{Entry, Trace};
use crate::theme::Theme;
use crate::utils::config::Config;
use log::debug;

/// Renders traces with a theme
#[derive(Debug, Clone)]
pub struct Formatter {
    theme: Theme,
    align_columns: bool,
}

impl Formatter {
    /// Create a formatter from a config.
    ///
    /// With `colorize` off the config's theme is copied without colors;
    /// the config itself is left untouched.
    pub fn new(config: &Config) -> Self {
        let theme = if config.colorize {
            config.theme.clone()
        } else {
            config.theme.without_colors()
        };

        Self {
            theme,
            align_columns: config.align_columns,
        }
    }

    /// Create a formatter that renders with `theme` as given
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            align_columns: false,
        }
    }

    pub fn with_align_columns(mut self, align: bool) -> Self {
        self.align_columns = align;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Render all traces, separated by a blank line
    pub fn format(&self, traces: &[Trace]) -> String {
        traces
            .iter()
            .map(|trace| self.format_trace(trace))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Render one trace as a tree
    pub fn format_trace(&self, trace: &Trace) -> String {
        let header = format!("Goroutine {}: {}", trace.unit_id, trace.unit_state);
        let mut tree = Tree::new(self.theme.unit.render(&header));

        let nodes = collapse_repeated(&trace.entries);
        let widths = if self.align_columns {
            ColumnWidths::measure(&nodes)
        } else {
            ColumnWidths::default()
        };

        for node in &nodes {
            tree.push(self.format_node(node, &widths));
        }

        debug!(
            "Rendered goroutine {} ({} entries, {} nodes)",
            trace.unit_id,
            trace.entries.len(),
            nodes.len()
        );

        tree.render()
    }

    fn format_node(&self, node: &CollapsedEntry<'_>, widths: &ColumnWidths) -> Tree {
        let entry = node.entry;
        let mut label = if entry.is_spawn_trailer {
            self.spawn_label(entry)
        } else {
            self.call_label(entry, widths.function)
        };

        if node.is_repeated() {
            label.push_str(
                &self
                    .theme
                    .repeat
                    .render(&format!(" (repeated {} times)", node.occurrences)),
            );
            return Tree::new(label);
        }

        let tree = Tree::new(label);
        if entry.has_location() {
            tree.child(Tree::new(self.location_label(entry, widths)))
        } else {
            tree
        }
    }

    fn call_label(&self, entry: &Entry, function_width: usize) -> String {
        let name = pad_to(&entry.display_name(), function_width);
        format!(
            "{}{}",
            self.theme.function.render(&name),
            self.theme.args.render(&format!("({})", entry.args))
        )
    }

    fn spawn_label(&self, entry: &Entry) -> String {
        let text = if entry.spawning_unit_id.is_empty() {
            format!("Created by: {}", entry.display_name())
        } else {
            format!(
                "Created by: {} (goroutine {})",
                entry.display_name(),
                entry.spawning_unit_id
            )
        };
        self.theme.spawn.render(&text)
    }

    fn location_label(&self, entry: &Entry, widths: &ColumnWidths) -> String {
        let mut label = self.theme.file.render(&pad_to(&entry.file, widths.file));

        if entry.offset.is_empty() {
            label.push_str(&self.theme.line.render(&format!(":{}", entry.line)));
        } else {
            let line = pad_to(&entry.line, widths.line);
            label.push_str(&self.theme.line.render(&format!(":{}", line)));
            label.push_str(&self.theme.line.render(&format!(" +{}", entry.offset)));
        }

        label
    }
}
