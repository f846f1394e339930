//! Repeated-frame detection.
//!
//! Counts how often each function name occurs within one trace and
//! collapses repeated names into a single node.
//!
//! Example: a trace with frames `a, b, a, c` yields nodes
//! `a (x2), b, c`. A repeated name keeps the position of its first
//! occurrence.

use crate::parser::Entry;
use log::debug;
use std::collections::{HashMap, HashSet};

/// Occurrence count of each function name within one trace
///
/// **Public** - used by the formatter and the inspect command
#[derive(Debug, Clone, Default)]
pub struct FrameCounts {
    counts: HashMap<String, usize>,
}

impl FrameCounts {
    /// Count function names, trailers included
    pub fn from_entries(entries: &[Entry]) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for entry in entries {
            *counts.entry(entry.function_name.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn count(&self, function_name: &str) -> usize {
        self.counts.get(function_name).copied().unwrap_or(0)
    }

    /// Number of distinct function names
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Number of names that occur more than once
    pub fn repeated(&self) -> usize {
        self.counts.values().filter(|&&n| n > 1).count()
    }
}

/// One node to render: an entry and how often its name occurs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapsedEntry<'a> {
    pub entry: &'a Entry,
    pub occurrences: usize,
}

impl CollapsedEntry<'_> {
    pub fn is_repeated(&self) -> bool {
        self.occurrences > 1
    }
}

/// Collapse repeated function names into one node each
///
/// **Public** - main entry point for de-duplication
///
/// # Returns
/// Nodes in source order; a repeated name appears once, at its first position
pub fn collapse_repeated(entries: &[Entry]) -> Vec<CollapsedEntry<'_>> {
    let counts = FrameCounts::from_entries(entries);
    let mut seen: HashSet<&str> = HashSet::with_capacity(counts.distinct());

    let nodes: Vec<CollapsedEntry<'_>> = entries
        .iter()
        .filter(|entry| seen.insert(entry.function_name.as_str()))
        .map(|entry| CollapsedEntry {
            entry,
            occurrences: counts.count(&entry.function_name),
        })
        .collect();

    debug!(
        "Collapsed {} entries into {} nodes ({} repeated names)",
        entries.len(),
        nodes.len(),
        counts.repeated()
    );

    nodes
}
