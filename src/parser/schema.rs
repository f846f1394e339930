//! Structured records produced by the parser.
//!
//! These are also the JSON shapes written by the `inspect` command.
//! The report is versioned to allow future evolution.

use crate::utils::config::{SCHEMA_VERSION, TRUNCATION_MARKER};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One call frame or one "created by" trailer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Display identifier, possibly shortened
    pub function_name: String,

    /// Original identifier when `function_name` was shortened, empty otherwise
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub full_name: String,

    /// Raw argument text between the call parentheses
    #[serde(default)]
    pub args: String,

    #[serde(default)]
    pub file: String,

    #[serde(default)]
    pub line: String,

    /// Hexadecimal instruction offset, empty when absent
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub offset: String,

    /// True when this entry is a "created by" trailer rather than a frame
    #[serde(default)]
    pub is_spawn_trailer: bool,

    /// Goroutine that spawned this one (trailers only)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub spawning_unit_id: String,
}

impl Entry {
    /// Create a call-frame entry
    pub fn call(function_name: impl Into<String>, args: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            args: args.into(),
            ..Self::default()
        }
    }

    /// Create a "created by" trailer entry
    pub fn spawn_trailer(function_name: impl Into<String>, spawning_unit_id: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            is_spawn_trailer: true,
            spawning_unit_id: spawning_unit_id.into(),
            ..Self::default()
        }
    }

    /// Attach a source location
    pub fn set_location(&mut self, file: impl Into<String>, line: impl Into<String>, offset: impl Into<String>) {
        self.file = file.into();
        self.line = line.into();
        self.offset = offset.into();
    }

    pub fn has_location(&self) -> bool {
        !self.file.is_empty()
    }

    pub fn was_truncated(&self) -> bool {
        !self.full_name.is_empty()
    }

    /// Name as rendered; shortened names carry a trailing marker
    pub fn display_name(&self) -> Cow<'_, str> {
        if self.was_truncated() {
            Cow::Owned(format!("{}{}", self.function_name, TRUNCATION_MARKER))
        } else {
            Cow::Borrowed(&self.function_name)
        }
    }

    /// The untruncated identifier
    pub fn original_name(&self) -> &str {
        if self.was_truncated() {
            &self.full_name
        } else {
            &self.function_name
        }
    }
}

/// One goroutine's full captured stack
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub unit_id: String,

    /// Free-text state label, e.g. "running" or "chan receive"
    pub unit_state: String,

    /// Entries in source order
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Trace {
    pub fn new(unit_id: impl Into<String>, unit_state: impl Into<String>) -> Self {
        Self {
            unit_id: unit_id.into(),
            unit_state: unit_state.into(),
            entries: Vec::new(),
        }
    }

    /// The "created by" trailer, if the dump recorded one
    pub fn spawn_trailer(&self) -> Option<&Entry> {
        self.entries.iter().find(|e| e.is_spawn_trailer)
    }

    /// Number of call frames, excluding the trailer
    pub fn frame_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_spawn_trailer).count()
    }
}

/// Top-level JSON document written by the `inspect` command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    pub trace_count: usize,

    pub traces: Vec<Trace>,
}

impl TraceReport {
    pub fn new(traces: Vec<Trace>) -> Self {
        use chrono::Utc;

        Self {
            version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            trace_count: traces.len(),
            traces,
        }
    }

    /// Total entries across all traces
    pub fn entry_count(&self) -> usize {
        self.traces.iter().map(|t| t.entries.len()).sum()
    }
}
