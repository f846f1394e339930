//! Line grammars and their precedence.
//!
//! A dump line is classified by trying `RULES` in order; the first rule
//! that matches decides the line's kind.

use crate::utils::config::SOURCE_SUFFIX;
use regex::Regex;
use std::sync::LazyLock;

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"goroutine (\d+) \[(.*?)\]:").expect("valid header regex"));

static SPAWN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"created by (.+) in goroutine (\d+)").expect("valid spawn regex"));

// Go releases before 1.21 omit the spawning goroutine.
static LEGACY_SPAWN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^created by (\S+)$").expect("valid legacy spawn regex"));

static SHORT_CALL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^\s/]+)\((.*)\)$").expect("valid call regex"));

static LONG_CALL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S*/\S+)\((.*)\)$").expect("valid path-qualified call regex"));

static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(.+{}):(\d+)(?:\s+\+([0-9a-fA-Fx]+))?$",
        regex::escape(SOURCE_SUFFIX)
    ))
    .expect("valid location regex")
});

/// What a single dump line turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `goroutine <id> [<state>]:`
    Header { id: &'a str, state: &'a str },

    /// `created by <function> in goroutine <id>`
    SpawnTrailer { function: &'a str, unit_id: &'a str },

    /// `<function>(<args>)`
    CallFrame { function: &'a str, args: &'a str },

    /// `<path>.go:<line> +<offset>`
    Location { file: &'a str, line: &'a str, offset: &'a str },
}

/// A named line grammar
pub struct LineRule {
    pub name: &'static str,
    pub matcher: fn(&str) -> Option<LineKind<'_>>,
}

/// Line grammars in precedence order
pub static RULES: &[LineRule] = &[
    LineRule { name: "header", matcher: match_header },
    LineRule { name: "spawn-trailer", matcher: match_spawn_trailer },
    LineRule { name: "call-frame", matcher: match_call_frame },
    LineRule { name: "location", matcher: match_location },
];

/// Classify a trimmed line, returning the matching rule name and the line kind
pub fn classify(line: &str) -> Option<(&'static str, LineKind<'_>)> {
    RULES
        .iter()
        .find_map(|rule| (rule.matcher)(line).map(|kind| (rule.name, kind)))
}

pub fn match_header(line: &str) -> Option<LineKind<'_>> {
    let caps = HEADER_RE.captures(line)?;
    Some(LineKind::Header {
        id: caps.get(1)?.as_str(),
        state: caps.get(2)?.as_str(),
    })
}

pub fn match_spawn_trailer(line: &str) -> Option<LineKind<'_>> {
    if let Some(caps) = SPAWN_RE.captures(line) {
        return Some(LineKind::SpawnTrailer {
            function: caps.get(1)?.as_str(),
            unit_id: caps.get(2)?.as_str(),
        });
    }

    let caps = LEGACY_SPAWN_RE.captures(line)?;
    Some(LineKind::SpawnTrailer {
        function: caps.get(1)?.as_str(),
        unit_id: "",
    })
}

/// Short grammar first (no `/` before the parenthesis), then the
/// path-qualified grammar.
pub fn match_call_frame(line: &str) -> Option<LineKind<'_>> {
    let caps = SHORT_CALL_RE
        .captures(line)
        .or_else(|| LONG_CALL_RE.captures(line))?;

    Some(LineKind::CallFrame {
        function: caps.get(1)?.as_str(),
        args: caps.get(2)?.as_str(),
    })
}

pub fn match_location(line: &str) -> Option<LineKind<'_>> {
    let caps = LOCATION_RE.captures(line)?;
    Some(LineKind::Location {
        file: caps.get(1)?.as_str(),
        line: caps.get(2)?.as_str(),
        offset: caps.get(3).map_or("", |m| m.as_str()),
    })
}
