//! Goroutine dump parser.
//!
//! Walks the dump once, classifying every line with the ordered rules in
//! `rules`, and builds one `Trace` per goroutine header. A "created by"
//! trailer pulls in its location line through the cursor's lookahead.
//!
//! Parsing never fails: lines that fit no grammar, and frames that appear
//! before any header, are dropped.

use super::cursor::LineCursor;
use super::rules::{classify, match_location, LineKind};
use super::schema::{Entry, Trace};
use crate::utils::config::{Config, ELLIPSIS, KEPT_SEGMENTS};
use log::{debug, trace, warn};

/// Where the parser is in the dump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// No header seen yet; only a header line is accepted.
    AwaitingHeader,
    /// Inside a goroutine's stack; every rule applies.
    InTrace,
}

/// Parses goroutine dumps into `Trace` records
#[derive(Debug, Clone)]
pub struct Parser {
    simplify: bool,
    truncation_threshold: usize,
}

impl Parser {
    /// Create a parser. The display width is resolved once here.
    pub fn new(config: &Config) -> Self {
        Self {
            simplify: config.simplify,
            truncation_threshold: config.truncation_threshold(),
        }
    }

    pub fn truncation_threshold(&self) -> usize {
        self.truncation_threshold
    }

    /// Parse a raw dump. Invalid UTF-8 is replaced, not rejected.
    pub fn parse(&self, raw: &[u8]) -> Vec<Trace> {
        self.parse_str(&String::from_utf8_lossy(raw))
    }

    pub fn parse_str(&self, text: &str) -> Vec<Trace> {
        let mut run = ParseRun::default();
        let mut cursor = LineCursor::new(text);

        while let Some(raw_line) = cursor.advance() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            let Some((rule, kind)) = classify(line) else {
                trace!("Dropping unrecognized line: {}", line);
                continue;
            };

            if run.state == ParserState::AwaitingHeader && !matches!(kind, LineKind::Header { .. }) {
                debug!("Dropping {} line before any goroutine header: {}", rule, line);
                continue;
            }

            match kind {
                LineKind::Header { id, state } => {
                    run.flush();
                    run.traces.push(Trace::new(id, state));
                    run.state = ParserState::InTrace;
                }

                LineKind::SpawnTrailer { function, unit_id } => {
                    run.flush();
                    let mut entry = Entry::spawn_trailer(function, unit_id);

                    if let Some(LineKind::Location { file, line, offset }) =
                        cursor.peek().and_then(|next| match_location(next.trim()))
                    {
                        cursor.advance();
                        entry.set_location(self.display_path(file), line, offset);
                    }

                    run.pending = Some(entry);
                }

                LineKind::CallFrame { function, args } => {
                    run.flush();
                    run.pending = Some(self.call_entry(function, args));
                }

                LineKind::Location { file, line: line_no, offset } => match run.pending.as_mut() {
                    Some(entry) => entry.set_location(self.display_path(file), line_no, offset),
                    None => warn!("Dropping location line with no frame: {}", line),
                },
            }
        }

        run.flush();

        debug!(
            "Parsed {} goroutines, {} entries",
            run.traces.len(),
            run.traces.iter().map(|t| t.entries.len()).sum::<usize>()
        );

        run.traces
    }

    fn call_entry(&self, function: &str, args: &str) -> Entry {
        let mut entry = Entry::call(function, args);

        if let Some(short) = self.shorten_identifier(function) {
            entry.function_name = short;
            entry.full_name = function.to_string();
        }

        entry
    }

    /// Shortened display form of an over-long identifier, if it needs one
    pub fn shorten_identifier(&self, function: &str) -> Option<String> {
        if !self.simplify || function.chars().count() <= self.truncation_threshold {
            return None;
        }

        let segments: Vec<&str> = function.split('/').collect();
        if segments.len() <= KEPT_SEGMENTS {
            return None;
        }

        let kept = segments[segments.len() - KEPT_SEGMENTS..].join("/");
        Some(format!("{}/{}", ELLIPSIS, kept))
    }

    fn display_path(&self, path: &str) -> String {
        if self.simplify {
            base_name(path).to_string()
        } else {
            path.to_string()
        }
    }
}

/// Last component of a `/` or `\` separated path
pub fn base_name(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(path)
}

/// Mutable state of a single `parse` call
#[derive(Debug)]
struct ParseRun {
    state: ParserState,
    traces: Vec<Trace>,
    pending: Option<Entry>,
}

impl Default for ParseRun {
    fn default() -> Self {
        Self {
            state: ParserState::AwaitingHeader,
            traces: Vec::new(),
            pending: None,
        }
    }
}

impl ParseRun {
    /// Move the in-progress entry into the current trace
    fn flush(&mut self) {
        if let Some(entry) = self.pending.take() {
            if let Some(current) = self.traces.last_mut() {
                current.entries.push(entry);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parser(simplify: bool) -> Parser {
        Parser::new(&Config::new().with_simplify(simplify).with_display_width(480))
    }

    #[test]
    fn test_single_frame() {
        let traces = parser(true).parse(b"goroutine 1 [running]:\nmain.foo(0x1)\n\t/a/b/main.go:10 +0x5\n");

        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0].unit_id, "1");
        assert_eq!(traces[0].unit_state, "running");

        let mut expected = Entry::call("main.foo", "0x1");
        expected.set_location("main.go", "10", "0x5");
        assert_eq!(traces[0].entries, vec![expected]);
    }

    #[test]
    fn test_full_paths_without_simplify() {
        let traces = parser(false).parse(b"goroutine 1 [running]:\nmain.foo(0x1)\n\t/a/b/main.go:10 +0x5\n");
        assert_eq!(traces[0].entries[0].file, "/a/b/main.go");
    }

    #[test]
    fn test_spawn_trailer_consumes_location() {
        let dump = "goroutine 6 [chan receive]:\n\
                    main.worker.func1()\n\
                    \t/src/app/main.go:21 +0x2c\n\
                    created by main.worker in goroutine 5\n\
                    \t/src/app/main.go:19 +0x7e\n";
        let traces = parser(true).parse_str(dump);

        assert_eq!(traces[0].entries.len(), 2);
        let trailer = &traces[0].entries[1];
        assert!(trailer.is_spawn_trailer);
        assert_eq!(trailer.function_name, "main.worker");
        assert_eq!(trailer.spawning_unit_id, "5");
        assert_eq!(trailer.file, "main.go");
        assert_eq!(trailer.line, "19");
        assert_eq!(trailer.offset, "0x7e");
        assert!(trailer.args.is_empty());
    }

    #[test]
    fn test_frames_before_header_dropped() {
        let traces = parser(true).parse_str("main.orphan()\n\t/a/main.go:1\ngoroutine 1 [running]:\nmain.main()\n");
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0].entries.len(), 1);
        assert_eq!(traces[0].entries[0].function_name, "main.main");
    }

    #[test]
    fn test_location_without_frame_dropped() {
        let traces = parser(true).parse_str("goroutine 1 [running]:\n\t/a/main.go:3\nmain.main()\n");

        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0].entries.len(), 1);
        assert_eq!(traces[0].entries[0].function_name, "main.main");
        assert!(traces[0].entries[0].file.is_empty());
        assert!(!traces[0].entries[0].has_location());
    }

    #[test]
    fn test_back_to_back_headers_keep_empty_trace() {
        let traces = parser(true).parse_str("goroutine 1 [running]:\ngoroutine 2 [sleep]:\ntime.Sleep(0x3b9aca00)\n");
        assert_eq!(traces.len(), 2);
        assert!(traces[0].entries.is_empty());
        assert_eq!(traces[1].entries.len(), 1);
    }

    #[test]
    fn test_truncation_over_threshold() {
        let long = "github.com/example/project/internal/pkg/service.(*Handler).ServeRequest";
        let traces = parser(true).parse_str(&format!("goroutine 1 [running]:\n{}(0x1)\n", long));
        let entry = &traces[0].entries[0];

        assert_eq!(entry.function_name, ".../internal/pkg/service.(*Handler).ServeRequest");
        assert_eq!(entry.full_name, long);
        assert_eq!(entry.original_name(), long);
    }

    #[test]
    fn test_no_truncation_under_threshold_or_without_simplify() {
        let name = "github.com/example/project/internal/pkg/service.(*Handler).ServeRequest";
        let narrow = Parser::new(&Config::new().with_display_width(8 * 200));
        assert_eq!(narrow.shorten_identifier(name), None);

        assert_eq!(parser(false).shorten_identifier(name), None);
        assert_eq!(parser(true).shorten_identifier("main.main"), None);

        let boundary = Parser::new(&Config::new().with_display_width(80));
        assert_eq!(boundary.truncation_threshold(), 10);
        assert_eq!(boundary.shorten_identifier("a/b/c/d/ef"), None);
        assert_eq!(
            boundary.shorten_identifier("a/b/c/d/efg"),
            Some(".../c/d/efg".to_string())
        );
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("/a/b/main.go"), "main.go");
        assert_eq!(base_name("C:\\go\\src\\main.go"), "main.go");
        assert_eq!(base_name("main.go"), "main.go");
    }
}
