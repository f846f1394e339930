//! Goroutine Trace
//!
//! Parses Go goroutine dumps (as printed by a panic, `SIGQUIT` or
//! `runtime.Stack`) and renders them as readable, de-duplicated trees.
//!
//! ## Getting Started
//!
//! ```no_run
//! use goroutine_trace::{parse, Config};
//!
//! let dump = std::fs::read("dump.txt").unwrap();
//! let rendered = parse(&dump, &Config::default().with_color(false));
//! println!("{}", String::from_utf8_lossy(&rendered));
//! ```
//!
//! To render the same dump several ways, parse once with `Parser` and
//! hand the traces to as many `Formatter`s as needed.

pub mod aggregator;
pub mod commands;
pub mod formatter;
pub mod output;
pub mod parser;
pub mod theme;
pub mod utils;

pub use formatter::Formatter;
pub use parser::{Entry, Parser, Trace};
pub use theme::{Style, Theme};
pub use utils::config::Config;

/// Parse a dump and render it in one step
pub fn parse(raw: &[u8], config: &Config) -> Vec<u8> {
    let traces = Parser::new(config).parse(raw);
    Formatter::new(config).format(&traces).into_bytes()
}

/// Replace the contents of `raw` with its rendering
pub fn parse_in_place(raw: &mut Vec<u8>, config: &Config) {
    *raw = parse(raw, config);
}
