use goroutine_trace::formatter::Formatter;
use goroutine_trace::parser::Parser;
use goroutine_trace::theme::{Style, Theme};
use goroutine_trace::{parse, parse_in_place, Config};
use pretty_assertions::assert_eq;
use regex::Regex;

const DUMP: &str = "\
goroutine 1 [running]:
main.recurse(0x3)
\t/src/app/main.go:9 +0x1f
main.recurse(0x2)
\t/src/app/main.go:9 +0x1f
main.recurse(0x1)
\t/src/app/main.go:9 +0x1f
main.main()
\t/src/app/main.go:20 +0x25

goroutine 6 [chan receive]:
main.worker(0xc00001e0c0)
\t/src/app/worker.go:11 +0x3a
created by main.main in goroutine 1
\t/src/app/main.go:15 +0x4f
";

fn config() -> Config {
    Config::new().with_display_width(480)
}

fn strip_escapes(text: &str) -> String {
    Regex::new(r"\x1b\[[0-9;]*m").unwrap().replace_all(text, "").into_owned()
}

#[test]
fn test_plain_rendering() {
    let rendered = parse(DUMP.as_bytes(), &config().with_color(false));

    let expected = "\
Goroutine 1: running
├── main.recurse(0x3) (repeated 3 times)
└── main.main()
    └── main.go:20 +0x25

Goroutine 6: chan receive
├── main.worker(0xc00001e0c0)
│   └── worker.go:11 +0x3a
└── Created by: main.main (goroutine 1)
    └── main.go:15 +0x4f";
    assert_eq!(String::from_utf8(rendered).unwrap(), expected);
}

#[test]
fn test_repeated_frames_rendered_once_without_location() {
    let dump = "goroutine 1 [running]:\nmain.foo(...)\n\t/a/main.go:3\nmain.foo(...)\n\t/a/main.go:8\n";
    let rendered = String::from_utf8(parse(dump.as_bytes(), &config().with_color(false))).unwrap();

    assert_eq!(rendered.matches("main.foo(...) (repeated 2 times)").count(), 1);
    assert!(!rendered.contains("main.go"));
}

#[test]
fn test_rendering_is_deterministic() {
    let first = parse(DUMP.as_bytes(), &config().with_color(false));
    let second = parse(DUMP.as_bytes(), &config().with_color(false));
    assert_eq!(first, second);
}

#[test]
fn test_colorize_off_matches_stripped_colored_output() {
    colored::control::set_override(true);

    let colored = String::from_utf8(parse(DUMP.as_bytes(), &config())).unwrap();
    let plain = String::from_utf8(parse(DUMP.as_bytes(), &config().with_color(false))).unwrap();

    assert!(colored.contains('\u{1b}'));
    assert!(!plain.contains('\u{1b}'));
    assert_eq!(strip_escapes(&colored), plain);
}

#[test]
fn test_layout_survives_disabled_colors() {
    let mut theme = Theme::default();
    theme.unit = Style::new().bold(true).margin_top(1);
    theme.args = theme.args.clone().padding_left(2);

    let config = config().with_color(false).with_theme(theme);
    let rendered = String::from_utf8(parse(b"goroutine 1 [running]:\nmain.main()\n", &config)).unwrap();

    assert_eq!(rendered, "\nGoroutine 1: running\n└── main.main  ()");
}

#[test]
fn test_parse_once_format_many() {
    let traces = Parser::new(&config()).parse_str(DUMP);

    let plain = Formatter::with_theme(Theme::plain()).format(&traces);
    let aligned = Formatter::with_theme(Theme::plain())
        .with_align_columns(true)
        .format(&traces);

    assert_ne!(plain, aligned);
    assert!(aligned.contains("main.worker(0xc00001e0c0)"));
    assert_eq!(traces.len(), 2);
}

#[test]
fn test_parse_in_place() {
    let mut buffer = b"goroutine 4 [sleep]:\ntime.Sleep(0x3b9aca00)\n\t/usr/local/go/src/runtime/time.go:195 +0x135\n".to_vec();
    parse_in_place(&mut buffer, &config().with_color(false));

    let expected = "\
Goroutine 4: sleep
└── time.Sleep(0x3b9aca00)
    └── time.go:195 +0x135";
    assert_eq!(String::from_utf8(buffer).unwrap(), expected);
}

#[test]
fn test_truncated_name_rendered_with_marker() {
    let name = "github.com/acme/platform/services/billing/internal/ledger.(*Book).Reconcile";
    let dump = format!("goroutine 1 [running]:\n{}(0x1)\n", name);

    let rendered = String::from_utf8(parse(dump.as_bytes(), &config().with_color(false))).unwrap();
    assert!(rendered.contains(".../billing/internal/ledger.(*Book).Reconcile ...(0x1)"));
    assert!(!rendered.contains("github.com"));

    let full = String::from_utf8(parse(dump.as_bytes(), &config().with_color(false).with_simplify(false))).unwrap();
    assert!(full.contains(name));
}

#[test]
fn test_empty_input_renders_nothing() {
    assert!(parse(b"\n\n", &config()).is_empty());
}
