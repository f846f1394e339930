use goroutine_trace::commands::{build_report, InspectArgs};
use goroutine_trace::output::{read_report, validate_path, write_rendered, write_report};
use goroutine_trace::parser::{Entry, Trace, TraceReport};
use std::path::Path;
use tempfile::NamedTempFile;

fn create_test_report() -> TraceReport {
    let mut trace = Trace::new("1", "running");
    let mut entry = Entry::call("main.main", "");
    entry.set_location("main.go", "12", "0x1d");
    trace.entries.push(entry);
    trace.entries.push(Entry::spawn_trailer("main.init", "0"));

    TraceReport::new(vec![trace, Trace::new("2", "sleep")])
}

#[test]
fn test_write_and_read_report() {
    let report = create_test_report();
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    write_report(&report, path).unwrap();
    let loaded = read_report(path).unwrap();

    assert_eq!(loaded.version, report.version);
    assert_eq!(loaded.trace_count, 2);
    assert_eq!(loaded.traces, report.traces);
}

#[test]
fn test_report_from_dump() {
    let dump = b"goroutine 9 [select]:\nmain.poll(0x1)\n\t/x/poll.go:5 +0x2\ncreated by main.run in goroutine 1\n\t/x/run.go:3 +0x9\n";
    let report = build_report(dump, &InspectArgs::default());

    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("report.json");
    write_report(&report, &path).unwrap();

    let loaded = read_report(&path).unwrap();
    let trailer = &loaded.traces[0].entries[1];
    assert!(trailer.is_spawn_trailer);
    assert_eq!(trailer.spawning_unit_id, "1");
    assert_eq!(trailer.file, "run.go");
}

#[test]
fn test_read_report_invalid_json() {
    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "{ not json").unwrap();

    assert!(read_report(temp_file.path()).is_err());
}

#[test]
fn test_validate_output_path_empty() {
    let result = validate_path(Path::new(""));
    assert!(result.is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = validate_path(temp_dir.path());
    assert!(result.is_err());
}

#[test]
fn test_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/report.json");

    write_report(&create_test_report(), &nested_path).unwrap();

    assert!(nested_path.exists());
}

#[test]
fn test_write_rendered_appends_newline() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("out/trace.txt");

    write_rendered("Goroutine 1: running", &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "Goroutine 1: running\n");
}

#[test]
#[cfg(target_os = "linux")]
fn test_write_report_surfaces_flush_errors() {
    let result = write_report(&create_test_report(), "/dev/full");
    assert!(result.is_err());
}
