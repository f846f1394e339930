use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::InputError;
use anyhow::Result;
use log::debug;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Read a dump from a file, or from stdin when no path is given
pub fn read_dump(input: Option<&Path>) -> Result<Vec<u8>, InputError> {
    let bytes = match input {
        Some(path) => {
            debug!("Reading dump from: {}", path.display());
            std::fs::read(path)?
        }
        None => {
            debug!("Reading dump from stdin");
            let mut buf = Vec::new();
            std::io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(InputError::Empty);
    }

    Ok(bytes)
}

/// Validate a JSON report file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    if report.trace_count != report.traces.len() {
        anyhow::bail!(
            "trace_count is {} but the report holds {} traces",
            report.trace_count,
            report.traces.len()
        );
    }

    println!("✓ Valid trace report");
    println!("  Version: {}", report.version);
    println!("  Generated: {}", report.generated_at);
    println!("  Goroutines: {}", report.trace_count);
    println!("  Entries: {}", report.entry_count());

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Goroutine Trace v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Parses Go goroutine dumps and renders them as readable trees.");
}
