//! Inspect command implementation.
//!
//! Parses a dump and emits the structured traces as a JSON report.

use super::models::InspectArgs;
use super::utils::read_dump;
use crate::aggregator::FrameCounts;
use crate::output::{report_to_string, write_report};
use crate::parser::{Parser, TraceReport};
use crate::utils::config::Config;
use anyhow::{Context, Result};
use log::{debug, info};

/// Execute the inspect command
///
/// **Public** - main entry point called from main.rs
pub fn execute_inspect(args: InspectArgs) -> Result<()> {
    let dump = read_dump(args.input.as_deref()).context("Failed to read goroutine dump")?;

    let report = build_report(&dump, &args);
    info!(
        "Parsed {} goroutines with {} entries",
        report.trace_count,
        report.entry_count()
    );

    for trace in &report.traces {
        let counts = FrameCounts::from_entries(&trace.entries);
        let spawner = trace
            .spawn_trailer()
            .map(|e| e.function_name.as_str())
            .unwrap_or("-");
        debug!(
            "goroutine {} [{}]: {} frames, {} distinct, {} repeated, created by {}",
            trace.unit_id,
            trace.unit_state,
            trace.frame_count(),
            counts.distinct(),
            counts.repeated(),
            spawner
        );
    }

    match &args.output {
        Some(path) => {
            write_report(&report, path).context("Failed to write trace report")?;
            info!("✓ Report written to: {}", path.display());
        }
        None => println!("{}", report_to_string(&report)?),
    }

    Ok(())
}

/// Parse a dump into a report using the inspect options
///
/// **Public** - exposed for tests
pub fn build_report(dump: &[u8], args: &InspectArgs) -> TraceReport {
    let mut config = Config::new().with_simplify(args.simplify);
    if let Some(width) = args.width {
        config = config.with_display_width(width);
    }

    TraceReport::new(Parser::new(&config).parse(dump))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_report() {
        let dump = b"goroutine 1 [running]:\nmain.main()\n\t/src/main.go:3 +0x1\n\ngoroutine 2 [sleep]:\n";
        let args = InspectArgs {
            simplify: false,
            ..Default::default()
        };

        let report = build_report(dump, &args);
        assert_eq!(report.trace_count, 2);
        assert_eq!(report.traces[0].entries[0].file, "/src/main.go");
        assert!(report.traces[1].entries.is_empty());
    }
}
