//! Format command implementation.
//!
//! The format command:
//! 1. Reads the goroutine dump
//! 2. Parses it into traces
//! 3. Renders the traces as trees
//! 4. Writes the rendering

use super::models::FormatArgs;
use super::utils::read_dump;
use crate::formatter::Formatter;
use crate::output::write_rendered;
use crate::parser::Parser;
use crate::theme::load_theme;
use crate::utils::config::Config;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the format command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input read failures
/// * Theme file errors
/// * Output write failures
pub fn execute_format(args: FormatArgs) -> Result<()> {
    let start_time = Instant::now();

    let config = build_config(&args)?;

    info!("Step 1/3: Reading dump...");
    let dump = read_dump(args.input.as_deref()).context("Failed to read goroutine dump")?;
    debug!("Read {} bytes", dump.len());

    info!("Step 2/3: Parsing goroutines...");
    let parser = Parser::new(&config);
    debug!("Truncation threshold: {} chars", parser.truncation_threshold());
    let traces = parser.parse(&dump);
    info!("Found {} goroutines", traces.len());

    info!("Step 3/3: Rendering...");
    let rendered = Formatter::new(&config).format(&traces);

    match &args.output {
        Some(path) => {
            write_rendered(&rendered, path).context("Failed to write rendered traces")?;
            info!("✓ Rendered traces written to: {}", path.display());
        }
        None => println!("{}", rendered),
    }

    let elapsed = start_time.elapsed();
    debug!("Format completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Build the rendering config from CLI arguments
///
/// **Public** - exposed for tests
pub fn build_config(args: &FormatArgs) -> Result<Config> {
    let mut config = Config::new()
        .with_color(args.colorize)
        .with_simplify(args.simplify)
        .with_align_columns(args.align_columns);

    if let Some(width) = args.width {
        config = config.with_display_width(width);
    }

    if let Some(path) = &args.theme {
        let theme = load_theme(path)
            .with_context(|| format!("Failed to load theme from {}", path.display()))?;
        config = config.with_theme(theme);
    }

    Ok(config)
}

/// Validate format arguments
///
/// **Public** - can be called before execute_format for early validation
pub fn validate_args(args: &FormatArgs) -> Result<()> {
    if let Some(input) = &args.input {
        if !input.exists() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }
        if input.is_dir() {
            anyhow::bail!("Input path is a directory: {}", input.display());
        }
    }

    if args.width == Some(0) {
        anyhow::bail!("width must be greater than 0");
    }

    if let Some(theme) = &args.theme {
        if !theme.exists() {
            anyhow::bail!("Theme file does not exist: {}", theme.display());
        }
    }

    Ok(())
}
