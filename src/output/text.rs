//! Rendered text output writer.

use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write rendered traces to a file, with a trailing newline
///
/// **Public** - main entry point for text output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_rendered(rendered: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing rendered traces to: {}", output_path.display());

    super::prepare_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(rendered.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    if !rendered.ends_with('\n') {
        writer.write_all(b"\n").map_err(OutputError::WriteFailed)?;
    }
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "Rendered output written successfully ({} bytes, {:.2} KB)",
        rendered.len(),
        rendered.len() as f64 / 1024.0
    );

    Ok(())
}
