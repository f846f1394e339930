use std::path::PathBuf;

/// Arguments for the format command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct FormatArgs {
    /// Dump file to read (None = stdin)
    pub input: Option<PathBuf>,

    /// File to write the rendering to (None = stdout)
    pub output: Option<PathBuf>,

    /// Emit colors and text attributes
    pub colorize: bool,

    /// Base-name file paths and shorten long identifiers
    pub simplify: bool,

    /// Pad function and file columns
    pub align_columns: bool,

    /// Display width override for the truncation threshold
    pub width: Option<usize>,

    /// TOML theme file (None = built-in theme)
    pub theme: Option<PathBuf>,
}

impl Default for FormatArgs {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            colorize: true,
            simplify: true,
            align_columns: false,
            width: None,
            theme: None,
        }
    }
}

/// Arguments for the inspect command
#[derive(Debug, Clone)]
pub struct InspectArgs {
    /// Dump file to read (None = stdin)
    pub input: Option<PathBuf>,

    /// File to write the JSON report to (None = stdout)
    pub output: Option<PathBuf>,

    /// Base-name file paths and shorten long identifiers
    pub simplify: bool,

    /// Display width override for the truncation threshold
    pub width: Option<usize>,
}

impl Default for InspectArgs {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            simplify: true,
            width: None,
        }
    }
}
