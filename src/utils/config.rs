//! Configuration and constants for parsing and rendering.

use crate::theme::Theme;

/// Current JSON export schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Display width assumed when the terminal cannot be queried
pub const FALLBACK_DISPLAY_WIDTH: usize = 60 * 8;

/// Identifiers longer than `display_width / TRUNCATION_DIVISOR` get shortened
pub const TRUNCATION_DIVISOR: usize = 8;

/// Number of trailing `/` segments kept when shortening an identifier
pub const KEPT_SEGMENTS: usize = 3;

/// Marker placed in front of a shortened identifier
pub const ELLIPSIS: &str = "...";

/// Appended to a shortened identifier when it is rendered
pub const TRUNCATION_MARKER: &str = " ...";

/// Suffix of source files in location lines
pub const SOURCE_SUFFIX: &str = ".go";

/// Rendering and parsing options
///
/// Built as a plain value; the `with_*` helpers are conveniences for
/// overriding single fields.
#[derive(Debug, Clone)]
pub struct Config {
    /// Emit terminal colors and text attributes (default: true)
    pub colorize: bool,

    /// Base-name file paths and shorten long identifiers (default: true)
    pub simplify: bool,

    /// Styles used by the formatter (default: `Theme::default()`)
    pub theme: Theme,

    /// Pad function and file columns to the widest entry of each trace (default: false)
    pub align_columns: bool,

    /// Display width used for the truncation threshold.
    /// `None` queries the terminal and falls back to `FALLBACK_DISPLAY_WIDTH`.
    pub display_width: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colorize: true,
            simplify: true,
            theme: Theme::default(),
            align_columns: false,
            display_width: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    pub fn with_simplify(mut self, simplify: bool) -> Self {
        self.simplify = simplify;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_align_columns(mut self, align: bool) -> Self {
        self.align_columns = align;
        self
    }

    pub fn with_display_width(mut self, width: usize) -> Self {
        self.display_width = Some(width);
        self
    }

    /// Resolve the display width: explicit override, then the terminal, then the fallback
    pub fn resolve_display_width(&self) -> usize {
        if let Some(width) = self.display_width {
            return width;
        }

        terminal_size::terminal_size()
            .map(|(terminal_size::Width(w), _)| w as usize)
            .unwrap_or(FALLBACK_DISPLAY_WIDTH)
    }

    /// Identifier length above which call-frame names are shortened
    pub fn truncation_threshold(&self) -> usize {
        self.resolve_display_width() / TRUNCATION_DIVISOR
    }
}
