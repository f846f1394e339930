//! Theme files.
//!
//! Loads a `Theme` from TOML. Every table is optional; a missing table keeps
//! the default theme's style for that field.
//!
//! ```toml
//! [unit]
//! fg = "#00add8"
//! bold = true
//!
//! [repeat]
//! fg = "red"
//! italic = true
//! ```

use super::{Style, Theme};
use crate::utils::error::ThemeError;
use colored::Color;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    unit: Option<StyleSpec>,
    function: Option<StyleSpec>,
    args: Option<StyleSpec>,
    file: Option<StyleSpec>,
    line: Option<StyleSpec>,
    spawn: Option<StyleSpec>,
    repeat: Option<StyleSpec>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleSpec {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    faint: bool,
    #[serde(default)]
    blink: bool,
    #[serde(default)]
    padding_left: usize,
    #[serde(default)]
    margin_top: usize,
}

/// Load a theme from a TOML file
///
/// # Errors
/// * `ThemeError::ReadFailed` - If the file cannot be read
/// * `ThemeError::ParseFailed` - If the TOML is invalid
/// * `ThemeError::InvalidColor` - If a color is neither `#rrggbb` nor a known name
pub fn load_theme(path: impl AsRef<Path>) -> Result<Theme, ThemeError> {
    let path = path.as_ref();
    debug!("Loading theme from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    theme_from_str(&contents)
}

/// Build a theme from TOML text
pub fn theme_from_str(contents: &str) -> Result<Theme, ThemeError> {
    let file: ThemeFile = toml::from_str(contents)?;
    let base = Theme::default();

    Ok(Theme {
        unit: resolve("unit", file.unit, base.unit)?,
        function: resolve("function", file.function, base.function)?,
        args: resolve("args", file.args, base.args)?,
        file: resolve("file", file.file, base.file)?,
        line: resolve("line", file.line, base.line)?,
        spawn: resolve("spawn", file.spawn, base.spawn)?,
        repeat: resolve("repeat", file.repeat, base.repeat)?,
        strip_styles: None,
    })
}

fn resolve(field: &str, spec: Option<StyleSpec>, fallback: Style) -> Result<Style, ThemeError> {
    let Some(spec) = spec else {
        return Ok(fallback);
    };

    let fg = spec
        .fg
        .as_deref()
        .map(|value| parse_color(&format!("{}.fg", field), value))
        .transpose()?;
    let bg = spec
        .bg
        .as_deref()
        .map(|value| parse_color(&format!("{}.bg", field), value))
        .transpose()?;

    Ok(Style {
        fg,
        bg,
        bold: spec.bold,
        italic: spec.italic,
        faint: spec.faint,
        blink: spec.blink,
        padding_left: spec.padding_left,
        margin_top: spec.margin_top,
    })
}

/// Parse `#rrggbb` or a named terminal color ("red", "bright blue", ...)
fn parse_color(field: &str, value: &str) -> Result<Color, ThemeError> {
    let invalid = || ThemeError::InvalidColor {
        field: field.to_string(),
        value: value.to_string(),
    };

    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        return Ok(Color::TrueColor {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        });
    }

    value.parse::<Color>().map_err(|_| invalid())
}
