//! Styling for rendered traces.
//!
//! A `Theme` is a bag of named `Style`s, one per rendered field. Themes are
//! plain values: the formatter only reads them, and disabling colors
//! produces a new theme instead of changing an existing one.

pub mod loader;

pub use loader::{load_theme, theme_from_str};

use colored::{Color, ColoredString, Colorize};

/// Visual and structural attributes for one rendered field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub faint: bool,
    pub blink: bool,

    /// Spaces placed before the text. Structural, survives `without_colors`.
    pub padding_left: usize,

    /// Blank lines placed above the text. Structural, survives `without_colors`.
    pub margin_top: usize,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn faint(mut self, faint: bool) -> Self {
        self.faint = faint;
        self
    }

    pub fn blink(mut self, blink: bool) -> Self {
        self.blink = blink;
        self
    }

    pub fn padding_left(mut self, padding: usize) -> Self {
        self.padding_left = padding;
        self
    }

    pub fn margin_top(mut self, margin: usize) -> Self {
        self.margin_top = margin;
        self
    }

    /// True when rendering would emit escape sequences
    pub fn has_visual_attributes(&self) -> bool {
        self.fg.is_some() || self.bg.is_some() || self.bold || self.italic || self.faint || self.blink
    }

    /// Copy of this style with colors and text attributes removed, layout kept
    pub fn without_colors(&self) -> Self {
        Self {
            padding_left: self.padding_left,
            margin_top: self.margin_top,
            ..Self::default()
        }
    }

    /// Render `text` with this style
    pub fn render(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + self.padding_left + self.margin_top);

        for _ in 0..self.margin_top {
            out.push('\n');
        }
        out.push_str(&" ".repeat(self.padding_left));

        if self.has_visual_attributes() {
            out.push_str(&self.apply(text).to_string());
        } else {
            out.push_str(text);
        }

        out
    }

    fn apply(&self, text: &str) -> ColoredString {
        let mut styled = text.normal();

        if let Some(fg) = self.fg {
            styled = styled.color(fg);
        }
        if let Some(bg) = self.bg {
            styled = styled.on_color(bg);
        }
        if self.bold {
            styled = styled.bold();
        }
        if self.italic {
            styled = styled.italic();
        }
        if self.faint {
            styled = styled.dimmed();
        }
        if self.blink {
            styled = styled.blink();
        }

        styled
    }
}

/// Styles for every field the formatter renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Goroutine header line
    pub unit: Style,
    pub function: Style,
    pub args: Style,
    pub file: Style,
    pub line: Style,
    /// "Created by" trailer line
    pub spawn: Style,
    /// "(repeated N times)" suffix
    pub repeat: Style,

    /// Replaces the default behaviour of `without_colors` when set
    pub strip_styles: Option<fn(&Theme) -> Theme>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            unit: Style::new().fg(rgb(0xed, 0x87, 0x96)).bold(true),
            function: Style::new().fg(rgb(0xf0, 0xc6, 0xc6)),
            args: Style::new().fg(rgb(0x7d, 0xc4, 0xe4)),
            file: Style::new().fg(rgb(0xf5, 0xa9, 0x7f)),
            line: Style::new().fg(rgb(0xee, 0xd4, 0x9f)),
            spawn: Style::new().fg(rgb(0xee, 0x99, 0xa0)),
            repeat: Style::new().italic(true).faint(true),
            strip_styles: None,
        }
    }
}

impl Theme {
    /// Theme with no styling at all
    pub fn plain() -> Self {
        Self {
            unit: Style::new(),
            function: Style::new(),
            args: Style::new(),
            file: Style::new(),
            line: Style::new(),
            spawn: Style::new(),
            repeat: Style::new(),
            strip_styles: None,
        }
    }

    /// Use `strip` instead of the default stripping in `without_colors`.
    ///
    /// The routine receives the styled theme and returns the theme to render
    /// with when colors are off, e.g. one that keeps the header bold.
    pub fn with_strip_styles(mut self, strip: fn(&Theme) -> Theme) -> Self {
        self.strip_styles = Some(strip);
        self
    }

    /// Copy of this theme with every color and text attribute removed.
    ///
    /// Padding and margins are untouched so the layout is identical to the
    /// styled output. A theme with a custom `strip_styles` routine returns
    /// that routine's result instead.
    pub fn without_colors(&self) -> Self {
        if let Some(strip) = self.strip_styles {
            return strip(self);
        }

        Self {
            unit: self.unit.without_colors(),
            function: self.function.without_colors(),
            args: self.args.without_colors(),
            file: self.file.without_colors(),
            line: self.line.without_colors(),
            spawn: self.spawn.without_colors(),
            repeat: self.repeat.without_colors(),
            strip_styles: None,
        }
    }
}

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::TrueColor { r, g, b }
}
