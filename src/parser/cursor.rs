//! Line cursor with one line of lookahead.

/// Forward-only cursor over the lines of a dump
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    position: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            position: 0,
        }
    }

    /// Line that `advance` would return next, without consuming it
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.position).copied()
    }

    /// Consume and return the next line
    pub fn advance(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.position += 1;
        Some(line)
    }
}
