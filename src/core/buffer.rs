//! Styled line buffer
//!
//! The buffer owns the ordered sequence of lines and the single live
//! cursor. Rows are addressed 1-based; rows beyond the current end are
//! materialized on demand as empty lines and never removed except on a
//! full reset.

use serde::{Deserialize, Serialize};

use super::cursor::Cursor;
use super::line::Line;
use super::style::Style;

/// Ordered lines plus the live cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buffer {
    lines: Vec<Line>,
    pub cursor: Cursor,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    /// Create a buffer with one empty line and a home cursor
    pub fn new() -> Self {
        Buffer {
            lines: vec![Line::new()],
            cursor: Cursor::new(),
        }
    }

    /// Reset to the initial state: one empty line, home cursor, default
    /// attributes
    pub fn reset(&mut self) {
        self.lines.clear();
        self.lines.push(Line::new());
        self.cursor.reset();
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line at a 1-based row
    pub fn line(&self, row: usize) -> Option<&Line> {
        row.checked_sub(1).and_then(|idx| self.lines.get(idx))
    }

    /// Move the cursor, creating any missing rows up to the target.
    /// Coordinates are clamped to a minimum of 1.
    pub fn move_cursor(&mut self, row: usize, column: usize) {
        self.cursor.move_to(row, column);
        self.materialize(self.cursor.row);
    }

    /// Write text at the cursor with the given resolved style; the
    /// cursor column advances by the text's length in code points.
    pub fn insert_text(&mut self, text: &str, style: Style) {
        let written = text.chars().count();
        if written == 0 {
            return;
        }

        let (row, column) = self.cursor.position();
        self.materialize(row);
        self.lines[row - 1].write_at(column - 1, text, style);
        self.cursor.column += written;
    }

    /// Ensure the 1-based row exists, padding with empty lines
    fn materialize(&mut self, row: usize) {
        while self.lines.len() < row {
            self.lines.push(Line::new());
        }
    }
}
