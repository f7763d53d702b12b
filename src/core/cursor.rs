//! Cursor state management
//!
//! The cursor is a position-only value owned by the buffer: a 1-based
//! row and column, the current text attributes, and a single-slot saved
//! position (CSI s/u). The line the cursor is on is a derived lookup by
//! row, not an object relationship.

use serde::{Deserialize, Serialize};

use super::style::Attributes;

/// Cursor position and attribute state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Row position (1-based)
    pub row: usize,
    /// Column position (1-based)
    pub column: usize,
    /// Current text attributes (applied to newly written text)
    pub attrs: Attributes,
    /// Whether the cursor should be drawn by a renderer
    pub visible: bool,
    /// Saved position slot, overwritten on each save
    saved: Option<(usize, usize)>,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            row: 1,
            column: 1,
            attrs: Attributes::default(),
            visible: true,
            saved: None,
        }
    }
}

impl Cursor {
    /// Create a cursor at the home position with default attributes
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position as (row, column)
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    /// Move to an absolute position; coordinates are clamped to 1
    pub fn move_to(&mut self, row: usize, column: usize) {
        self.row = row.max(1);
        self.column = column.max(1);
    }

    /// Store the current position in the single save slot
    pub fn save_position(&mut self) {
        self.saved = Some((self.row, self.column));
    }

    /// The position a restore would move to: the saved position, or the
    /// current one when nothing was ever saved.
    pub fn restore_position(&self) -> (usize, usize) {
        self.saved.unwrap_or((self.row, self.column))
    }

    /// Reset to the home position with default attributes, discarding
    /// any saved position
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_default() {
        let cursor = Cursor::default();
        assert_eq!(cursor.position(), (1, 1));
        assert!(cursor.visible);
        assert_eq!(cursor.attrs, Attributes::default());
    }

    #[test]
    fn test_move_to_clamps_to_one() {
        let mut cursor = Cursor::new();
        cursor.move_to(0, 0);
        assert_eq!(cursor.position(), (1, 1));

        cursor.move_to(5, 9);
        assert_eq!(cursor.position(), (5, 9));
    }

    #[test]
    fn test_save_restore() {
        let mut cursor = Cursor::new();
        cursor.move_to(3, 7);
        cursor.save_position();
        cursor.move_to(10, 2);
        assert_eq!(cursor.restore_position(), (3, 7));
    }

    #[test]
    fn test_restore_without_save_is_current_position() {
        let mut cursor = Cursor::new();
        cursor.move_to(4, 6);
        assert_eq!(cursor.restore_position(), (4, 6));
    }

    #[test]
    fn test_save_overwrites_previous_slot() {
        let mut cursor = Cursor::new();
        cursor.move_to(2, 2);
        cursor.save_position();
        cursor.move_to(8, 8);
        cursor.save_position();
        cursor.move_to(1, 1);
        assert_eq!(cursor.restore_position(), (8, 8));
    }

    #[test]
    fn test_reset_discards_saved_position() {
        let mut cursor = Cursor::new();
        cursor.move_to(5, 5);
        cursor.save_position();
        cursor.reset();
        assert_eq!(cursor.position(), (1, 1));
        assert_eq!(cursor.restore_position(), (1, 1));
    }
}
