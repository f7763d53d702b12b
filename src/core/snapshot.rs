//! Deterministic snapshot generation
//!
//! Snapshots capture the complete document state in a serializable
//! format for renderers, testing, and debugging. Given the same input
//! stream, the emulator must produce identical snapshots. Colors are
//! pre-resolved to RGB so consumers never need the palette.

use serde::{Deserialize, Serialize};

use super::buffer::Buffer;
use super::color::Rgb;
use super::line::Line;
use super::span::Span;

/// A complete snapshot of the document state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub lines: Vec<LineSnapshot>,
    pub cursor: CursorSnapshot,
}

/// Snapshot of one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSnapshot {
    pub spans: Vec<SpanSnapshot>,
    pub len: usize,
}

/// Snapshot of one styled span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanSnapshot {
    pub text: String,
    pub foreground: Rgb,
    pub background: Rgb,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strikethrough: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub blink_slow: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub blink_fast: bool,
}

/// Snapshot of the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorSnapshot {
    pub row: usize,
    pub column: usize,
    pub visible: bool,
}

fn is_false(b: &bool) -> bool {
    !b
}

impl Snapshot {
    /// Capture the current state of a buffer
    pub fn capture(buffer: &Buffer) -> Self {
        Snapshot {
            lines: buffer.lines().iter().map(LineSnapshot::capture).collect(),
            cursor: CursorSnapshot {
                row: buffer.cursor.row,
                column: buffer.cursor.column,
                visible: buffer.cursor.visible,
            },
        }
    }
}

impl LineSnapshot {
    fn capture(line: &Line) -> Self {
        LineSnapshot {
            spans: line.spans().iter().map(SpanSnapshot::capture).collect(),
            len: line.len(),
        }
    }
}

impl SpanSnapshot {
    fn capture(span: &Span) -> Self {
        let style = span.style();
        SpanSnapshot {
            text: span.text().to_string(),
            foreground: style.foreground.rgb(),
            background: style.background.rgb(),
            bold: style.bold,
            italic: style.italic,
            underline: style.underline,
            strikethrough: style.strikethrough,
            blink_slow: style.blink_slow,
            blink_fast: style.blink_fast,
        }
    }
}
