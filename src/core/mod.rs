//! Document Model
//!
//! Platform-independent styled-document state. This module contains:
//! - Color representation and the fixed 256-color palette
//! - Attribute state and resolved span styles
//! - Styled spans and lines with overwrite/splice semantics
//! - Cursor state and positioning
//! - The line buffer tying lines and cursor together
//! - Deterministic snapshot generation
//!
//! The model is designed to be completely deterministic: given the same
//! sequence of writes, it will always produce the same state.

mod buffer;
mod color;
mod cursor;
mod line;
mod snapshot;
mod span;
mod style;

pub use buffer::Buffer;
pub use color::{resolve, Color, ColorError, Rgb, PALETTE};
pub use cursor::Cursor;
pub use line::Line;
pub use snapshot::{CursorSnapshot, LineSnapshot, Snapshot, SpanSnapshot};
pub use span::Span;
pub use style::{Attributes, Style};
