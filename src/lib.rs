//! Tatami Terminal Emulation Engine
//!
//! A streaming ANSI/VT escape-sequence interpreter producing a styled,
//! structured document model. This crate provides:
//!
//! - `parser`: streaming escape tokenizer with carryover across calls
//! - `core`: styled line buffer, cursor state, and the 256-color palette
//! - `Terminal`: the facade wiring tokenizer, state machine, and buffer
//!
//! The engine's responsibility ends at the document model: rendering,
//! input editing, and clipboard integration are external collaborators
//! that read the buffer and feed `write`.

pub mod core;
pub mod parser;
mod terminal;

pub use crate::core::{Attributes, Buffer, Color, ColorError, Cursor, Line, Rgb, Snapshot, Span, Style};
pub use crate::parser::{Command, CsiToken, Token, Tokenizer};
pub use crate::terminal::{Event, Signal, Terminal};
