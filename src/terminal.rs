//! Terminal emulator facade
//!
//! Ties together the tokenizer and the document model: `write` feeds
//! input through the tokenizer, command tokens drive the cursor and
//! attribute state machine, and text tokens land in the line buffer
//! tagged with the current resolved style.
//!
//! The emulator is single-threaded and synchronous; every call runs to
//! completion before returning and no partial state is ever observable
//! between calls.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{self, Buffer, Color, Cursor, Line, Rgb, Snapshot};
use crate::parser::{Command, CsiToken, Token, Tokenizer};

/// Events forwarded to the host through the emulator.
///
/// Both originate from the input-editing collaborator, not the emulator
/// itself: it calls `submit_line` / `request_interrupt` and the host
/// drains the queue with `poll_event`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A submitted line of input
    Input(String),
    /// An interrupt request
    Signal(Signal),
}

/// Signals raised by an interrupt request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Kill,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Kill => write!(f, "SIGKILL"),
        }
    }
}

/// The terminal emulation engine
#[derive(Debug, Clone, Default)]
pub struct Terminal {
    buffer: Buffer,
    tokenizer: Tokenizer,
    events: VecDeque<Event>,
}

impl Terminal {
    /// Create an emulator with one empty line and a home cursor
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed raw text (possibly containing escape sequences) through the
    /// pipeline. Partial trailing sequences are retained for the next
    /// call.
    pub fn write(&mut self, data: &str) {
        let tokens = self.tokenizer.feed(data);
        self.apply(tokens);
    }

    /// Feed raw bytes; an incomplete trailing UTF-8 sequence is
    /// retained for the next call.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        let tokens = self.tokenizer.feed_bytes(bytes);
        self.apply(tokens);
    }

    /// Write the text followed by a newline
    pub fn writeln(&mut self, data: &str) {
        self.write(data);
        self.write("\n");
    }

    /// Reset to one empty line, home cursor, default attributes; any
    /// carryover is discarded.
    pub fn clear(&mut self) {
        self.buffer.reset();
        self.tokenizer.reset();
    }

    /// Current cursor position as (row, column), 1-based
    pub fn cursor_position(&self) -> (usize, usize) {
        self.buffer.cursor.position()
    }

    /// Move the cursor directly, bypassing escape parsing; missing rows
    /// are materialized.
    pub fn set_cursor_position(&mut self, row: usize, column: usize) {
        self.buffer.move_cursor(row, column);
    }

    /// Read access to the cursor state
    pub fn cursor(&self) -> &Cursor {
        &self.buffer.cursor
    }

    pub fn show_cursor(&mut self) {
        self.buffer.cursor.visible = true;
    }

    pub fn hide_cursor(&mut self) {
        self.buffer.cursor.visible = false;
    }

    /// All buffer lines in row order
    pub fn lines(&self) -> &[Line] {
        self.buffer.lines()
    }

    /// Line at a 1-based row
    pub fn line(&self, row: usize) -> Option<&Line> {
        self.buffer.line(row)
    }

    /// Plain text of the line at a 1-based row
    pub fn line_text(&self, row: usize) -> Option<String> {
        self.buffer.line(row).map(Line::text)
    }

    /// Capture the full document state for a renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.buffer)
    }

    /// Forward a submitted line from the input collaborator
    pub fn submit_line(&mut self, text: impl Into<String>) {
        self.events.push_back(Event::Input(text.into()));
    }

    /// Forward an interrupt request from the input collaborator; the
    /// interrupt is echoed to the display as `^C`.
    pub fn request_interrupt(&mut self) {
        self.write("^C");
        self.events.push_back(Event::Signal(Signal::Kill));
    }

    /// Drain the next pending event, oldest first
    pub fn poll_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    fn apply(&mut self, tokens: Vec<Token>) {
        for token in tokens {
            match token {
                Token::Text(text) => self.insert_literal(&text),
                Token::Csi(csi) => self.apply_command(csi),
            }
        }
    }

    fn insert_literal(&mut self, text: &str) {
        let style = self.buffer.cursor.attrs.resolve();
        self.buffer.insert_text(text, style);
    }

    fn apply_command(&mut self, token: CsiToken) {
        let (row, column) = self.buffer.cursor.position();
        match token.command {
            Command::SelectGraphics => self.apply_sgr(&token),
            Command::CursorUp => {
                let n = token.arg(0, 1) as usize;
                self.buffer.move_cursor(row.saturating_sub(n), column);
            }
            Command::CursorDown => {
                let n = token.arg(0, 1) as usize;
                self.buffer.move_cursor(row + n, column);
            }
            Command::CursorForward => {
                let n = token.arg(0, 1) as usize;
                self.buffer.move_cursor(row, column + n);
            }
            Command::CursorBack => {
                let n = token.arg(0, 1) as usize;
                self.buffer.move_cursor(row, column.saturating_sub(n));
            }
            Command::CursorNextLine => {
                let n = token.arg(0, 1) as usize;
                self.buffer.move_cursor(row + n, 1);
            }
            Command::CursorPrevLine => {
                let n = token.arg(0, 1) as usize;
                self.buffer.move_cursor(row.saturating_sub(n), 1);
            }
            Command::CursorColumn => {
                let target = token.arg(0, 1) as usize;
                self.buffer.move_cursor(row, target);
            }
            Command::CursorPosition => {
                let target_row = token.arg(0, 1) as usize;
                let target_column = token.arg(1, 1) as usize;
                self.buffer.move_cursor(target_row, target_column);
            }
            Command::SavePosition => self.buffer.cursor.save_position(),
            Command::RestorePosition => {
                let (saved_row, saved_column) = self.buffer.cursor.restore_position();
                self.buffer.move_cursor(saved_row, saved_column);
            }
            Command::Other(final_byte) => {
                debug!(%final_byte, "unrecognized command re-emitted as literal text");
                self.insert_literal(&token.raw());
            }
        }
    }

    /// Apply an SGR command, iterating arguments left to right. An
    /// empty argument list means reset. Unknown codes are ignored.
    fn apply_sgr(&mut self, token: &CsiToken) {
        let attrs = &mut self.buffer.cursor.attrs;
        if token.args.is_empty() {
            attrs.reset();
            return;
        }

        let mut i = 0;
        while i < token.args.len() {
            let arg = token.args[i];
            match arg {
                0 => attrs.reset(),
                1 => attrs.bold = true,
                3 => attrs.italic = true,
                4 => attrs.underline = true,
                5 => attrs.blink_slow = true,
                6 => attrs.blink_fast = true,
                7 => attrs.invert = true,
                8 => attrs.conceal = true,
                9 => attrs.strikethrough = true,
                21 | 22 => attrs.bold = false,
                23 => attrs.italic = false,
                24 => attrs.underline = false,
                25 => attrs.blink_slow = false,
                26 => attrs.blink_fast = false,
                27 => attrs.invert = false,
                28 => attrs.conceal = false,
                29 => attrs.strikethrough = false,
                30..=37 => attrs.foreground = Color::Indexed((arg - 30) as u8),
                38 | 48 => {
                    let (color, consumed) = extended_color(&token.args[i..]);
                    if let Some(color) = color {
                        if arg == 38 {
                            attrs.foreground = color;
                        } else {
                            attrs.background = color;
                        }
                    }
                    i += consumed;
                }
                39 => attrs.foreground = Color::DEFAULT_FOREGROUND,
                40..=47 => attrs.background = Color::Indexed((arg - 40) as u8),
                49 => attrs.background = Color::DEFAULT_BACKGROUND,
                90..=98 => attrs.foreground = Color::Indexed((arg - 82) as u8),
                100..=108 => attrs.background = Color::Indexed((arg - 92) as u8),
                other => trace!(code = other, "ignored SGR code"),
            }
            i += 1;
        }
    }
}

/// Interpret a `38`/`48` extended color directive.
///
/// Returns the color (if the directive was well-formed and in range)
/// and how many extra arguments it consumed. A malformed sub-mode
/// consumes nothing; iteration continues at the next argument. An
/// out-of-range index or component consumes its arguments but yields no
/// color, so the prior color is retained.
fn extended_color(rest: &[u16]) -> (Option<Color>, usize) {
    if rest.len() < 3 {
        debug!("truncated extended color directive ignored");
        return (None, 0);
    }
    match rest[1] {
        5 => {
            let index = rest[2];
            match core::resolve(index) {
                Ok(_) => (Some(Color::Indexed(index as u8)), 2),
                Err(err) => {
                    debug!(%err, "extended color directive ignored");
                    (None, 2)
                }
            }
        }
        2 => {
            if rest.len() < 5 {
                debug!("truncated truecolor directive ignored");
                return (None, 0);
            }
            match Rgb::from_components(rest[2], rest[3], rest[4]) {
                Ok(rgb) => (Some(Color::Rgb(rgb)), 4),
                Err(err) => {
                    debug!(%err, "truecolor directive ignored");
                    (None, 4)
                }
            }
        }
        mode => {
            debug!(mode, "unknown extended color mode ignored");
            (None, 0)
        }
    }
}
