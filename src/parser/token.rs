//! Token model
//!
//! The tokenizer reduces the input stream to two token kinds: printable
//! text runs and CSI commands. Each recognized final byte has its own
//! `Command` variant so the state machine dispatches through a single
//! match; unrecognized final bytes land in `Command::Other`, which
//! carries enough to re-emit the raw sequence as literal text.

use serde::{Deserialize, Serialize};

/// One tokenized unit of input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// A run of printable text; never empty
    Text(String),
    /// A complete CSI command
    Csi(CsiToken),
}

/// Recognized CSI final bytes, plus a fallback for everything else
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// CSI A - move up
    CursorUp,
    /// CSI B - move down
    CursorDown,
    /// CSI C - move forward
    CursorForward,
    /// CSI D - move backward
    CursorBack,
    /// CSI E - column 1, then down
    CursorNextLine,
    /// CSI F - column 1, then up
    CursorPrevLine,
    /// CSI G - absolute column
    CursorColumn,
    /// CSI H - absolute position
    CursorPosition,
    /// CSI m - select graphic rendition
    SelectGraphics,
    /// CSI s - store cursor position
    SavePosition,
    /// CSI u - restore cursor position
    RestorePosition,
    /// Any other final byte; the sequence is re-emitted as literal text
    Other(char),
}

impl Command {
    /// Map a final byte to its command
    pub fn from_final(c: char) -> Self {
        match c {
            'A' => Command::CursorUp,
            'B' => Command::CursorDown,
            'C' => Command::CursorForward,
            'D' => Command::CursorBack,
            'E' => Command::CursorNextLine,
            'F' => Command::CursorPrevLine,
            'G' => Command::CursorColumn,
            'H' => Command::CursorPosition,
            'm' => Command::SelectGraphics,
            's' => Command::SavePosition,
            'u' => Command::RestorePosition,
            other => Command::Other(other),
        }
    }

    /// The final byte this command was parsed from
    pub fn final_byte(&self) -> char {
        match self {
            Command::CursorUp => 'A',
            Command::CursorDown => 'B',
            Command::CursorForward => 'C',
            Command::CursorBack => 'D',
            Command::CursorNextLine => 'E',
            Command::CursorPrevLine => 'F',
            Command::CursorColumn => 'G',
            Command::CursorPosition => 'H',
            Command::SelectGraphics => 'm',
            Command::SavePosition => 's',
            Command::RestorePosition => 'u',
            Command::Other(c) => *c,
        }
    }
}

/// A parsed CSI sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsiToken {
    pub command: Command,
    /// Numeric arguments in order; empty arguments are not recorded
    pub args: Vec<u16>,
    /// Private-mode marker (`!`, `<`..`?`), if any
    pub private: Option<char>,
    /// Intermediate modifier (space..`/`), if any
    pub intermediate: Option<char>,
}

impl CsiToken {
    pub fn new(command: Command) -> Self {
        CsiToken {
            command,
            args: Vec::new(),
            private: None,
            intermediate: None,
        }
    }

    pub fn with_args(command: Command, args: Vec<u16>) -> Self {
        CsiToken {
            command,
            args,
            private: None,
            intermediate: None,
        }
    }

    /// Argument at `index`, or `default` if not present
    pub fn arg(&self, index: usize, default: u16) -> u16 {
        self.args.get(index).copied().unwrap_or(default)
    }

    /// Reconstruct the raw sequence for literal re-emission
    pub fn raw(&self) -> String {
        let mut raw = String::from("\u{1b}[");
        if let Some(private) = self.private {
            raw.push(private);
        }
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                raw.push(';');
            }
            raw.push_str(&arg.to_string());
        }
        if let Some(intermediate) = self.intermediate {
            raw.push(intermediate);
        }
        raw.push(self.command.final_byte());
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_final_round_trip() {
        for c in ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'm', 's', 'u'] {
            assert_eq!(Command::from_final(c).final_byte(), c);
        }
        assert_eq!(Command::from_final('J'), Command::Other('J'));
    }

    #[test]
    fn test_arg_defaults() {
        let token = CsiToken::with_args(Command::CursorUp, vec![3]);
        assert_eq!(token.arg(0, 1), 3);
        assert_eq!(token.arg(1, 7), 7);
    }

    #[test]
    fn test_raw_reconstruction() {
        let mut token = CsiToken::with_args(Command::Other('J'), vec![2]);
        assert_eq!(token.raw(), "\u{1b}[2J");

        token.private = Some('?');
        assert_eq!(token.raw(), "\u{1b}[?2J");

        let token = CsiToken::with_args(Command::SelectGraphics, vec![38, 5, 196]);
        assert_eq!(token.raw(), "\u{1b}[38;5;196m");
    }
}
