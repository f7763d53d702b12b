//! Streaming escape-sequence tokenizer
//!
//! The tokenizer is streaming and handles arbitrary chunk boundaries:
//! a dangling escape, a partially received CSI sequence, or a split
//! UTF-8 code point is retained in carryover and stitched onto the next
//! call rather than dropped or misread as text.
//!
//! Before general scanning, C0 controls with cursor semantics are
//! translated into the equivalent CSI commands (CR -> column 1, LF ->
//! column 1 + down one, BS -> back one) so the downstream state machine
//! has a single code path for all cursor motion.

use std::iter::Peekable;
use std::str::CharIndices;

use tracing::debug;

use super::token::{Command, CsiToken, Token};

const ESC: char = '\u{1b}';

/// Outcome of scanning one CSI sequence
enum CsiOutcome {
    /// Terminated by a final byte
    Complete(CsiToken),
    /// Aborted by a byte that fits no character class; `end` is the byte
    /// offset one past the offending character
    Malformed { end: usize },
    /// Input ended mid-sequence
    Incomplete,
}

/// Streaming tokenizer with carryover between calls
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    /// Raw unconsumed tail: a dangling ESC or partial CSI sequence
    carry: String,
    /// Incomplete trailing UTF-8 sequence from `feed_bytes`
    partial_utf8: Vec<u8>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all carryover
    pub fn reset(&mut self) {
        self.carry.clear();
        self.partial_utf8.clear();
    }

    /// True if input is buffered awaiting completion
    pub fn has_pending(&self) -> bool {
        !self.carry.is_empty() || !self.partial_utf8.is_empty()
    }

    /// Tokenize a chunk of input, prepending any carryover from the
    /// previous call. Tokens are emitted in input order; a pending text
    /// run is flushed immediately before each command token.
    pub fn feed(&mut self, input: &str) -> Vec<Token> {
        if self.carry.is_empty() {
            return self.scan(input);
        }
        let mut data = std::mem::take(&mut self.carry);
        data.push_str(input);
        self.scan(&data)
    }

    /// Tokenize raw bytes, retaining an incomplete trailing UTF-8
    /// sequence for the next call. Invalid bytes decode to U+FFFD.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Vec<Token> {
        let joined: Vec<u8>;
        let mut rest: &[u8] = if self.partial_utf8.is_empty() {
            bytes
        } else {
            let mut buf = std::mem::take(&mut self.partial_utf8);
            buf.extend_from_slice(bytes);
            joined = buf;
            &joined
        };

        let mut decoded = String::with_capacity(rest.len());
        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    decoded.push_str(valid);
                    break;
                }
                Err(err) => {
                    let (valid, invalid) = rest.split_at(err.valid_up_to());
                    decoded.push_str(&String::from_utf8_lossy(valid));
                    match err.error_len() {
                        Some(len) => {
                            decoded.push('\u{FFFD}');
                            rest = &invalid[len..];
                        }
                        None => {
                            // Code point split across the chunk boundary
                            self.partial_utf8.extend_from_slice(invalid);
                            break;
                        }
                    }
                }
            }
        }

        self.feed(&decoded)
    }

    fn scan(&mut self, data: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut text = String::new();
        let mut chars = data.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            match c {
                '\r' => {
                    flush_text(&mut tokens, &mut text);
                    tokens.push(cursor_command(Command::CursorColumn, 0));
                }
                '\n' => {
                    flush_text(&mut tokens, &mut text);
                    tokens.push(cursor_command(Command::CursorColumn, 0));
                    tokens.push(cursor_command(Command::CursorDown, 1));
                }
                '\u{8}' => {
                    flush_text(&mut tokens, &mut text);
                    tokens.push(cursor_command(Command::CursorBack, 1));
                }
                ESC => match chars.peek().copied() {
                    None => {
                        // Dangling escape at the end of input
                        flush_text(&mut tokens, &mut text);
                        self.carry.push_str(&data[start..]);
                        return tokens;
                    }
                    Some((_, '[')) => {
                        chars.next();
                        match scan_csi(&mut chars) {
                            CsiOutcome::Complete(token) => {
                                flush_text(&mut tokens, &mut text);
                                tokens.push(Token::Csi(token));
                            }
                            CsiOutcome::Malformed { end } => {
                                debug!(
                                    sequence = &data[start..end],
                                    "malformed escape sequence re-emitted as literal text"
                                );
                                text.push_str(&data[start..end]);
                            }
                            CsiOutcome::Incomplete => {
                                flush_text(&mut tokens, &mut text);
                                self.carry.push_str(&data[start..]);
                                return tokens;
                            }
                        }
                    }
                    Some((_, other)) => {
                        // Not a recognized sequence; emit verbatim with
                        // the escape marker so nothing is lost
                        chars.next();
                        text.push(ESC);
                        text.push(other);
                    }
                },
                _ => text.push(c),
            }
        }

        flush_text(&mut tokens, &mut text);
        tokens
    }
}

/// Scan the body of a CSI sequence, after `ESC [` has been consumed.
///
/// Characters are classified by numeric range: private-mode markers
/// (`!`, `<`..`?`), digits, the `;` separator, intermediate modifiers
/// (space..`/`), and final bytes (`@`..`~`). Anything else aborts the
/// sequence.
fn scan_csi(chars: &mut Peekable<CharIndices<'_>>) -> CsiOutcome {
    let mut args: Vec<u16> = Vec::new();
    let mut curr: Option<u16> = None;
    let mut private = None;
    let mut intermediate = None;

    for (i, c) in chars.by_ref() {
        match c {
            '!' | '<'..='?' => private = Some(c),
            '0'..='9' => {
                let digit = c as u16 - '0' as u16;
                curr = Some(curr.unwrap_or(0).saturating_mul(10).saturating_add(digit));
            }
            ';' => {
                if let Some(value) = curr.take() {
                    args.push(value);
                }
            }
            ' '..='/' => intermediate = Some(c),
            '@'..='~' => {
                if let Some(value) = curr.take() {
                    args.push(value);
                }
                let mut token = CsiToken::with_args(Command::from_final(c), args);
                token.private = private;
                token.intermediate = intermediate;
                return CsiOutcome::Complete(token);
            }
            _ => {
                return CsiOutcome::Malformed {
                    end: i + c.len_utf8(),
                };
            }
        }
    }

    CsiOutcome::Incomplete
}

fn cursor_command(command: Command, arg: u16) -> Token {
    Token::Csi(CsiToken::with_args(command, vec![arg]))
}

fn flush_text(tokens: &mut Vec<Token>, text: &mut String) {
    if !text.is_empty() {
        tokens.push(Token::Text(std::mem::take(text)));
    }
}
