//! Styled text runs
//!
//! A span is a contiguous run of text sharing one resolved style. Lines
//! are ordered sequences of spans; all length bookkeeping is in code
//! points, not bytes.

use serde::{Deserialize, Serialize};

use super::style::Style;

/// A contiguous run of text with one resolved style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    text: String,
    len: usize,
    style: Style,
}

impl Span {
    /// Create a span, computing its length in code points
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Span { text, len, style }
    }

    /// A run of spaces in the default style, used to pad gaps
    pub fn blank(len: usize) -> Self {
        Span {
            text: " ".repeat(len),
            len,
            style: Style::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Length in code points
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Split at a code-point offset, keeping the leading part in `self`
    /// and returning the trailing part with the same style.
    ///
    /// `at` must be within `0..=len`.
    pub fn split_off(&mut self, at: usize) -> Span {
        debug_assert!(at <= self.len, "split offset {} beyond span length {}", at, self.len);

        let byte_at = self
            .text
            .char_indices()
            .nth(at)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());

        let trailing = self.text.split_off(byte_at);
        let trailing_len = self.len - at;
        self.len = at;

        Span {
            text: trailing,
            len: trailing_len,
            style: self.style,
        }
    }

    /// Drop the leading `n` code points, keeping the rest
    pub fn drop_leading(&mut self, n: usize) {
        let trailing = self.split_off(n);
        *self = trailing;
    }
}
