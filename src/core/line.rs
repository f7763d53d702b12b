//! Styled line representation
//!
//! A line is an ordered run-list of styled spans plus a length counter.
//! Writes use terminal-style overwrite semantics: text replaces whatever
//! occupies the target columns, splitting spans at the boundaries, and a
//! write past the end of the line pads the gap with blank spaces.
//!
//! Invariant: the recorded length always equals the sum of the span
//! lengths. Violations indicate a bug in the splice logic and are
//! debug-asserted after every mutation.

use serde::{Deserialize, Serialize};

use super::span::Span;
use super::style::Style;

/// A single buffer line: ordered spans with length bookkeeping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    spans: Vec<Span>,
    len: usize,
}

impl Line {
    /// Create an empty line
    pub fn new() -> Self {
        Self::default()
    }

    /// Length in code points
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Plain text content, styles discarded
    pub fn text(&self) -> String {
        let mut text = String::with_capacity(self.len);
        for span in &self.spans {
            text.push_str(span.text());
        }
        text
    }

    /// Remove all spans
    pub fn clear(&mut self) {
        self.spans.clear();
        self.len = 0;
    }

    /// Write `text` at a 0-based column with overwrite semantics.
    ///
    /// A column beyond the current length pads the gap with blank spaces
    /// in the default style. A column inside an existing span splits it
    /// at the exact boundary; spans wholly covered by the new text are
    /// removed and a partially covered trailing span is truncated.
    pub fn write_at(&mut self, column: usize, text: &str, style: Style) {
        let written = text.chars().count();
        if written == 0 {
            return;
        }

        if column >= self.len {
            if column > self.len {
                self.spans.push(Span::blank(column - self.len));
            }
            self.spans.push(Span::new(text, style));
            self.len = column + written;
            self.assert_length();
            return;
        }

        // Find the span containing the target column, splitting it when
        // the column is not on a span boundary.
        let mut idx = 0;
        let mut start = 0;
        while idx < self.spans.len() && start + self.spans[idx].len() <= column {
            start += self.spans[idx].len();
            idx += 1;
        }
        if start < column {
            let trailing = self.spans[idx].split_off(column - start);
            self.spans.insert(idx + 1, trailing);
            idx += 1;
        }

        self.spans.insert(idx, Span::new(text, style));

        // Remove the overwritten columns after the inserted span
        let mut remaining = written;
        let mut next = idx + 1;
        while remaining > 0 && next < self.spans.len() {
            if self.spans[next].len() <= remaining {
                remaining -= self.spans[next].len();
                self.spans.remove(next);
            } else {
                self.spans[next].drop_leading(remaining);
                remaining = 0;
            }
        }

        // Whatever was not consumed extended the line past its old end
        self.len += remaining;
        self.assert_length();
    }

    fn assert_length(&self) {
        debug_assert_eq!(
            self.len,
            self.spans.iter().map(Span::len).sum::<usize>(),
            "line length does not match span total"
        );
    }
}
