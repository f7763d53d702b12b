//! Text attribute state and resolved styles
//!
//! `Attributes` is the mutable state carried by the cursor and driven by
//! SGR commands. `Style` is the resolved form attached to spans: invert
//! and conceal have already been applied to the colors, so a renderer
//! can use it directly.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Cursor-held text attributes, mutated by SGR commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub foreground: Color,
    pub background: Color,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub invert: bool,
    pub conceal: bool,
    pub blink_slow: bool,
    pub blink_fast: bool,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            foreground: Color::DEFAULT_FOREGROUND,
            background: Color::DEFAULT_BACKGROUND,
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
            invert: false,
            conceal: false,
            blink_slow: false,
            blink_fast: false,
        }
    }
}

impl Attributes {
    /// Reset all attributes to the default state (SGR 0)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Resolve to the concrete style applied to written text.
    ///
    /// Foreground and background are swapped when invert is set; the
    /// foreground is forced equal to the background when conceal is set.
    pub fn resolve(&self) -> Style {
        let mut foreground = self.foreground;
        let mut background = self.background;

        if self.invert {
            std::mem::swap(&mut foreground, &mut background);
        }
        if self.conceal {
            foreground = background;
        }

        Style {
            foreground,
            background,
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
            strikethrough: self.strikethrough,
            blink_slow: self.blink_slow,
            blink_fast: self.blink_fast,
        }
    }
}

/// Resolved style carried by a span: concrete colors plus render flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub foreground: Color,
    pub background: Color,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub blink_slow: bool,
    pub blink_fast: bool,
}

impl Default for Style {
    fn default() -> Self {
        Attributes::default().resolve()
    }
}
