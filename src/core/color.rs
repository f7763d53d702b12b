//! Terminal color representation
//!
//! Supports:
//! - 256-color indexed palette (standard 8, bright 8, 6x6x6 cube, grayscale ramp)
//! - 24-bit true color (RGB)
//!
//! Indexed and RGB colors compare equal when they resolve to the same
//! concrete value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by color resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("palette index {0} is out of range (0-255)")]
    InvalidColorIndex(u16),

    #[error("color component {0} is out of range (0-255)")]
    InvalidColorComponent(u16),
}

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Build an RGB color from unvalidated numeric components, as they
    /// arrive in an SGR `38;2;r;g;b` directive.
    pub fn from_components(r: u16, g: u16, b: u16) -> Result<Self, ColorError> {
        for component in [r, g, b] {
            if component > 255 {
                return Err(ColorError::InvalidColorComponent(component));
            }
        }
        Ok(Rgb::new(r as u8, g as u8, b as u8))
    }
}

/// A terminal color: a palette index or an explicit RGB value
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Color {
    /// 256-color palette index (0-255)
    Indexed(u8),
    /// 24-bit RGB color
    Rgb(Rgb),
}

impl Color {
    /// Default foreground (palette white)
    pub const DEFAULT_FOREGROUND: Color = Color::Indexed(7);
    /// Default background (palette black)
    pub const DEFAULT_BACKGROUND: Color = Color::Indexed(0);

    /// Resolve to a concrete RGB value through the palette
    pub fn rgb(self) -> Rgb {
        match self {
            Color::Indexed(index) => PALETTE[index as usize],
            Color::Rgb(rgb) => rgb,
        }
    }
}

/// Equality is by resolved value, not representation: `Indexed(1)` and
/// the RGB triple it maps to are the same color.
impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.rgb() == other.rgb()
    }
}

impl Eq for Color {}

/// The fixed 256-color palette.
///
/// Indices 0-7 standard colors, 8-15 bright variants, 16-231 a 6x6x6
/// cube over levels {0, 95, 135, 175, 215, 255}, 232-255 a 24-step
/// grayscale ramp from 8 to 238.
pub static PALETTE: [Rgb; 256] = build_palette();

const fn build_palette() -> [Rgb; 256] {
    let mut palette = [Rgb::new(0, 0, 0); 256];

    // Standard colors (0-7)
    palette[0] = Rgb::new(0, 0, 0); // Black
    palette[1] = Rgb::new(187, 0, 0); // Red
    palette[2] = Rgb::new(0, 187, 0); // Green
    palette[3] = Rgb::new(187, 187, 0); // Yellow
    palette[4] = Rgb::new(0, 0, 187); // Blue
    palette[5] = Rgb::new(187, 0, 187); // Magenta
    palette[6] = Rgb::new(0, 187, 187); // Cyan
    palette[7] = Rgb::new(255, 255, 255); // White

    // Bright colors (8-15)
    palette[8] = Rgb::new(85, 85, 85); // Bright Black
    palette[9] = Rgb::new(255, 85, 85); // Bright Red
    palette[10] = Rgb::new(0, 255, 0); // Bright Green
    palette[11] = Rgb::new(255, 255, 85); // Bright Yellow
    palette[12] = Rgb::new(85, 85, 255); // Bright Blue
    palette[13] = Rgb::new(255, 85, 255); // Bright Magenta
    palette[14] = Rgb::new(85, 255, 255); // Bright Cyan
    palette[15] = Rgb::new(255, 255, 255); // Bright White

    // 6x6x6 color cube (16-231), index = 16 + 36r + 6g + b
    let levels = [0u8, 95, 135, 175, 215, 255];
    let mut r = 0;
    while r < 6 {
        let mut g = 0;
        while g < 6 {
            let mut b = 0;
            while b < 6 {
                palette[16 + 36 * r + 6 * g + b] = Rgb::new(levels[r], levels[g], levels[b]);
                b += 1;
            }
            g += 1;
        }
        r += 1;
    }

    // Grayscale ramp (232-255)
    let mut i = 0;
    while i < 24 {
        let gray = (8 + i * 10) as u8;
        palette[232 + i] = Rgb::new(gray, gray, gray);
        i += 1;
    }

    palette
}

/// Resolve a numeric palette index to its RGB value.
///
/// Indices outside 0-255 are rejected; callers decide whether that means
/// keeping the previous color (SGR) or reporting the error.
pub fn resolve(index: u16) -> Result<Rgb, ColorError> {
    if index > 255 {
        return Err(ColorError::InvalidColorIndex(index));
    }
    Ok(PALETTE[index as usize])
}
