//! Color representation
//!
//! Supports:
//! - 16 base ANSI colors (configurable palette)
//! - 256-color palette (0-255)
//! - 24-bit true color (RGB)

use serde::{Deserialize, Serialize};

/// A 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB`
    pub fn from_hex(text: &str) -> Option<Self> {
        let hex = text.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A color selected by SGR, before palette lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolvedColor {
    /// Index into the 256-color palette
    Indexed(u8),
    /// Direct 24-bit color
    Rgb(Rgb),
}

impl ResolvedColor {
    pub fn to_rgb(self, palette: &Palette) -> Rgb {
        match self {
            ResolvedColor::Indexed(index) => palette.indexed(index),
            ResolvedColor::Rgb(rgb) => rgb,
        }
    }
}

/// Default base colors (0-7 normal, 8-15 bright)
pub const DEFAULT_ANSI: [Rgb; 16] = [
    Rgb::new(0x00, 0x00, 0x00), // Black
    Rgb::new(0xcd, 0x31, 0x31), // Red
    Rgb::new(0x0d, 0xbc, 0x79), // Green
    Rgb::new(0xe5, 0xe5, 0x10), // Yellow
    Rgb::new(0x24, 0x72, 0xc8), // Blue
    Rgb::new(0xbc, 0x3f, 0xbc), // Magenta
    Rgb::new(0x11, 0xa8, 0xcd), // Cyan
    Rgb::new(0xe5, 0xe5, 0xe5), // White
    Rgb::new(0x66, 0x66, 0x66), // Bright Black
    Rgb::new(0xf1, 0x4c, 0x4c), // Bright Red
    Rgb::new(0x23, 0xd1, 0x8b), // Bright Green
    Rgb::new(0xf5, 0xf5, 0x43), // Bright Yellow
    Rgb::new(0x3b, 0x8e, 0xea), // Bright Blue
    Rgb::new(0xd6, 0x70, 0xd6), // Bright Magenta
    Rgb::new(0x29, 0xb8, 0xdb), // Bright Cyan
    Rgb::new(0xff, 0xff, 0xff), // Bright White
];

/// Light gray used as the text color of inverted text with no background
pub const DEFAULT_INVERSE_FOREGROUND: Rgb = Rgb::new(0xd3, 0xd3, 0xd3);

/// Colors used to turn a style state into concrete RGB values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// The 16 base colors (0-15)
    pub ansi: [Rgb; 16],
    /// Text color for inverse video when no background was set
    pub inverse_foreground: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ansi: DEFAULT_ANSI,
            inverse_foreground: DEFAULT_INVERSE_FOREGROUND,
        }
    }
}

impl Palette {
    /// Look up a 256-color index using this palette's base colors
    pub fn indexed(&self, index: u8) -> Rgb {
        match index {
            0..=15 => self.ansi[usize::from(index)],
            _ => Self::indexed_rgb(index),
        }
    }

    /// Look up a 256-color index using the default base colors.
    ///
    /// - 0-15: base colors
    /// - 16-231: 6x6x6 cube, each axis step is 51, red outermost
    /// - 232-255: grayscale ramp `(index - 232) * 10 + 8`
    pub fn indexed_rgb(index: u8) -> Rgb {
        match index {
            0..=15 => DEFAULT_ANSI[usize::from(index)],
            16..=231 => {
                let n = index - 16;
                let r = n / 36;
                let g = (n / 6) % 6;
                let b = n % 6;
                Rgb::new(r * 51, g * 51, b * 51)
            }
            232..=255 => {
                let gray = (index - 232) * 10 + 8;
                Rgb::new(gray, gray, gray)
            }
        }
    }
}
