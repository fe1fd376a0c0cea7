//! SGR (Select Graphic Rendition) decoding
//!
//! The one place that interprets an SGR parameter list. The classifier,
//! the breakdown generator and the style fold all walk the output of
//! [`decode`], so they always agree on how many parameters a code
//! consumed and what it means.

use serde::{Deserialize, Serialize};

use crate::parser::ParamCursor;
use crate::style::{Palette, Rgb};

/// Names of the 8 basic colors, in palette order
pub const BASIC_COLOR_NAMES: [&str; 8] = [
    "Black", "Red", "Green", "Yellow", "Blue", "Magenta", "Cyan", "White",
];

/// Which color an SGR code targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    Foreground,
    Background,
}

impl Layer {
    pub fn name(self) -> &'static str {
        match self {
            Layer::Foreground => "Foreground",
            Layer::Background => "Background",
        }
    }
}

/// Submode selected after `38`/`48`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorMode {
    /// `5;n`
    Palette256,
    /// `2;r;g;b`
    TrueColor,
}

/// Outcome of an extended color (`38`/`48`) code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtendedColor {
    Indexed(u8),
    Rgb(Rgb),
    /// The list ended before all components were given
    Incomplete(ColorMode),
    /// A component was above 255
    OutOfRange(ColorMode),
    /// No submode, or a submode other than 2 or 5
    Unspecified,
}

/// Meaning of one SGR code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SgrAttribute {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Inverse,
    Hidden,
    Strikethrough,
    /// 22: neither bold nor dim
    NormalIntensity,
    NotItalic,
    NotUnderlined,
    NotBlinking,
    NotInverse,
    NotHidden,
    NotStrikethrough,
    /// 30-37, 40-47 (index 0-7) and 90-97, 100-107 (index 8-15)
    Basic { layer: Layer, index: u8 },
    /// 39 / 49
    DefaultColor(Layer),
    /// 38 / 48
    Extended { layer: Layer, color: ExtendedColor },
    Unknown(u32),
}

/// One decoded SGR code and the parameters it consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SgrCode {
    /// Index of the first consumed parameter
    pub start: usize,
    /// Number of parameters consumed (at least 1)
    pub len: usize,
    pub attribute: SgrAttribute,
}

/// Explanation of a single parameter within an SGR code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamRole {
    pub description: String,
    pub recognized: bool,
}

/// Decode an SGR parameter list left to right.
pub fn decode(params: &[u32]) -> Vec<SgrCode> {
    let mut cursor = ParamCursor::new(params);
    let mut codes = Vec::with_capacity(params.len());

    loop {
        let start = cursor.position();
        let Some(code) = cursor.next() else { break };
        let attribute = match code {
            0 => SgrAttribute::Reset,
            1 => SgrAttribute::Bold,
            2 => SgrAttribute::Dim,
            3 => SgrAttribute::Italic,
            4 => SgrAttribute::Underline,
            5 => SgrAttribute::Blink,
            7 => SgrAttribute::Inverse,
            8 => SgrAttribute::Hidden,
            9 => SgrAttribute::Strikethrough,
            22 => SgrAttribute::NormalIntensity,
            23 => SgrAttribute::NotItalic,
            24 => SgrAttribute::NotUnderlined,
            25 => SgrAttribute::NotBlinking,
            27 => SgrAttribute::NotInverse,
            28 => SgrAttribute::NotHidden,
            29 => SgrAttribute::NotStrikethrough,
            30..=37 => basic(Layer::Foreground, code - 30),
            40..=47 => basic(Layer::Background, code - 40),
            90..=97 => basic(Layer::Foreground, code - 90 + 8),
            100..=107 => basic(Layer::Background, code - 100 + 8),
            39 => SgrAttribute::DefaultColor(Layer::Foreground),
            49 => SgrAttribute::DefaultColor(Layer::Background),
            38 => extended(Layer::Foreground, &mut cursor),
            48 => extended(Layer::Background, &mut cursor),
            other => {
                tracing::debug!(code = other, "unrecognized SGR code");
                SgrAttribute::Unknown(other)
            }
        };
        codes.push(SgrCode {
            start,
            len: cursor.position() - start,
            attribute,
        });
    }

    codes
}

fn basic(layer: Layer, index: u32) -> SgrAttribute {
    // Callers only pass 0..=15.
    let index = u8::try_from(index).unwrap_or(0);
    SgrAttribute::Basic { layer, index }
}

/// Consume the submode and components following a `38`/`48`.
fn extended(layer: Layer, cursor: &mut ParamCursor<'_>) -> SgrAttribute {
    let color = match cursor.peek(0) {
        Some(5) => {
            cursor.next();
            match *cursor.take(1) {
                [index] => u8::try_from(index)
                    .map(ExtendedColor::Indexed)
                    .unwrap_or(ExtendedColor::OutOfRange(ColorMode::Palette256)),
                _ => ExtendedColor::Incomplete(ColorMode::Palette256),
            }
        }
        Some(2) => {
            cursor.next();
            match *cursor.take(3) {
                [r, g, b] => match (u8::try_from(r), u8::try_from(g), u8::try_from(b)) {
                    (Ok(r), Ok(g), Ok(b)) => ExtendedColor::Rgb(Rgb::new(r, g, b)),
                    _ => ExtendedColor::OutOfRange(ColorMode::TrueColor),
                },
                _ => ExtendedColor::Incomplete(ColorMode::TrueColor),
            }
        }
        _ => ExtendedColor::Unspecified,
    };
    SgrAttribute::Extended { layer, color }
}

/// Display name of a basic palette index (0-15)
pub fn basic_color_name(index: u8) -> String {
    let name = BASIC_COLOR_NAMES[usize::from(index % 8)];
    if index >= 8 {
        format!("Bright {name}")
    } else {
        name.to_string()
    }
}

impl SgrAttribute {
    /// Whether the terminal assigns any meaning to this code
    pub fn is_recognized(&self) -> bool {
        !matches!(self, SgrAttribute::Unknown(_))
    }

    /// Whether this code selects a color
    pub fn is_color(&self) -> bool {
        match self {
            SgrAttribute::Basic { .. } | SgrAttribute::DefaultColor(_) => true,
            SgrAttribute::Extended { color, .. } => !matches!(color, ExtendedColor::Unspecified),
            _ => false,
        }
    }

    /// Human description, as listed in a sequence summary
    pub fn describe(&self) -> String {
        match self {
            SgrAttribute::Reset => "Reset / Normal".to_string(),
            SgrAttribute::Bold => "Bold".to_string(),
            SgrAttribute::Dim => "Dim".to_string(),
            SgrAttribute::Italic => "Italic".to_string(),
            SgrAttribute::Underline => "Underline".to_string(),
            SgrAttribute::Blink => "Blink".to_string(),
            SgrAttribute::Inverse => "Reverse Video".to_string(),
            SgrAttribute::Hidden => "Hidden".to_string(),
            SgrAttribute::Strikethrough => "Strikethrough".to_string(),
            SgrAttribute::NormalIntensity => "Normal Intensity (Not Bold or Dim)".to_string(),
            SgrAttribute::NotItalic => "Not Italic".to_string(),
            SgrAttribute::NotUnderlined => "Not Underlined".to_string(),
            SgrAttribute::NotBlinking => "Not Blinking".to_string(),
            SgrAttribute::NotInverse => "Not Reversed".to_string(),
            SgrAttribute::NotHidden => "Not Hidden".to_string(),
            SgrAttribute::NotStrikethrough => "Not Strikethrough".to_string(),
            SgrAttribute::Basic { layer, index } => {
                format!("{} {}", layer.name(), basic_color_name(*index))
            }
            SgrAttribute::DefaultColor(layer) => format!("Default {} Color", layer.name()),
            SgrAttribute::Extended { layer, color } => {
                let layer = layer.name();
                match color {
                    ExtendedColor::Indexed(index) => {
                        format!("{layer} Color (256-Palette ID: {index})")
                    }
                    ExtendedColor::Rgb(rgb) => {
                        format!("{layer} Color (RGB: {}, {}, {})", rgb.r, rgb.g, rgb.b)
                    }
                    ExtendedColor::Incomplete(ColorMode::Palette256) => {
                        format!("{layer} Color (256-Palette, index missing)")
                    }
                    ExtendedColor::Incomplete(ColorMode::TrueColor) => {
                        format!("{layer} Color (RGB, components missing)")
                    }
                    ExtendedColor::OutOfRange(ColorMode::Palette256) => {
                        format!("{layer} Color (256-Palette, index out of range)")
                    }
                    ExtendedColor::OutOfRange(ColorMode::TrueColor) => {
                        format!("{layer} Color (RGB, component out of range)")
                    }
                    ExtendedColor::Unspecified => format!("{layer} Extended"),
                }
            }
            SgrAttribute::Unknown(code) => {
                format!("Unknown Code ({code}) - Ignored by the terminal")
            }
        }
    }
}

impl SgrCode {
    /// Indices of the parameters this code consumed
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.len
    }

    /// Explain each consumed parameter, one entry per parameter.
    ///
    /// The first entry carries the code's own description; extended colors
    /// add entries for the submode and every component present.
    pub fn roles(&self, params: &[u32]) -> Vec<ParamRole> {
        let consumed = params.get(self.range()).unwrap_or(&[]);
        let mut roles = Vec::with_capacity(self.len);
        roles.push(ParamRole {
            description: self.attribute.describe(),
            recognized: self.attribute.is_recognized(),
        });

        let SgrAttribute::Extended { .. } = self.attribute else {
            return roles;
        };

        let mut rest = consumed.iter().skip(1);
        match rest.next() {
            Some(5) => {
                roles.push(recognized("Color Mode 5: 256-Color Palette".to_string()));
                if let Some(&index) = rest.next() {
                    roles.push(palette_index_role(index));
                }
            }
            Some(2) => {
                roles.push(recognized("Color Mode 2: RGB True Color".to_string()));
                for (channel, &value) in ["Red", "Green", "Blue"].iter().zip(rest) {
                    roles.push(if value <= 255 {
                        recognized(format!("{channel} Component ({value})"))
                    } else {
                        ParamRole {
                            description: format!(
                                "{channel} Component ({value}) - Out of range (0-255)"
                            ),
                            recognized: false,
                        }
                    });
                }
            }
            _ => {}
        }

        roles
    }
}

fn recognized(description: String) -> ParamRole {
    ParamRole {
        description,
        recognized: true,
    }
}

fn palette_index_role(index: u32) -> ParamRole {
    let Ok(index) = u8::try_from(index) else {
        return ParamRole {
            description: format!("Palette Index ({index}) - Out of range (0-255)"),
            recognized: false,
        };
    };
    let description = match index {
        0..=15 => format!("Palette Index ({index}): Base Color {}", basic_color_name(index)),
        16..=231 => format!(
            "Palette Index ({index}): 6x6x6 Color Cube {}",
            Palette::indexed_rgb(index)
        ),
        232..=255 => format!(
            "Palette Index ({index}): Grayscale {}",
            Palette::indexed_rgb(index)
        ),
    };
    recognized(description)
}
