//! Terminal style state
//!
//! The cumulative rendition state produced by folding SGR parameter lists,
//! the way a terminal updates its current attributes.

use serde::{Deserialize, Serialize};

use super::color::ResolvedColor;
use crate::explain::sgr::{self, ExtendedColor, Layer, SgrAttribute};

/// Text attributes and colors in effect at a point in the stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TerminalStyleState {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub hidden: bool,
    pub inverse: bool,
    /// `None` is the terminal default
    pub foreground: Option<ResolvedColor>,
    /// `None` is the terminal default
    pub background: Option<ResolvedColor>,
}

impl TerminalStyleState {
    /// Apply an SGR parameter list, returning the new state.
    ///
    /// Total: unrecognized codes and incomplete extended colors leave the
    /// state untouched. A `0` discards everything accumulated so far,
    /// including earlier codes in the same list.
    #[must_use]
    pub fn fold(self, params: &[u32]) -> Self {
        sgr::decode(params)
            .into_iter()
            .fold(self, |state, code| state.apply(code.attribute))
    }

    /// Apply a single decoded SGR attribute
    #[must_use]
    pub fn apply(mut self, attribute: SgrAttribute) -> Self {
        match attribute {
            SgrAttribute::Reset => return Self::default(),
            SgrAttribute::Bold => self.bold = true,
            SgrAttribute::Dim => self.dim = true,
            SgrAttribute::Italic => self.italic = true,
            SgrAttribute::Underline => self.underline = true,
            SgrAttribute::Inverse => self.inverse = true,
            SgrAttribute::Hidden => self.hidden = true,
            SgrAttribute::Strikethrough => self.strikethrough = true,
            SgrAttribute::NormalIntensity => {
                self.bold = false;
                self.dim = false;
            }
            SgrAttribute::NotItalic => self.italic = false,
            SgrAttribute::NotUnderlined => self.underline = false,
            SgrAttribute::NotInverse => self.inverse = false,
            SgrAttribute::NotHidden => self.hidden = false,
            SgrAttribute::NotStrikethrough => self.strikethrough = false,
            SgrAttribute::Basic { layer, index } => {
                self.set_color(layer, Some(ResolvedColor::Indexed(index)));
            }
            SgrAttribute::DefaultColor(layer) => self.set_color(layer, None),
            SgrAttribute::Extended { layer, color } => match color {
                ExtendedColor::Indexed(index) => {
                    self.set_color(layer, Some(ResolvedColor::Indexed(index)));
                }
                ExtendedColor::Rgb(rgb) => self.set_color(layer, Some(ResolvedColor::Rgb(rgb))),
                ExtendedColor::Incomplete(_)
                | ExtendedColor::OutOfRange(_)
                | ExtendedColor::Unspecified => {}
            },
            // Blink is not part of the rendered state.
            SgrAttribute::Blink | SgrAttribute::NotBlinking | SgrAttribute::Unknown(_) => {}
        }
        self
    }

    fn set_color(&mut self, layer: Layer, color: Option<ResolvedColor>) {
        match layer {
            Layer::Foreground => self.foreground = color,
            Layer::Background => self.background = color,
        }
    }

    /// Whether this is the terminal's default rendition
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Fold an SGR parameter list into `state`
#[must_use]
pub fn fold(state: TerminalStyleState, params: &[u32]) -> TerminalStyleState {
    state.fold(params)
}
