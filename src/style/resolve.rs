//! Style resolution
//!
//! Turns a [`TerminalStyleState`] into concrete render properties.
//! Inverse video is applied here rather than stored, so clearing it later
//! restores the original colors.

use serde::{Deserialize, Serialize};

use super::color::{Palette, Rgb};
use super::state::TerminalStyleState;

/// Opacity of dim text
pub const DIM_OPACITY: f32 = 0.6;

/// A renderable color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Paint {
    Rgb(Rgb),
    Transparent,
}

impl std::fmt::Display for Paint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Paint::Rgb(rgb) => write!(f, "{rgb}"),
            Paint::Transparent => f.write_str("transparent"),
        }
    }
}

/// Render properties for a run of text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleDescriptor {
    /// `None` means the renderer's default text color
    pub foreground: Option<Paint>,
    /// `None` means the renderer's default background
    pub background: Option<Paint>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub opacity: f32,
    pub visible: bool,
}

impl Default for StyleDescriptor {
    fn default() -> Self {
        resolve(&TerminalStyleState::default())
    }
}

/// Resolve a style state with the default palette
pub fn resolve(state: &TerminalStyleState) -> StyleDescriptor {
    resolve_with(state, &Palette::default())
}

/// Resolve a style state with a given palette
pub fn resolve_with(state: &TerminalStyleState, palette: &Palette) -> StyleDescriptor {
    let fg = state.foreground.map(|c| c.to_rgb(palette));
    let bg = state.background.map(|c| c.to_rgb(palette));

    let (foreground, background) = if state.inverse {
        (
            Some(Paint::Rgb(bg.unwrap_or(palette.inverse_foreground))),
            Some(fg.map_or(Paint::Transparent, Paint::Rgb)),
        )
    } else {
        (fg.map(Paint::Rgb), bg.map(Paint::Rgb))
    };

    StyleDescriptor {
        foreground,
        background,
        bold: state.bold,
        italic: state.italic,
        underline: state.underline,
        strikethrough: state.strikethrough,
        opacity: if state.dim { DIM_OPACITY } else { 1.0 },
        visible: !state.hidden,
    }
}

impl StyleDescriptor {
    /// CSS declarations for this style, e.g. `color: #cd3131; font-weight: bold`
    pub fn to_css(&self) -> String {
        let mut decls = Vec::new();
        if let Some(fg) = self.foreground {
            decls.push(format!("color: {fg}"));
        }
        if let Some(bg) = self.background {
            decls.push(format!("background-color: {bg}"));
        }
        if self.bold {
            decls.push("font-weight: bold".to_string());
        }
        if self.italic {
            decls.push("font-style: italic".to_string());
        }
        let decorations: Vec<&str> = [
            (self.underline, "underline"),
            (self.strikethrough, "line-through"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();
        if !decorations.is_empty() {
            decls.push(format!("text-decoration: {}", decorations.join(" ")));
        }
        if self.opacity < 1.0 {
            decls.push(format!("opacity: {}", self.opacity));
        }
        if !self.visible {
            decls.push("visibility: hidden".to_string());
        }
        decls.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ResolvedColor;

    fn state(params: &[u32]) -> TerminalStyleState {
        TerminalStyleState::default().fold(params)
    }

    #[test]
    fn test_resolve_default() {
        let style = resolve(&TerminalStyleState::default());
        assert_eq!(style.foreground, None);
        assert_eq!(style.background, None);
        assert!(!style.bold);
        assert_eq!(style.opacity, 1.0);
        assert!(style.visible);
    }

    #[test]
    fn test_resolve_basic_red_bold() {
        let style = resolve(&state(&[31, 1]));
        assert_eq!(style.foreground, Some(Paint::Rgb(Rgb::new(0xcd, 0x31, 0x31))));
        assert!(style.bold);
    }

    #[test]
    fn test_resolve_dim_and_hidden() {
        let style = resolve(&state(&[2, 8]));
        assert_eq!(style.opacity, DIM_OPACITY);
        assert!(!style.visible);
    }

    #[test]
    fn test_resolve_true_color_foreground() {
        let style = resolve(&state(&[38, 2, 255, 100, 200]));
        assert_eq!(style.foreground, Some(Paint::Rgb(Rgb::new(255, 100, 200))));
        assert_eq!(style.background, None);
        assert_eq!(style.to_css(), "color: #ff64c8");
    }

    #[test]
    fn test_resolve_inverse_swaps_colors() {
        let style = resolve(&state(&[31, 44, 7]));
        assert_eq!(style.foreground, Some(Paint::Rgb(Palette::indexed_rgb(4))));
        assert_eq!(style.background, Some(Paint::Rgb(Palette::indexed_rgb(1))));
    }

    #[test]
    fn test_resolve_inverse_without_colors() {
        let style = resolve(&state(&[7]));
        assert_eq!(style.foreground, Some(Paint::Rgb(Rgb::new(0xd3, 0xd3, 0xd3))));
        assert_eq!(style.background, Some(Paint::Transparent));
    }

    #[test]
    fn test_inverse_off_restores_colors() {
        let inverted = state(&[31, 7]);
        let restored = inverted.fold(&[27]);
        assert_eq!(restored.foreground, Some(ResolvedColor::Indexed(1)));
        let style = resolve(&restored);
        assert_eq!(style.foreground, Some(Paint::Rgb(Palette::indexed_rgb(1))));
        assert_eq!(style.background, None);
    }

    #[test]
    fn test_resolve_with_custom_palette() {
        let mut palette = Palette::default();
        palette.ansi[2] = Rgb::new(0, 255, 0);
        let style = resolve_with(&state(&[32]), &palette);
        assert_eq!(style.foreground, Some(Paint::Rgb(Rgb::new(0, 255, 0))));
    }

    #[test]
    fn test_to_css() {
        let style = resolve(&state(&[31, 1, 4, 9, 2]));
        assert_eq!(
            style.to_css(),
            "color: #cd3131; font-weight: bold; text-decoration: underline line-through; opacity: 0.6"
        );
        assert_eq!(StyleDescriptor::default().to_css(), "");
        assert_eq!(
            resolve(&state(&[7, 8])).to_css(),
            "color: #d3d3d3; background-color: transparent; visibility: hidden"
        );
    }
}
