//! Sequence classification
//!
//! Assigns each CSI sequence a category and a one-line summary.

use serde::{Deserialize, Serialize};

use super::sgr::{self, SgrAttribute};

/// Broad kind of a control sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Color,
    Style,
    Reset,
    Movement,
    Erase,
    Unknown,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Color => "color",
            Category::Style => "style",
            Category::Reset => "reset",
            Category::Movement => "movement",
            Category::Erase => "erase",
            Category::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Result of [`classify`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub summary: String,
}

impl Classification {
    fn new(category: Category, summary: impl Into<String>) -> Self {
        Self {
            category,
            summary: summary.into(),
        }
    }
}

/// Classify a CSI sequence by its final character and parameters
pub fn classify(command: char, params: &[u32], private_marker: Option<char>) -> Classification {
    match command {
        '~' => classify_special_key(params),
        'h' | 'l' => classify_mode(command, params, private_marker),
        'A' | 'B' | 'C' | 'D' | 'E' | 'F' | 'G' => {
            let n = param_or_default(params, 0, 1);
            let name = match command {
                'A' => "Cursor Up",
                'B' => "Cursor Down",
                'C' => "Cursor Forward",
                'D' => "Cursor Back",
                'E' => "Cursor Next Line",
                'F' => "Cursor Prev Line",
                _ => "Cursor Column Absolute",
            };
            Classification::new(Category::Movement, format!("{name} ({n})"))
        }
        'H' | 'f' => {
            let row = param_or_default(params, 0, 1);
            let col = param_or_default(params, 1, 1);
            Classification::new(
                Category::Movement,
                format!("Cursor Position (Row: {row}, Col: {col})"),
            )
        }
        'J' => Classification::new(Category::Erase, erase_description(param(params, 0), "Screen")),
        'K' => Classification::new(Category::Erase, erase_description(param(params, 0), "Line")),
        'm' => classify_sgr(params),
        other => Classification::new(Category::Unknown, format!("Unknown Command ({other})")),
    }
}

/// Short description of the final character, shown on the command part
pub fn command_description(command: char, private_marker: Option<char>) -> &'static str {
    let private = private_marker == Some('?');
    match command {
        'm' => "Select Graphic Rendition (SGR). Applies the color/style settings.",
        'A' => "Cursor Up (CUU).",
        'B' => "Cursor Down (CUD).",
        'C' => "Cursor Forward (CUF).",
        'D' => "Cursor Back (CUB).",
        'E' => "Cursor Next Line (CNL).",
        'F' => "Cursor Previous Line (CPL).",
        'G' => "Cursor Horizontal Absolute (CHA).",
        'H' => "Cursor Position (CUP).",
        'f' => "Horizontal and Vertical Position (HVP).",
        'J' => "Erase in Display (ED).",
        'K' => "Erase in Line (EL).",
        'h' if private => "DEC Private Mode Set (DECSET).",
        'l' if private => "DEC Private Mode Reset (DECRST).",
        'h' => "Set Mode (SM).",
        'l' => "Reset Mode (RM).",
        '~' => "Special Key (function key code).",
        _ => "Unknown Command.",
    }
}

fn classify_special_key(params: &[u32]) -> Classification {
    match params.first() {
        Some(1) => Classification::new(Category::Unknown, "Home Key"),
        Some(2) => Classification::new(Category::Unknown, "Insert Key"),
        Some(3) => Classification::new(Category::Unknown, "Delete Key"),
        Some(4) => Classification::new(Category::Unknown, "End Key"),
        Some(5) => Classification::new(Category::Movement, "Page Up"),
        Some(6) => Classification::new(Category::Movement, "Page Down"),
        Some(code) => {
            Classification::new(Category::Unknown, format!("Special Key Code (~{code})"))
        }
        None => Classification::new(Category::Unknown, "Special Key Code (~)"),
    }
}

fn classify_mode(command: char, params: &[u32], private_marker: Option<char>) -> Classification {
    let action = if command == 'h' { "Set" } else { "Reset" };
    let mode = params.first().copied();
    let mode_text = mode.map_or_else(|| "none".to_string(), |m| m.to_string());

    if private_marker != Some('?') {
        return Classification::new(
            Category::Unknown,
            format!("{action} Mode (ANSI: {mode_text})"),
        );
    }

    match mode {
        Some(25) => Classification::new(
            Category::Style,
            format!("{action} Visible Cursor (Show/Hide)"),
        ),
        Some(1049) => Classification::new(
            Category::Movement,
            format!("{action} Alternative Screen Buffer"),
        ),
        Some(2004) => Classification::new(
            Category::Style,
            format!("{action} Bracketed Paste Mode"),
        ),
        _ => Classification::new(
            Category::Unknown,
            format!("{action} Mode (Private: {mode_text})"),
        ),
    }
}

/// SGR: a reset anywhere in the list claims the category, otherwise any
/// color code makes it a color sequence.
fn classify_sgr(params: &[u32]) -> Classification {
    let codes = sgr::decode(params);

    let category = if codes.iter().any(|c| c.attribute == SgrAttribute::Reset) {
        Category::Reset
    } else if codes.iter().any(|c| c.attribute.is_color()) {
        Category::Color
    } else {
        Category::Style
    };

    let summary = codes
        .iter()
        .map(|c| c.attribute.describe())
        .collect::<Vec<_>>()
        .join(", ");

    Classification::new(category, summary)
}

fn erase_description(param: u32, scope: &str) -> String {
    match param {
        0 => format!("Clear from Cursor to End of {scope}"),
        1 => format!("Clear from Start of {scope} to Cursor"),
        2 => format!("Clear Entire {scope}"),
        other => format!("Clear {scope} (Unknown: {other})"),
    }
}

/// Parameter at `index`, 0 when absent
fn param(params: &[u32], index: usize) -> u32 {
    params.get(index).copied().unwrap_or(0)
}

/// Parameter at `index`, with 0 or absent meaning `default`
fn param_or_default(params: &[u32], index: usize, default: u32) -> u32 {
    match params.get(index) {
        Some(&0) | None => default,
        Some(&v) => v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_sgr_color() {
        let c = classify('m', &[31, 1], None);
        assert_eq!(c.category, Category::Color);
        assert_eq!(c.summary, "Foreground Red, Bold");
    }

    #[test]
    fn test_classify_sgr_style_only() {
        let c = classify('m', &[1, 4], None);
        assert_eq!(c.category, Category::Style);
        assert_eq!(c.summary, "Bold, Underline");
    }

    #[test]
    fn test_classify_sgr_reset_wins() {
        assert_eq!(classify('m', &[0], None).category, Category::Reset);
        assert_eq!(classify('m', &[31, 0], None).category, Category::Reset);
        assert_eq!(classify('m', &[0, 31], None).category, Category::Reset);
    }

    #[test]
    fn test_classify_sgr_extended_colors() {
        let c = classify('m', &[38, 5, 82], None);
        assert_eq!(c.category, Category::Color);
        assert!(c.summary.contains("256"));

        let c = classify('m', &[48, 2, 1, 2, 3], None);
        assert_eq!(c.summary, "Background Color (RGB: 1, 2, 3)");
    }

    #[test]
    fn test_classify_sgr_extended_without_mode_is_style() {
        let c = classify('m', &[38], None);
        assert_eq!(c.category, Category::Style);
        assert_eq!(c.summary, "Foreground Extended");
    }

    #[test]
    fn test_classify_sgr_unknown_code() {
        let c = classify('m', &[999], None);
        assert_eq!(c.category, Category::Style);
        assert_eq!(c.summary, "Unknown Code (999) - Ignored by the terminal");
    }

    #[test]
    fn test_classify_cursor_movement() {
        assert_eq!(classify('A', &[], None).summary, "Cursor Up (1)");
        assert_eq!(classify('C', &[5], None).summary, "Cursor Forward (5)");
        assert_eq!(classify('G', &[0], None).summary, "Cursor Column Absolute (1)");
        assert_eq!(classify('B', &[2], None).category, Category::Movement);
    }

    #[test]
    fn test_classify_cursor_position() {
        let c = classify('H', &[10, 5], None);
        assert_eq!(c.category, Category::Movement);
        assert_eq!(c.summary, "Cursor Position (Row: 10, Col: 5)");
        assert_eq!(
            classify('f', &[], None).summary,
            "Cursor Position (Row: 1, Col: 1)"
        );
    }

    #[test]
    fn test_classify_erase() {
        assert_eq!(
            classify('J', &[], None).summary,
            "Clear from Cursor to End of Screen"
        );
        assert_eq!(classify('J', &[2], None).summary, "Clear Entire Screen");
        assert_eq!(
            classify('K', &[1], None).summary,
            "Clear from Start of Line to Cursor"
        );
        assert_eq!(classify('K', &[7], None).category, Category::Erase);
    }

    #[test]
    fn test_classify_private_modes() {
        let c = classify('l', &[25], Some('?'));
        assert_eq!(c.category, Category::Style);
        assert_eq!(c.summary, "Reset Visible Cursor (Show/Hide)");

        let c = classify('h', &[1049], Some('?'));
        assert_eq!(c.category, Category::Movement);

        let c = classify('h', &[2004], Some('?'));
        assert_eq!(c.summary, "Set Bracketed Paste Mode");

        let c = classify('h', &[1], Some('?'));
        assert_eq!(c.category, Category::Unknown);
        assert_eq!(c.summary, "Set Mode (Private: 1)");
    }

    #[test]
    fn test_classify_ansi_mode_without_marker() {
        let c = classify('h', &[4], None);
        assert_eq!(c.category, Category::Unknown);
        assert_eq!(c.summary, "Set Mode (ANSI: 4)");
    }

    #[test]
    fn test_classify_special_keys() {
        assert_eq!(classify('~', &[1], None).summary, "Home Key");
        assert_eq!(classify('~', &[3], None).category, Category::Unknown);
        assert_eq!(classify('~', &[5], None).category, Category::Movement);
        assert_eq!(classify('~', &[6], None).summary, "Page Down");
        assert_eq!(classify('~', &[15], None).summary, "Special Key Code (~15)");
    }

    #[test]
    fn test_classify_unknown_command() {
        let c = classify('s', &[], None);
        assert_eq!(c.category, Category::Unknown);
        assert_eq!(c.summary, "Unknown Command (s)");
    }
}
