//! Escape sequence scanner
//!
//! Finds CSI sequences written either with the real ESC control character
//! or with one of the textual escape spellings people paste from source
//! code and logs (`\x1b`, `\e`, `\u001b`, `\033`).
//!
//! Grammar: `introducer '[' '?'? [0-9;]* final` where `final` is an ASCII
//! letter or `~`. Anything else is left to the surrounding text.
//!
//! The scanner keeps no state between calls. Callers pass the offset to
//! resume from and get back the match, whose `end` is the next offset.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Compiled once; `Regex` is immutable and safe to share between threads.
static CSI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\\x1b|\\e|\\u001b|\\033|\x1b)\[(\?)?([0-9;]*)([a-zA-Z~])")
        .expect("CSI pattern is a valid regex")
});

/// How the escape character was written in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Introducer {
    /// `\x1b`
    HexLiteral,
    /// `\e`
    ShortLiteral,
    /// `\u001b`
    UnicodeLiteral,
    /// `\033`
    OctalLiteral,
    /// The ESC control character itself (0x1B)
    ControlChar,
}

impl Introducer {
    /// Recognize an introducer spelling
    pub fn from_text(text: &str) -> Option<Self> {
        match text {
            "\\x1b" => Some(Self::HexLiteral),
            "\\e" => Some(Self::ShortLiteral),
            "\\u001b" => Some(Self::UnicodeLiteral),
            "\\033" => Some(Self::OctalLiteral),
            "\x1b" => Some(Self::ControlChar),
            _ => None,
        }
    }

    /// Short name of the spelling, used in explanations
    pub fn spelling(self) -> &'static str {
        match self {
            Self::HexLiteral => "hex escape \\x1b",
            Self::ShortLiteral => "shorthand escape \\e",
            Self::UnicodeLiteral => "unicode escape \\u001b",
            Self::OctalLiteral => "octal escape \\033",
            Self::ControlChar => "raw ESC control character",
        }
    }
}

/// A CSI sequence located in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceMatch<'a> {
    /// Byte offset of the first byte of the introducer
    pub start: usize,
    /// Byte offset one past the final character; resume scanning here
    pub end: usize,
    pub introducer: Introducer,
    pub private_marker: Option<char>,
    /// Raw parameter text between the markers and the final character
    pub param_text: &'a str,
    pub command: char,
    /// The whole matched text
    pub raw: &'a str,
}

/// Find the first CSI sequence starting at or after byte offset `from`.
///
/// `from` must lie on a char boundary; offsets returned by previous calls
/// always do.
pub fn next_sequence(input: &str, from: usize) -> Option<SequenceMatch<'_>> {
    if from > input.len() {
        return None;
    }
    let caps = CSI_PATTERN.captures_at(input, from)?;
    from_captures(&caps)
}

/// Iterate every CSI sequence in `input`, left to right, non-overlapping.
pub fn sequences(input: &str) -> impl Iterator<Item = SequenceMatch<'_>> + '_ {
    let mut offset = 0;
    std::iter::from_fn(move || {
        let found = next_sequence(input, offset)?;
        offset = found.end;
        Some(found)
    })
}

fn from_captures<'a>(caps: &Captures<'a>) -> Option<SequenceMatch<'a>> {
    let whole = caps.get(0)?;
    let introducer = Introducer::from_text(caps.get(1)?.as_str())?;
    let private_marker = caps.get(2).and_then(|m| m.as_str().chars().next());
    let param_text = caps.get(3).map_or("", |m| m.as_str());
    let command = caps.get(4)?.as_str().chars().next()?;

    Some(SequenceMatch {
        start: whole.start(),
        end: whole.end(),
        introducer,
        private_marker,
        param_text,
        command,
        raw: whole.as_str(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_control_char() {
        let found = next_sequence("ab\x1b[31mcd", 0).unwrap();
        assert_eq!(found.start, 2);
        assert_eq!(found.end, 7);
        assert_eq!(found.introducer, Introducer::ControlChar);
        assert_eq!(found.param_text, "31");
        assert_eq!(found.command, 'm');
        assert_eq!(found.raw, "\x1b[31m");
    }

    #[test]
    fn test_scan_textual_spellings() {
        let cases = [
            (r"\x1b[1m", Introducer::HexLiteral),
            (r"\e[1m", Introducer::ShortLiteral),
            (r"\u001b[1m", Introducer::UnicodeLiteral),
            (r"\033[1m", Introducer::OctalLiteral),
        ];
        for (input, expected) in cases {
            let found = next_sequence(input, 0).unwrap();
            assert_eq!(found.introducer, expected, "input {input}");
            assert_eq!(found.raw, input);
        }
    }

    #[test]
    fn test_scan_private_marker() {
        let found = next_sequence("\x1b[?25l", 0).unwrap();
        assert_eq!(found.private_marker, Some('?'));
        assert_eq!(found.param_text, "25");
        assert_eq!(found.command, 'l');
    }

    #[test]
    fn test_scan_tilde_final() {
        let found = next_sequence(r"\e[3~", 0).unwrap();
        assert_eq!(found.command, '~');
    }

    #[test]
    fn test_scan_unrecognized_final_is_not_matched() {
        assert!(next_sequence("\x1b[31@", 0).is_none());
        assert!(next_sequence("\x1b]0;title\x07", 0).is_none());
        assert!(next_sequence(r"\X1B[31m", 0).is_none());
    }

    #[test]
    fn test_scan_resumes_from_offset() {
        let input = "\x1b[1mA\x1b[0m";
        let first = next_sequence(input, 0).unwrap();
        let second = next_sequence(input, first.end).unwrap();
        assert_eq!(second.start, 5);
        assert!(next_sequence(input, second.end).is_none());
        assert!(next_sequence(input, input.len() + 1).is_none());
    }

    #[test]
    fn test_sequences_iterator() {
        let found: Vec<_> = sequences("\x1b[1m\x1b[2J text \\e[H").collect();
        assert_eq!(found.len(), 3);
        assert_eq!(found[1].command, 'J');
        assert_eq!(found[2].introducer, Introducer::ShortLiteral);
    }
}
