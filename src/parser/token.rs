//! Tokens produced by the tokenizer

use serde::{Deserialize, Serialize};

use super::scan::Introducer;
use crate::explain::{Category, TokenPart};

/// Identifier of a token, unique within one parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(pub usize);

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Half-open byte range `[start, end)` into the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One token of the parsed stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    /// Exact input text covered by this token
    pub raw: String,
    pub span: Span,
    pub kind: TokenKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TokenKind {
    /// Literal text between escape sequences
    Text,
    /// A recognized CSI escape sequence
    Escape(EscapeSequence),
}

/// A decoded CSI sequence with its explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapeSequence {
    pub introducer: Introducer,
    pub private_marker: Option<char>,
    /// Final character: an ASCII letter or `~`
    pub command: char,
    pub params: Vec<u32>,
    pub category: Category,
    pub summary: String,
    pub parts: Vec<TokenPart>,
}

impl EscapeSequence {
    /// Whether this is an SGR (`m`) sequence
    pub fn is_sgr(&self) -> bool {
        self.command == 'm'
    }
}

impl Token {
    pub fn is_text(&self) -> bool {
        matches!(self.kind, TokenKind::Text)
    }

    pub fn is_escape(&self) -> bool {
        matches!(self.kind, TokenKind::Escape(_))
    }

    /// The escape payload, if this is an escape token
    pub fn escape(&self) -> Option<&EscapeSequence> {
        match &self.kind {
            TokenKind::Escape(seq) => Some(seq),
            TokenKind::Text => None,
        }
    }

    /// One-line description, `"Literal Text"` for text tokens
    pub fn summary(&self) -> &str {
        match &self.kind {
            TokenKind::Escape(seq) => &seq.summary,
            TokenKind::Text => "Literal Text",
        }
    }
}
