//! Escape sequence tokenizer
//!
//! Splits raw input into literal text and CSI escape sequence tokens.
//! The token list is a total partition of the input: concatenating every
//! token's `raw` in order gives back the input exactly.

mod params;
mod scan;
mod token;

pub use params::{parse_params, ParamCursor};
pub use scan::{next_sequence, sequences, Introducer, SequenceMatch};
pub use token::{EscapeSequence, Span, Token, TokenId, TokenKind};

use crate::explain::{classify, explain};

/// Tokenize `input` into text and escape sequence tokens.
///
/// Empty input yields no tokens; input without any escape sequence yields
/// a single text token. Ids count up from 0 within this call.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut next_id = 0usize;
    let mut id = move || {
        let current = TokenId(next_id);
        next_id += 1;
        current
    };

    let mut last_end = 0;
    for found in sequences(input) {
        if found.start > last_end {
            tokens.push(text_token(id(), input, last_end, found.start));
        }
        tokens.push(escape_token(id(), &found));
        last_end = found.end;
    }

    if last_end < input.len() {
        tokens.push(text_token(id(), input, last_end, input.len()));
    }

    tracing::trace!(
        input_len = input.len(),
        tokens = tokens.len(),
        "tokenized input"
    );
    tokens
}

fn text_token(id: TokenId, input: &str, start: usize, end: usize) -> Token {
    Token {
        id,
        raw: input[start..end].to_string(),
        span: Span::new(start, end),
        kind: TokenKind::Text,
    }
}

fn escape_token(id: TokenId, found: &SequenceMatch<'_>) -> Token {
    let params = parse_params(found.param_text, found.command);
    let classification = classify(found.command, &params, found.private_marker);
    let parts = explain(found.raw, found.command, &params, found.private_marker);

    tracing::trace!(
        raw = %found.raw.escape_debug(),
        command = %found.command,
        category = ?classification.category,
        "escape sequence"
    );

    Token {
        id,
        raw: found.raw.to_string(),
        span: Span::new(found.start, found.end),
        kind: TokenKind::Escape(EscapeSequence {
            introducer: found.introducer,
            private_marker: found.private_marker,
            command: found.command,
            params,
            category: classification.category,
            summary: classification.summary,
            parts,
        }),
    }
}
