//! Rendered preview
//!
//! Walks the token stream the way a terminal would, folding each SGR
//! sequence into the running style and attaching the current style to
//! every text token.

use serde::{Deserialize, Serialize};

use crate::explain::Category;
use crate::parser::{Span, Token, TokenId, TokenKind};
use crate::style::{resolve_with, Palette, StyleDescriptor, TerminalStyleState};

/// A text token with the style in effect where it appears
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledSpan {
    /// The text token this span renders
    pub token: TokenId,
    pub text: String,
    pub span: Span,
    pub state: TerminalStyleState,
    /// Most recent color/style sequence still in effect, cleared by a reset
    pub active_escape: Option<TokenId>,
}

impl StyledSpan {
    pub fn style(&self, palette: &Palette) -> StyleDescriptor {
        resolve_with(&self.state, palette)
    }
}

/// Style every text token by folding the SGR sequences before it.
///
/// Only SGR (`m`) sequences touch the style; cursor, erase and mode
/// sequences are explained but not executed. `active_escape` follows the
/// same rule, so a Style-category mode such as `ESC[?25l` never becomes
/// the active sequence.
pub fn preview(tokens: &[Token]) -> Vec<StyledSpan> {
    let mut state = TerminalStyleState::default();
    let mut active_escape = None;
    let mut spans = Vec::new();

    for token in tokens {
        match &token.kind {
            TokenKind::Escape(seq) if seq.is_sgr() => {
                state = state.fold(&seq.params);
                active_escape = match seq.category {
                    Category::Reset => None,
                    _ => Some(token.id),
                };
            }
            TokenKind::Escape(_) => {}
            TokenKind::Text => spans.push(StyledSpan {
                token: token.id,
                text: token.raw.clone(),
                span: token.span,
                state,
                active_escape,
            }),
        }
    }

    spans
}

/// Render the preview as HTML `<span>` runs inside a `<pre>` block
pub fn render_html(tokens: &[Token], palette: &Palette) -> String {
    let mut html = String::from("<pre class=\"ansi-preview\">");
    for span in preview(tokens) {
        let css = span.style(palette).to_css();
        let text = escape_html(&span.text);
        if css.is_empty() {
            html.push_str(&text);
        } else {
            html.push_str(&format!("<span style=\"{css}\">{text}</span>"));
        }
    }
    html.push_str("</pre>");
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
