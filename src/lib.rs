//! ANSI Lens
//!
//! Decodes terminal control sequences embedded in text into an inspectable
//! model: typed tokens with human-readable explanations, plus the style
//! state needed to render a preview.
//!
//! - `parser`: tokenizer splitting input into text and CSI sequences
//! - `explain`: classification and per-part breakdown of sequences
//! - `style`: SGR style state machine and style resolution
//! - `preview`: styled text runs for rendering
//!
//! Escape sequences may be written with the real ESC character or with the
//! textual spellings `\x1b`, `\e`, `\u001b` and `\033`.
//!
//! ```
//! use ansi_lens::{tokenize, Category};
//!
//! let tokens = tokenize("Basic: \x1b[31;1mRed Bold \x1b[0m");
//! let seq = tokens[1].escape().unwrap();
//! assert_eq!(seq.params, vec![31, 1]);
//! assert_eq!(seq.category, Category::Color);
//! ```

pub mod config;
pub mod error;
pub mod explain;
pub mod parser;
pub mod preview;
pub mod style;

pub use error::{Error, Result};
pub use explain::{classify, explain, Category, Classification, PartKind, PartStatus, TokenPart};
pub use parser::{tokenize, EscapeSequence, Span, Token, TokenId, TokenKind};
pub use preview::{preview, render_html, StyledSpan};
pub use style::{fold, resolve, resolve_with, StyleDescriptor, TerminalStyleState};
