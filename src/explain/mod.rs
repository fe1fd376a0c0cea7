//! Classification and breakdown of escape sequences
//!
//! - `classify`: category and one-line summary of a sequence
//! - `breakdown`: ordered, annotated parts of a sequence
//! - `sgr`: the shared SGR decoder both of them (and the style fold) use

mod breakdown;
mod classify;
pub mod sgr;

pub use breakdown::{explain, PartKind, PartStatus, TokenPart};
pub use classify::{classify, command_description, Category, Classification};
pub use sgr::{ColorMode, ExtendedColor, Layer, SgrAttribute, SgrCode};
