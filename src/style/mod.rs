//! Terminal style state machine
//!
//! - `state`: folds SGR parameter lists into a cumulative style state
//! - `resolve`: turns a state into render properties
//! - `color`: RGB values, the 256-color palette

mod color;
mod resolve;
mod state;

pub use color::{Palette, ResolvedColor, Rgb, DEFAULT_ANSI, DEFAULT_INVERSE_FOREGROUND};
pub use resolve::{resolve, resolve_with, Paint, StyleDescriptor, DIM_OPACITY};
pub use state::{fold, TerminalStyleState};
