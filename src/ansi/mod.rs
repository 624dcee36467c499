//! ANSI text codec.
//!
//! Splits ANSI-escaped text into styled segments and writes segments back
//! out as escape sequences. Only SGR (color and attribute) state is kept;
//! this is not a terminal emulator.

pub mod handlers;
mod parser;
mod render;
mod types;

pub use parser::parse;
pub use render::{render, ANSI_RESET};
pub use types::{ColorMode, StyledSegment, TextStyle};
