//! ansifade - fade ANSI-colored text toward the terminal's colors.
//!
//! Text is split into styled segments, each segment's background is blended
//! toward the reference background, its foreground is blended toward that
//! new background, and the segments are written back out as ANSI text.
//!
//! ```
//! let faded = ansifade::fade(
//!     "\x1b[31mRed text\x1b[0m",
//!     "#000000",
//!     "#ffffff",
//!     ansifade::ColorMode::TrueColor,
//!     0.5,
//! )
//! .unwrap();
//! assert_eq!(faded, "\x1b[38;2;128;0;0mRed text\x1b[0m");
//! ```

pub mod ansi;
pub mod cli;
pub mod color;
pub mod config;
pub mod fade;
pub mod terminal;

pub use ansi::{ColorMode, StyledSegment, TextStyle};
pub use color::{interpolate, Color, ColorError, Rgb};
pub use config::Config;
pub use fade::{
    fade, fade_terminal, fade_with_terminal, ColorCache, FadeError, FadeRequest, Interpolator,
};
pub use terminal::{ColorProfile, TerminalInfo};
