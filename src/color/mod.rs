//! Color math.
//!
//! Pure conversions between `#rrggbb` strings, RGB triples and HSL, plus the
//! weighted linear interpolation used to fade one color into another.
//!
//! - [`rgb`] - `Rgb` and hex parsing/formatting
//! - [`hsl`] - HSL view of an RGB color
//! - [`interpolate`] - channel blending and the `Color` descriptor
//! - [`palette`] - 16 and 256 color tables

mod error;
mod hsl;
mod interpolate;
pub mod palette;
mod rgb;

pub use error::ColorError;
pub use hsl::Hsl;
pub use interpolate::{
    clamp_factor, interpolate, interpolate_channel, interpolate_color, interpolate_rgb, Color,
};
pub use rgb::{hex_to_rgb, rgb_to_hex, Rgb};
