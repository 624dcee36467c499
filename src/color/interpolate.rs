//! Linear RGB interpolation between a background and a foreground color.

use serde::Serialize;

use super::error::ColorError;
use super::hsl::Hsl;
use super::rgb::{hex_to_rgb, Rgb};

/// A color kept in its three representations: hex, RGB and HSL.
///
/// The fields can only be set together, so the three views never drift apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Color {
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
}

impl Color {
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb.to_string(),
            rgb,
            hsl: Hsl::from(rgb),
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        hex_to_rgb(hex).map(Self::from_rgb)
    }

    /// Lower-case `#rrggbb`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    pub fn into_hex(self) -> String {
        self.hex
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

/// Clamp an interpolation factor to `[0, 1]`. NaN counts as 0.
pub fn clamp_factor(factor: f64) -> f64 {
    if factor.is_nan() {
        0.0
    } else {
        factor.clamp(0.0, 1.0)
    }
}

/// Blend a single channel: `round(bg * bg_weight + fg * fg_weight)`.
///
/// Halves round away from zero, so 127.5 becomes 128.
pub fn interpolate_channel(bg: u8, fg: u8, bg_weight: f64, fg_weight: f64) -> u8 {
    let value = f64::from(bg) * bg_weight + f64::from(fg) * fg_weight;
    value.round().clamp(0.0, 255.0) as u8
}

/// Blend two already parsed colors.
pub fn interpolate_rgb(background: Rgb, foreground: Rgb, factor: f64) -> Rgb {
    let fg_weight = clamp_factor(factor);
    let bg_weight = 1.0 - fg_weight;

    Rgb {
        red: interpolate_channel(background.red, foreground.red, bg_weight, fg_weight),
        green: interpolate_channel(background.green, foreground.green, bg_weight, fg_weight),
        blue: interpolate_channel(background.blue, foreground.blue, bg_weight, fg_weight),
    }
}

/// Blend `foreground` into `background`.
///
/// A factor of 0 gives the background, 1 gives the foreground. Out of range
/// factors are clamped, never rejected.
pub fn interpolate_color(
    background: &str,
    foreground: &str,
    factor: f64,
) -> Result<Color, ColorError> {
    let background = hex_to_rgb(background)?;
    let foreground = hex_to_rgb(foreground)?;
    Ok(Color::from_rgb(interpolate_rgb(background, foreground, factor)))
}

/// Blend `foreground` into `background` and return the `#rrggbb` result.
pub fn interpolate(background: &str, foreground: &str, factor: f64) -> Result<String, ColorError> {
    interpolate_color(background, foreground, factor).map(Color::into_hex)
}
