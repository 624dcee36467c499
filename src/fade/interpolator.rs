//! Interpolator trait and the direct implementation.

use crate::color::{hex_to_rgb, interpolate_rgb, Color, ColorError, Rgb};

/// Blends a foreground color into a background color.
///
/// The fader only talks to this trait, so a memoizing implementation can be
/// swapped in without touching the algorithm.
pub trait Interpolator: Send + Sync {
    /// Blend two parsed colors. `factor` is clamped to `[0, 1]`.
    fn interpolate_rgb(&self, background: Rgb, foreground: Rgb, factor: f64) -> Color;

    /// Blend two `#RRGGBB` colors.
    fn interpolate(
        &self,
        background: &str,
        foreground: &str,
        factor: f64,
    ) -> Result<Color, ColorError> {
        let background = hex_to_rgb(background)?;
        let foreground = hex_to_rgb(foreground)?;
        Ok(self.interpolate_rgb(background, foreground, factor))
    }
}

/// Computes every blend from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl Interpolator for Linear {
    fn interpolate_rgb(&self, background: Rgb, foreground: Rgb, factor: f64) -> Color {
        Color::from_rgb(interpolate_rgb(background, foreground, factor))
    }
}
