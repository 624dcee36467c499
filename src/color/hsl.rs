//! HSL view of an RGB color.

use serde::Serialize;

use super::rgb::Rgb;

/// Hue in degrees `[0, 360)`, saturation and lightness in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.channels().map(|c| f64::from(c) / 255.0);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;
        let delta = max - min;

        if delta == 0.0 {
            return Self {
                hue: 0.0,
                saturation: 0.0,
                lightness: lightness * 100.0,
            };
        }

        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        // Sector of the hue wheel, in units of 60 degrees
        let sector = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Self {
            hue: (sector * 60.0) % 360.0,
            saturation: saturation * 100.0,
            lightness: lightness * 100.0,
        }
    }
}
