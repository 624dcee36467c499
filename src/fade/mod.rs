//! Segment fading.
//!
//! Blends the colors of every segment of an ANSI string toward a reference
//! background/foreground pair. For each segment the background is faded
//! first and the foreground is then faded toward that new background, so
//! text stays legible against its own faded background.
//!
//! [`fade`] and [`FadeRequest`] are pure: the terminal colors are passed in.
//! [`fade_terminal`] detects them and runs through the shared
//! [`cache::global`] cache.

pub mod cache;
mod error;
mod interpolator;

pub use cache::ColorCache;
pub use error::FadeError;
pub use interpolator::{Interpolator, Linear};

use crate::ansi::{self, ColorMode, StyledSegment};
use crate::color::{hex_to_rgb, ColorError, Rgb};
use crate::terminal::TerminalInfo;

/// Factor used when none is given.
pub const DEFAULT_FACTOR: f64 = 0.5;

/// A configured fade: reference colors, output encoding and strength.
///
/// ```
/// use ansifade::{ColorMode, FadeRequest};
///
/// let faded = FadeRequest::new("#000000", "#ffffff")
///     .color_mode(ColorMode::TrueColor)
///     .factor(0.5)
///     .apply("\x1b[31mRed text\x1b[0m")
///     .unwrap();
/// assert_eq!(faded, "\x1b[38;2;128;0;0mRed text\x1b[0m");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FadeRequest {
    background: String,
    foreground: String,
    color_mode: ColorMode,
    factor: f64,
}

impl FadeRequest {
    /// Fade toward `background`/`foreground` (`#RRGGBB`) in true color at
    /// [`DEFAULT_FACTOR`].
    pub fn new(background: impl Into<String>, foreground: impl Into<String>) -> Self {
        Self {
            background: background.into(),
            foreground: foreground.into(),
            color_mode: ColorMode::TrueColor,
            factor: DEFAULT_FACTOR,
        }
    }

    pub fn color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    /// Weight of the original colors: 0 gives the reference colors, 1 keeps
    /// the input unchanged. Clamped to `[0, 1]`.
    pub fn factor(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn foreground(&self) -> &str {
        &self.foreground
    }

    /// Fade `content`, computing every blend directly.
    pub fn apply(&self, content: &str) -> Result<String, ColorError> {
        self.apply_with(content, &Linear)
    }

    /// Fade `content`, blending through `interpolator`.
    pub fn apply_with(
        &self,
        content: &str,
        interpolator: &dyn Interpolator,
    ) -> Result<String, ColorError> {
        let terminal_bg = hex_to_rgb(&self.background)?;
        let terminal_fg = hex_to_rgb(&self.foreground)?;

        let mut segments = ansi::parse(content);
        fade_segments(
            &mut segments,
            terminal_bg,
            terminal_fg,
            self.color_mode,
            self.factor,
            interpolator,
        );
        Ok(ansi::render(&segments))
    }
}

/// Fade `content` toward the terminal colors `background`/`foreground`.
///
/// Fails with [`ColorError::InvalidFormat`] if either reference color is not
/// `#RRGGBB`; no partial output is produced.
pub fn fade(
    content: &str,
    background: &str,
    foreground: &str,
    color_mode: ColorMode,
    factor: f64,
) -> Result<String, ColorError> {
    FadeRequest::new(background, foreground)
        .color_mode(color_mode)
        .factor(factor)
        .apply(content)
}

/// Rewrite the colors of parsed segments in place.
///
/// Text, offsets and style flags are left alone. A segment without a
/// background never gains one; a segment without a foreground gets the faded
/// terminal foreground.
pub fn fade_segments(
    segments: &mut [StyledSegment],
    terminal_bg: Rgb,
    terminal_fg: Rgb,
    color_mode: ColorMode,
    factor: f64,
    interpolator: &dyn Interpolator,
) {
    for segment in segments.iter_mut() {
        segment.color_mode = color_mode;

        let effective_bg = match &segment.bg {
            Some(bg) if bg.rgb() != terminal_bg => {
                let faded = interpolator.interpolate_rgb(terminal_bg, bg.rgb(), factor);
                let rgb = faded.rgb();
                segment.bg = Some(faded);
                rgb
            }
            _ => terminal_bg,
        };

        let fg = segment.fg.as_ref().map_or(terminal_fg, |fg| fg.rgb());
        segment.fg = Some(interpolator.interpolate_rgb(effective_bg, fg, factor));
    }
}

/// Fade `content` for an already detected terminal.
///
/// Only true-color terminals are faded. Anything else yields
/// [`FadeError::CapabilityUnsupported`] carrying `content` unchanged.
pub fn fade_with_terminal(
    terminal: &TerminalInfo,
    content: &str,
    factor: f64,
) -> Result<String, FadeError> {
    if !terminal.profile.supports_truecolor() {
        tracing::debug!(profile = %terminal.profile, "Terminal lacks true color, not fading");
        return Err(FadeError::CapabilityUnsupported {
            profile: terminal.profile,
            original: content.to_string(),
        });
    }

    let mut segments = ansi::parse(content);
    fade_segments(
        &mut segments,
        terminal.background,
        terminal.foreground,
        ColorMode::TrueColor,
        factor,
        cache::global(),
    );
    Ok(ansi::render(&segments))
}

/// Detect the terminal and fade `content` toward its default colors.
pub fn fade_terminal(content: &str, factor: f64) -> Result<String, FadeError> {
    fade_with_terminal(&TerminalInfo::detect(), content, factor)
}
