//! Terminal capability detection.
//!
//! Works out how many colors the attached terminal supports and which
//! default foreground/background colors it draws with. This is the only
//! part of the crate that touches the environment; everything else takes
//! a [`TerminalInfo`] as plain data.

mod profile;
mod query;

use std::time::Duration;

pub use profile::{profile_from_env, ColorProfile};
pub use query::{
    default_colors, parse_colorfgbg, parse_osc_color_response, query_terminal_colors,
    ColorSource, DEFAULT_QUERY_TIMEOUT_MS, FALLBACK_BACKGROUND, FALLBACK_FOREGROUND,
};

use crate::color::Rgb;
use crate::config::TerminalConfig;

/// What the fader needs to know about the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalInfo {
    pub profile: ColorProfile,
    pub background: Rgb,
    pub foreground: Rgb,
}

impl TerminalInfo {
    pub fn new(profile: ColorProfile, background: Rgb, foreground: Rgb) -> Self {
        Self {
            profile,
            background,
            foreground,
        }
    }

    /// Detect the attached terminal with default settings.
    pub fn detect() -> Self {
        Self::detect_with(&TerminalConfig::default())
    }

    /// Detect the attached terminal.
    pub fn detect_with(config: &TerminalConfig) -> Self {
        let profile = if config.force_truecolor {
            ColorProfile::TrueColor
        } else {
            profile_from_env(|name| std::env::var(name).ok(), atty::is(atty::Stream::Stdout))
        };

        let timeout = Duration::from_millis(config.query_timeout_ms);
        let (foreground, background, source) = default_colors(timeout);
        tracing::debug!(
            %profile,
            %background,
            %foreground,
            ?source,
            "Detected terminal"
        );

        Self {
            profile,
            background,
            foreground,
        }
    }
}
