//! Color profile detection from environment variables.

use std::fmt;

use serde::Serialize;

use crate::ansi::ColorMode;

/// How many colors the terminal can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorProfile {
    /// No color
    Ascii,
    /// 16 colors
    Ansi,
    /// xterm 256 colors
    Ansi256,
    /// 24-bit RGB
    TrueColor,
}

impl ColorProfile {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Ansi => "ansi",
            Self::Ansi256 => "ansi256",
            Self::TrueColor => "truecolor",
        }
    }

    pub fn supports_truecolor(&self) -> bool {
        *self == Self::TrueColor
    }

    /// Whether colors written in `mode` will show up correctly.
    pub fn supports(&self, mode: ColorMode) -> bool {
        *self != Self::Ascii && self.color_mode() >= mode
    }

    /// Encoding to use when writing colors for this profile.
    pub fn color_mode(&self) -> ColorMode {
        match self {
            Self::TrueColor => ColorMode::TrueColor,
            Self::Ansi256 => ColorMode::Palette256,
            Self::Ansi | Self::Ascii => ColorMode::Default,
        }
    }
}

impl fmt::Display for ColorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `TERM` values of terminals known to handle 24-bit color.
const TRUECOLOR_TERMS: [&str; 7] = [
    "alacritty",
    "contour",
    "rio",
    "wezterm",
    "xterm-ghostty",
    "xterm-kitty",
    "foot",
];

/// Work out the color profile from environment variables.
///
/// `lookup` returns the value of a variable (so tests can pass a fake
/// environment); `is_tty` tells whether output goes to a terminal.
pub fn profile_from_env(lookup: impl Fn(&str) -> Option<String>, is_tty: bool) -> ColorProfile {
    let is_set = |name: &str| lookup(name).is_some_and(|v| !v.is_empty());

    if is_set("NO_COLOR") {
        return ColorProfile::Ascii;
    }

    let forced = lookup("CLICOLOR_FORCE").is_some_and(|v| !v.is_empty() && v != "0");
    if !is_tty && !forced {
        return ColorProfile::Ascii;
    }

    let detected = detect_from_term(&lookup);
    if forced && detected == ColorProfile::Ascii {
        ColorProfile::Ansi
    } else {
        detected
    }
}

fn detect_from_term(lookup: &impl Fn(&str) -> Option<String>) -> ColorProfile {
    let term = lookup("TERM").unwrap_or_default().to_lowercase();
    let colorterm = lookup("COLORTERM").unwrap_or_default().to_lowercase();

    match colorterm.as_str() {
        "truecolor" | "24bit" => {
            // GNU screen cannot pass 24-bit color through unless it is tmux
            let in_tmux = lookup("TERM_PROGRAM").as_deref() == Some("tmux");
            if term.starts_with("screen") && !in_tmux {
                return ColorProfile::Ansi256;
            }
            return ColorProfile::TrueColor;
        }
        "yes" | "true" => return ColorProfile::Ansi256,
        _ => {}
    }

    if TRUECOLOR_TERMS.contains(&term.as_str()) {
        return ColorProfile::TrueColor;
    }
    if term.contains("256color") {
        return ColorProfile::Ansi256;
    }
    if term == "linux" || term == "xterm" || term.contains("color") || term.contains("ansi") {
        return ColorProfile::Ansi;
    }
    ColorProfile::Ascii
}
