//! ANSI segment types.
//!
//! Contains the data structures produced by the parser:
//! - ColorMode: how colors are re-encoded on output
//! - TextStyle: Text attributes (bold, italic, underline, etc.)
//! - StyledSegment: A run of text sharing one style and color pair

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Encoding used when a segment's colors are written back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Basic 16-color codes (30-37, 90-97)
    #[default]
    Default,
    /// xterm 256-color palette (38;5;n)
    #[serde(rename = "256")]
    Palette256,
    /// 24-bit RGB (38;2;r;g;b)
    TrueColor,
}

impl ColorMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Palette256 => "256",
            Self::TrueColor => "truecolor",
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Non-color SGR attributes of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub reverse: bool,
    pub hidden: bool,
    pub strikethrough: bool,
}

impl TextStyle {
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// A contiguous run of text sharing one style.
///
/// `offset` and `len` count chars of visible text, escape sequences excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSegment {
    pub label: String,
    pub style: TextStyle,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub color_mode: ColorMode,
    pub offset: usize,
    pub len: usize,
}

impl StyledSegment {
    /// Unstyled text with no colors.
    pub fn plain(label: impl Into<String>) -> Self {
        let label = label.into();
        let len = label.chars().count();
        Self {
            label,
            style: TextStyle::default(),
            fg: None,
            bg: None,
            color_mode: ColorMode::Default,
            offset: 0,
            len,
        }
    }

    pub fn with_fg(mut self, fg: Color) -> Self {
        self.fg = Some(fg);
        self
    }

    pub fn with_bg(mut self, bg: Color) -> Self {
        self.bg = Some(bg);
        self
    }

    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }
}
