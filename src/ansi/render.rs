//! ANSI escape code serialization.
//!
//! Converts styled segments back to ANSI-escaped text. Each segment is
//! written as a single SGR sequence, its label, and a reset.

use crate::ansi::types::{ColorMode, StyledSegment, TextStyle};
use crate::color::{palette, Color};

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Serialize `segments` in order.
pub fn render(segments: &[StyledSegment]) -> String {
    let capacity = segments.iter().map(|s| s.label.len() + 32).sum();
    let mut buf = String::with_capacity(capacity);
    for segment in segments {
        segment.render_into(&mut buf);
    }
    buf
}

impl StyledSegment {
    /// Append this segment to `buf`.
    ///
    /// A segment without attributes or colors is written as bare text.
    pub fn render_into(&self, buf: &mut String) {
        let mut codes = String::new();
        style_to_codes(&self.style, &mut codes);
        if let Some(fg) = &self.fg {
            color_to_codes(fg, self.color_mode, Layer::Foreground, &mut codes);
        }
        if let Some(bg) = &self.bg {
            color_to_codes(bg, self.color_mode, Layer::Background, &mut codes);
        }

        if codes.is_empty() {
            buf.push_str(&self.label);
            return;
        }

        buf.push_str("\x1b[");
        buf.push_str(&codes);
        buf.push('m');
        buf.push_str(&self.label);
        buf.push_str(ANSI_RESET);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Foreground,
    Background,
}

fn push_code(codes: &mut String, code: &str) {
    if !codes.is_empty() {
        codes.push(';');
    }
    codes.push_str(code);
}

/// Append SGR parameters for text attributes.
fn style_to_codes(style: &TextStyle, codes: &mut String) {
    let flags = [
        (style.bold, "1"),
        (style.dim, "2"),
        (style.italic, "3"),
        (style.underline, "4"),
        (style.blink, "5"),
        (style.reverse, "7"),
        (style.hidden, "8"),
        (style.strikethrough, "9"),
    ];
    for (set, code) in flags {
        if set {
            push_code(codes, code);
        }
    }
}

/// Append SGR parameters for one color in the requested encoding.
fn color_to_codes(color: &Color, mode: ColorMode, layer: Layer, codes: &mut String) {
    let rgb = color.rgb();
    let code = match (mode, layer) {
        (ColorMode::TrueColor, Layer::Foreground) => {
            format!("38;2;{};{};{}", rgb.red, rgb.green, rgb.blue)
        }
        (ColorMode::TrueColor, Layer::Background) => {
            format!("48;2;{};{};{}", rgb.red, rgb.green, rgb.blue)
        }
        (ColorMode::Palette256, Layer::Foreground) => {
            format!("38;5;{}", palette::nearest_256(rgb))
        }
        (ColorMode::Palette256, Layer::Background) => {
            format!("48;5;{}", palette::nearest_256(rgb))
        }
        (ColorMode::Default, layer) => {
            let index = palette::nearest_16(rgb);
            let base = match (layer, index < 8) {
                (Layer::Foreground, true) => 30,
                (Layer::Foreground, false) => 90 - 8,
                (Layer::Background, true) => 40,
                (Layer::Background, false) => 100 - 8,
            };
            (base + u16::from(index)).to_string()
        }
    };
    push_code(codes, &code);
}
