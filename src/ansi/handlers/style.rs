//! SGR (Select Graphic Rendition) handler.
//!
//! Handles CSI m sequence for text styling:
//! - Reset (0, or no parameters)
//! - Bold, dim, italic, underline, blink, reverse, hidden, strikethrough (1-9)
//! - Attribute resets (21-29)
//! - Standard foreground/background colors (30-37, 40-47)
//! - Extended colors - 256-color mode (38;5;n, 48;5;n)
//! - Extended colors - RGB mode (38;2;r;g;b, 48;2;r;g;b), including the
//!   colon sub-parameter forms
//! - Default colors (39, 49)
//! - Bright foreground/background colors (90-97, 100-107)

use crate::ansi::types::{ColorMode, TextStyle};
use crate::color::{palette, Color, Rgb};

/// The current drawing state while parsing: attributes plus colors.
#[derive(Debug, Clone, Default)]
pub struct Pen {
    pub style: TextStyle,
    pub fg: Option<(Color, ColorMode)>,
    pub bg: Option<(Color, ColorMode)>,
}

impl Pen {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Highest fidelity encoding used by the pen's colors.
    pub fn color_mode(&self) -> ColorMode {
        [&self.fg, &self.bg]
            .into_iter()
            .flatten()
            .map(|(_, mode)| *mode)
            .max()
            .unwrap_or_default()
    }

    /// Apply one SGR sequence. Each entry of `params` is a parameter with
    /// its colon-separated sub-parameters.
    pub fn apply(&mut self, params: &[&[u16]]) {
        if params.is_empty() {
            self.reset();
            return;
        }

        let mut i = 0;
        while i < params.len() {
            let param = params[i];
            let code = param.first().copied().unwrap_or(0);
            match code {
                0 => self.reset(),
                1 => self.style.bold = true,
                2 => self.style.dim = true,
                3 => self.style.italic = true,
                4 => self.style.underline = true,
                5 | 6 => self.style.blink = true,
                7 => self.style.reverse = true,
                8 => self.style.hidden = true,
                9 => self.style.strikethrough = true,
                21 => self.style.underline = true,
                22 => {
                    self.style.bold = false;
                    self.style.dim = false;
                }
                23 => self.style.italic = false,
                24 => self.style.underline = false,
                25 => self.style.blink = false,
                27 => self.style.reverse = false,
                28 => self.style.hidden = false,
                29 => self.style.strikethrough = false,
                30..=37 => self.fg = Some(basic(code - 30)),
                39 => self.fg = None,
                40..=47 => self.bg = Some(basic(code - 40)),
                49 => self.bg = None,
                90..=97 => self.fg = Some(basic(code - 90 + 8)),
                100..=107 => self.bg = Some(basic(code - 100 + 8)),
                38 | 48 => {
                    let (color, consumed) = if param.len() > 1 {
                        (extended_colon(&param[1..]), 0)
                    } else {
                        extended_semicolon(&params[i + 1..])
                    };
                    if let Some(color) = color {
                        if code == 38 {
                            self.fg = Some(color);
                        } else {
                            self.bg = Some(color);
                        }
                    }
                    i += consumed;
                }
                _ => {
                    tracing::debug!(code, "Ignoring unsupported SGR parameter");
                }
            }
            i += 1;
        }
    }
}

fn basic(index: u16) -> (Color, ColorMode) {
    // Callers only pass 0..16
    let rgb = palette::ansi16(index as u8);
    (Color::from_rgb(rgb), ColorMode::Default)
}

fn indexed(value: u16) -> Option<(Color, ColorMode)> {
    let index = u8::try_from(value).ok()?;
    Some((
        Color::from_rgb(palette::xterm256(index)),
        ColorMode::Palette256,
    ))
}

fn rgb(r: u16, g: u16, b: u16) -> Option<(Color, ColorMode)> {
    let rgb = Rgb::new(
        u8::try_from(r).ok()?,
        u8::try_from(g).ok()?,
        u8::try_from(b).ok()?,
    );
    Some((Color::from_rgb(rgb), ColorMode::TrueColor))
}

/// `38:5:n` / `38:2:r:g:b` / `38:2:cs:r:g:b` (sub-parameters after the 38).
fn extended_colon(sub: &[u16]) -> Option<(Color, ColorMode)> {
    match sub {
        [5, n, ..] => indexed(*n),
        [2, _colorspace, r, g, b, ..] => rgb(*r, *g, *b),
        [2, r, g, b] => rgb(*r, *g, *b),
        _ => None,
    }
}

/// `38;5;n` / `38;2;r;g;b`. Returns how many following parameters were used.
fn extended_semicolon(rest: &[&[u16]]) -> (Option<(Color, ColorMode)>, usize) {
    let value = |i: usize| rest.get(i).and_then(|p| p.first().copied());
    match value(0) {
        Some(5) => match value(1) {
            Some(n) => (indexed(n), 2),
            None => (None, 1),
        },
        Some(2) => match (value(1), value(2), value(3)) {
            (Some(r), Some(g), Some(b)) => (rgb(r, g, b), 4),
            _ => (None, rest.len()),
        },
        Some(_) => (None, 1),
        None => (None, 0),
    }
}
