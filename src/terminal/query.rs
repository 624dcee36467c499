//! Terminal default color query.
//!
//! Asks the terminal for its foreground and background colors with
//! OSC 10/11, falling back to `COLORFGBG` and then to fixed defaults.

use std::io::{Read, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::color::{palette, Rgb};

/// Default time to wait for the terminal's OSC reply.
pub const DEFAULT_QUERY_TIMEOUT_MS: u64 = 250;

/// Foreground assumed when nothing else is known.
pub const FALLBACK_FOREGROUND: Rgb = Rgb::new(0xc0, 0xc0, 0xc0);

/// Background assumed when nothing else is known.
pub const FALLBACK_BACKGROUND: Rgb = Rgb::BLACK;

/// Where the default colors came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSource {
    Osc,
    ColorFgBg,
    Fallback,
}

/// Resolve the terminal's `(foreground, background)` colors.
pub fn default_colors(timeout: Duration) -> (Rgb, Rgb, ColorSource) {
    if let Some((fg, bg)) = query_terminal_colors(timeout) {
        return (fg, bg, ColorSource::Osc);
    }

    if let Some((fg, bg)) = std::env::var("COLORFGBG")
        .ok()
        .as_deref()
        .and_then(parse_colorfgbg)
    {
        return (fg, bg, ColorSource::ColorFgBg);
    }

    (FALLBACK_FOREGROUND, FALLBACK_BACKGROUND, ColorSource::Fallback)
}

/// Query the terminal with OSC 10 and OSC 11.
///
/// Returns `None` when stdin or stdout is not a terminal, the terminal does
/// not answer in time, or the reply cannot be parsed.
pub fn query_terminal_colors(timeout: Duration) -> Option<(Rgb, Rgb)> {
    if !atty::is(atty::Stream::Stdout) || !atty::is(atty::Stream::Stdin) {
        tracing::debug!("Not a terminal, skipping OSC query");
        return None;
    }
    query_with_raw_mode(timeout)
}

fn query_with_raw_mode(timeout: Duration) -> Option<(Rgb, Rgb)> {
    use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};

    let was_raw_mode = is_raw_mode_enabled().unwrap_or(false);
    if !was_raw_mode && enable_raw_mode().is_err() {
        tracing::debug!("Failed to enable raw mode for OSC query");
        return None;
    }

    let result = (|| {
        let mut stdout = std::io::stdout();
        write!(stdout, "\x1b]10;?\x07\x1b]11;?\x07").ok()?;
        stdout.flush().ok()?;

        let response = read_with_timeout(timeout)?;
        tracing::debug!(response_len = response.len(), "Received OSC response");

        let fg = parse_osc_color_response(&response, 10);
        let bg = parse_osc_color_response(&response, 11);
        if fg.is_none() || bg.is_none() {
            tracing::debug!(
                fg_parsed = fg.is_some(),
                bg_parsed = bg.is_some(),
                "Failed to parse OSC color response"
            );
        }
        Some((fg?, bg?))
    })();

    if !was_raw_mode {
        let _ = disable_raw_mode();
    }
    result
}

/// Read the OSC replies from stdin, giving up after `timeout`.
///
/// The reader thread is left behind on timeout; it exits on its next read.
fn read_with_timeout(timeout: Duration) -> Option<String> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let mut stdin = std::io::stdin();
        let mut buffer = [0u8; 256];
        let mut response = Vec::new();
        while let Ok(n) = stdin.read(&mut buffer) {
            if n == 0 {
                break;
            }
            response.extend_from_slice(&buffer[..n]);
            let text = String::from_utf8_lossy(&response);
            if parse_osc_color_response(&text, 11).is_some() {
                break;
            }
        }
        let _ = tx.send(String::from_utf8_lossy(&response).into_owned());
    });

    rx.recv_timeout(timeout).ok()
}

/// Extract the color of an OSC `code` reply such as
/// `ESC ] 11 ; rgb:1e1e/1e1e/2e2e BEL`.
pub fn parse_osc_color_response(response: &str, code: u8) -> Option<Rgb> {
    let marker = format!("]{code};");
    let start = response.find(&marker)?;
    let after_code = &response[start + marker.len()..];

    let color_part = after_code
        .strip_prefix("rgb:")
        .or_else(|| after_code.strip_prefix("rgba:"))?;

    // Terminated by BEL or ST (ESC \)
    let end = color_part
        .find(|c: char| c == '\x07' || c == '\x1b')
        .unwrap_or(color_part.len());
    parse_rgb_spec(&color_part[..end])
}

/// Parse an X11 `R/G/B` spec with 1 to 4 hex digits per channel.
fn parse_rgb_spec(spec: &str) -> Option<Rgb> {
    let mut parts = spec.split('/');
    let red = parse_component(parts.next()?)?;
    let green = parse_component(parts.next()?)?;
    let blue = parse_component(parts.next()?)?;
    Some(Rgb::new(red, green, blue))
}

fn parse_component(digits: &str) -> Option<u8> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u16::from_str_radix(digits, 16).ok()?;
    let byte = match digits.len() {
        1 => value * 0x11,
        2 => value,
        3 => value >> 4,
        4 => value >> 8,
        _ => return None,
    };
    u8::try_from(byte).ok()
}

/// Parse `COLORFGBG` (`fg;bg` or `fg;default;bg` palette indices).
pub fn parse_colorfgbg(value: &str) -> Option<(Rgb, Rgb)> {
    let fields: Vec<&str> = value.split(';').collect();
    if fields.len() < 2 {
        return None;
    }
    let fg: u8 = fields.first()?.trim().parse().ok()?;
    let bg: u8 = fields.last()?.trim().parse().ok()?;
    Some((palette::xterm256(fg), palette::xterm256(bg)))
}
