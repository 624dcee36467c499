//! Indexed color tables.
//!
//! The 16 basic colors use full-intensity primaries for SGR 30-37 and a
//! lighter tint for the bright variants (SGR 90-97). Indices 16-255 follow
//! the xterm layout: a 6x6x6 color cube followed by a 24-step gray ramp.

use super::rgb::Rgb;

const ANSI16: [Rgb; 16] = [
    Rgb::new(0x00, 0x00, 0x00), // black
    Rgb::new(0xff, 0x00, 0x00), // red
    Rgb::new(0x00, 0xff, 0x00), // green
    Rgb::new(0xff, 0xff, 0x00), // yellow
    Rgb::new(0x00, 0x00, 0xff), // blue
    Rgb::new(0xff, 0x00, 0xff), // magenta
    Rgb::new(0x00, 0xff, 0xff), // cyan
    Rgb::new(0xc0, 0xc0, 0xc0), // white
    Rgb::new(0x80, 0x80, 0x80), // bright black
    Rgb::new(0xff, 0x5f, 0x5f), // bright red
    Rgb::new(0x5f, 0xff, 0x5f), // bright green
    Rgb::new(0xff, 0xff, 0x5f), // bright yellow
    Rgb::new(0x5f, 0x5f, 0xff), // bright blue
    Rgb::new(0xff, 0x5f, 0xff), // bright magenta
    Rgb::new(0x5f, 0xff, 0xff), // bright cyan
    Rgb::new(0xff, 0xff, 0xff), // bright white
];

/// Channel levels of the xterm color cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// One of the 16 basic colors. Indices above 15 wrap.
pub fn ansi16(index: u8) -> Rgb {
    ANSI16[usize::from(index % 16)]
}

/// An entry of the xterm 256-color palette.
pub fn xterm256(index: u8) -> Rgb {
    match index {
        0..=15 => ansi16(index),
        16..=231 => {
            let i = index - 16;
            Rgb::new(
                CUBE_LEVELS[usize::from(i / 36)],
                CUBE_LEVELS[usize::from((i / 6) % 6)],
                CUBE_LEVELS[usize::from(i % 6)],
            )
        }
        232..=255 => {
            let v = 8 + 10 * (index - 232);
            Rgb::new(v, v, v)
        }
    }
}

fn distance(a: Rgb, b: Rgb) -> u32 {
    a.channels()
        .iter()
        .zip(b.channels().iter())
        .map(|(&x, &y)| {
            let d = i32::from(x) - i32::from(y);
            (d * d) as u32
        })
        .sum()
}

fn nearest(rgb: Rgb, candidates: impl Iterator<Item = u8>, lookup: fn(u8) -> Rgb) -> u8 {
    let mut best = 0;
    let mut best_distance = u32::MAX;
    for index in candidates {
        let d = distance(rgb, lookup(index));
        // Strict comparison keeps the lowest index on ties
        if d < best_distance {
            best = index;
            best_distance = d;
            if d == 0 {
                break;
            }
        }
    }
    best
}

/// Closest entry of the xterm 256-color palette.
pub fn nearest_256(rgb: Rgb) -> u8 {
    nearest(rgb, 0..=255, xterm256)
}

/// Closest of the 16 basic colors.
pub fn nearest_16(rgb: Rgb) -> u8 {
    nearest(rgb, 0..16, ansi16)
}
