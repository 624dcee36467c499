//! Integration tests for the fade library API

use std::sync::Arc;
use std::thread;

use ansifade::ansi;
use ansifade::color::{hex_to_rgb, rgb_to_hex};
use ansifade::fade::Linear;
use ansifade::{
    fade, fade_with_terminal, interpolate, ColorCache, ColorError, ColorMode, ColorProfile,
    FadeError, FadeRequest, Rgb, TerminalInfo,
};

use super::helpers::load_fixture;

const BLACK: &str = "#000000";
const WHITE: &str = "#ffffff";

fn labels(content: &str) -> Vec<String> {
    ansi::parse(content).into_iter().map(|s| s.label).collect()
}

// ============================================================================
// Color Math
// ============================================================================

#[test]
fn hex_round_trips() {
    for hex in ["#000000", "#ffffff", "#1e1e2e", "#cdd6f4", "#7f007f"] {
        assert_eq!(rgb_to_hex(hex_to_rgb(hex).unwrap()), hex);
    }
    assert_eq!(rgb_to_hex(hex_to_rgb("#ABCDEF").unwrap()), "#abcdef");

    let rgb = Rgb::new(18, 52, 86);
    assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)).unwrap(), rgb);
}

#[test]
fn interpolation_boundaries() {
    let pairs = [("#1e1e2e", "#f38ba8"), (BLACK, WHITE), ("#123456", "#654321")];
    for (bg, fg) in pairs {
        assert_eq!(interpolate(bg, fg, 0.0).unwrap(), bg);
        assert_eq!(interpolate(bg, fg, 1.0).unwrap(), fg);
        assert_eq!(interpolate(bg, fg, -2.0).unwrap(), bg);
        assert_eq!(interpolate(bg, fg, 2.0).unwrap(), fg);
        assert_eq!(interpolate(fg, fg, 0.37).unwrap(), fg);
    }
}

#[test]
fn interpolation_midpoints() {
    assert_eq!(interpolate("#ff0000", "#0000ff", 0.5).unwrap(), "#800080");
    assert_eq!(interpolate(BLACK, WHITE, 0.5).unwrap(), "#808080");
}

#[test]
fn interpolation_rejects_malformed_hex() {
    assert!(matches!(
        interpolate("ff0000", "#00ff00", 0.5),
        Err(ColorError::InvalidFormat { .. })
    ));
    assert!(matches!(
        interpolate("#ff0000", "#f00", 0.5),
        Err(ColorError::InvalidFormat { .. })
    ));
}

// ============================================================================
// Fade
// ============================================================================

#[test]
fn red_text_fixture_fades_to_half_red() {
    let content = load_fixture("red_text.txt");
    let faded = fade(&content, BLACK, WHITE, ColorMode::TrueColor, 0.5).unwrap();

    assert!(faded.contains("Red text"));
    assert!(faded.contains("\x1b[38;2;128;0;0mRed text"));
    assert!(!faded.contains("48;2;"));
}

#[test]
fn mixed_fixture_keeps_text_and_segments() {
    let content = load_fixture("mixed.txt");
    let faded = FadeRequest::new("#1e1e2e", "#cdd6f4")
        .factor(0.4)
        .apply(&content)
        .unwrap();

    let expected = ["ok", " build ", "warning", "\n", "orange", " ", "steel", "\n"];
    assert_eq!(labels(&content), expected);
    assert_eq!(labels(&faded), expected);
}

#[test]
fn styles_survive_fading() {
    let content = load_fixture("mixed.txt");
    let before = ansi::parse(&content);
    let after = ansi::parse(&fade(&content, BLACK, WHITE, ColorMode::TrueColor, 0.5).unwrap());

    for (b, a) in before.iter().zip(&after) {
        assert_eq!(b.style, a.style, "style of {:?}", b.label);
    }
    assert!(after[0].style.bold);
}

#[test]
fn backgrounds_only_where_declared() {
    let content = load_fixture("mixed.txt");
    let faded = fade(&content, BLACK, WHITE, ColorMode::TrueColor, 0.5).unwrap();
    let segments = ansi::parse(&faded);

    let with_bg: Vec<_> = segments
        .iter()
        .filter(|s| s.bg.is_some())
        .map(|s| s.label.as_str())
        .collect();
    assert_eq!(with_bg, ["warning"]);
    assert!(segments.iter().all(|s| s.fg.is_some()));
}

#[test]
fn plain_fixture_gets_faded_default_foreground() {
    let content = load_fixture("plain.txt");
    let faded = fade(&content, BLACK, WHITE, ColorMode::TrueColor, 0.5).unwrap();
    assert_eq!(faded, "\x1b[38;2;128;128;128mno escapes here\n\x1b[0m");
}

#[test]
fn invalid_terminal_colors_fail_without_output() {
    let content = load_fixture("mixed.txt");
    let err = fade(&content, "black", WHITE, ColorMode::TrueColor, 0.5).unwrap_err();
    assert_eq!(err.to_string(), "Invalid color 'black': expected '#' followed by 6 hex digits");
}

#[test]
fn terminal_entry_point() {
    let content = load_fixture("red_text.txt");

    let truecolor = TerminalInfo::new(ColorProfile::TrueColor, Rgb::BLACK, Rgb::WHITE);
    let faded = fade_with_terminal(&truecolor, &content, 0.5).unwrap();
    assert_eq!(
        faded,
        fade(&content, BLACK, WHITE, ColorMode::TrueColor, 0.5).unwrap()
    );

    let basic = TerminalInfo::new(ColorProfile::Ansi, Rgb::BLACK, Rgb::WHITE);
    match fade_with_terminal(&basic, &content, 0.5) {
        Err(err @ FadeError::CapabilityUnsupported { .. }) => {
            assert_eq!(err.into_original(), Some(content));
        }
        other => panic!("expected CapabilityUnsupported, got {:?}", other),
    }
}

#[test]
fn shared_cache_across_threads() {
    let content = Arc::new(load_fixture("mixed.txt"));
    let cache = Arc::new(ColorCache::default());
    let request = FadeRequest::new("#282828", "#ebdbb2").factor(0.6);
    let expected = request.apply_with(&content, &Linear).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let content = Arc::clone(&content);
            let cache = Arc::clone(&cache);
            let request = request.clone();
            thread::spawn(move || request.apply_with(&content, cache.as_ref()).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert!(cache.hits() > 0);
}
