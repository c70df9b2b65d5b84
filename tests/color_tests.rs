// Host-side tests for hex parsing and the brighten color formula.

use clock_core::*;

#[test]
fn parses_hex_with_and_without_hash() {
    assert_eq!("#45B7D1".parse::<Rgb>(), Ok(Rgb::new(0x45, 0xB7, 0xD1)));
    assert_eq!("4ecdc4".parse::<Rgb>(), Ok(MINUTES_COLOR));
    assert_eq!(" #FF6B6B ".parse::<Rgb>(), Ok(HOURS_COLOR));
}

#[test]
fn rejects_malformed_hex() {
    assert_eq!("#45B7D".parse::<Rgb>(), Err(ColorError::Length(5)));
    assert_eq!("#45B7D1FF".parse::<Rgb>(), Err(ColorError::Length(8)));
    assert!(matches!("#GG0000".parse::<Rgb>(), Err(ColorError::Digits(_))));
    assert!(matches!("+12345".parse::<Rgb>(), Err(ColorError::Digits(_))));
}

#[test]
fn formats_as_css_rgb() {
    assert_eq!(SECONDS_COLOR.to_string(), "rgb(69, 183, 209)");
}

#[test]
fn rest_color_adds_offset_per_channel() {
    // progress 0 still lifts every channel by 100 before clamping
    assert_eq!(SECONDS_COLOR.brighten(0.0), Rgb::new(169, 255, 255));
    assert_eq!(MINUTES_COLOR.brighten(0.0), Rgb::new(178, 255, 255));
    assert_eq!(HOURS_COLOR.brighten(0.0), Rgb::new(255, 207, 207));
    assert_eq!(Rgb::new(10, 20, 30).brighten(0.0), Rgb::new(110, 120, 130));
}

#[test]
fn full_progress_is_white() {
    for base in [SECONDS_COLOR, MINUTES_COLOR, HOURS_COLOR, Rgb::new(0, 0, 0)] {
        assert_eq!(base.brighten(1.0), Rgb::WHITE);
    }
}

#[test]
fn partial_progress_rounds_then_offsets() {
    // 0 + 255 * 0.5 = 127.5 -> 128, +100
    assert_eq!(Rgb::new(0, 0, 0).brighten(0.5), Rgb::new(228, 228, 228));
    // 20 + 235 * 0.25 = 78.75 -> 79, +100
    assert_eq!(Rgb::new(20, 20, 20).brighten(0.25), Rgb::new(179, 179, 179));
}

#[test]
fn brighten_is_not_idempotent() {
    let once = Rgb::new(10, 20, 30).brighten(0.0);
    let twice = once.brighten(0.0);
    assert_ne!(once, twice);
    assert_eq!(twice, Rgb::new(210, 220, 230));
}

#[test]
fn brighten_never_darkens() {
    let base = Rgb::new(12, 140, 250);
    let mut prev = base.brighten(0.0);
    for i in 1..=20 {
        let c = base.brighten(i as f64 / 20.0);
        assert!(c.r >= prev.r && c.g >= prev.g && c.b >= prev.b);
        prev = c;
    }
}
