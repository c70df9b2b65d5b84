// Host-side tests for trail sampling.

use clock_core::*;

const EPS: f64 = 1e-9;

fn at(h: i64, m: i64, s: i64, milli: i64) -> ClockState {
    ClockState::new(((h * 60 + m) * 60 + s) * 1000 + milli)
}

#[test]
fn trail_lengths_match_hand_table() {
    let clock = at(9, 41, 12, 300);
    for (unit, len) in [
        (TimeUnit::Seconds, 120),
        (TimeUnit::Minutes, 360),
        (TimeUnit::Hours, 720),
    ] {
        let style = HandStyle::for_unit(unit);
        let trail = style.trail(clock, 0.0);
        assert_eq!(trail.len(), len);
        assert_eq!(trail.count(), len);
    }
}

#[test]
fn trail_is_deterministic_and_restartable() {
    let style = HandStyle::minutes();
    let clock = at(17, 3, 44, 10);
    let trail = style.trail(clock, 0.4);
    let a: Vec<_> = trail.clone().collect();
    let b: Vec<_> = style.trail(clock, 0.4).collect();
    assert_eq!(a, b);

    let mut partial = trail.clone();
    partial.nth(10);
    assert_eq!(partial.len(), 360 - 11);
    // the original was never advanced
    assert_eq!(trail.len(), 360);
}

#[test]
fn newest_point_sits_on_the_hand() {
    let clock = at(4, 20, 30, 0);
    for unit in TimeUnit::ALL {
        let style = HandStyle::for_unit(unit);
        let first = style.trail(clock, 0.0).next().unwrap();
        assert_eq!(first.index, 0);
        assert_eq!(first.fade, 1.0);
        assert_eq!(first.opacity, 1.0);
        let head = project(clock.time().angle(unit), style.orbit_radius);
        assert!((first.position - head).length() < EPS);
    }
}

#[test]
fn samples_step_back_in_time() {
    let clock = at(0, 0, 30, 0);
    let style = HandStyle::seconds();
    let p = style.trail(clock, 0.0).nth(10).unwrap();
    // 10 * 100 ms earlier = 29.0 s
    assert!((p.angle_deg - 174.0).abs() < EPS);
    assert!((p.fade - (1.0 - 10.0 / 120.0)).abs() < EPS);
}

#[test]
fn samples_wrap_past_midnight() {
    let style = HandStyle::seconds();
    let p = style.trail(ClockState::new(0), 0.0).nth(1).unwrap();
    // 23:59:59.900
    assert!((p.angle_deg - 359.4).abs() < 1e-6);
}

#[test]
fn opacity_follows_per_hand_falloff() {
    let clock = at(6, 0, 0, 0);
    let seconds = HandStyle::seconds();
    let p = seconds.trail(clock, 0.0).nth(90).unwrap();
    assert!((p.fade - 0.25).abs() < EPS);
    assert!((p.opacity - 0.5).abs() < EPS);

    let minutes = HandStyle::minutes();
    let p = minutes.trail(clock, 0.0).nth(180).unwrap();
    assert!((p.opacity - 0.25).abs() < EPS);

    let hours = HandStyle::hours();
    let last = hours.trail(clock, 0.0).last().unwrap();
    let fade = 1.0 - 719.0 / 720.0;
    assert!((last.opacity - fade * fade).abs() < EPS);
}

#[test]
fn fill_scales_progress_by_fade() {
    let clock = at(12, 0, 0, 0);
    let style = HandStyle::hours();

    for p in style.trail(clock, 0.0) {
        assert_eq!(p.fill, HOURS_COLOR.brighten(0.0));
    }

    let mut trail = style.trail(clock, 1.0);
    assert_eq!(trail.next().unwrap().fill, Rgb::WHITE);
    let p = trail.nth(359).unwrap();
    assert_eq!(p.index, 360);
    assert_eq!(p.fill, HOURS_COLOR.brighten(0.5));
}
