// Host-side tests for timing constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use clock_core::*;
use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timer_periods_are_positive_and_ordered() {
    assert!(CLOCK_TICK_MS > 0);
    assert!(DECAY_TICK_MS > 0);
    // decay animates faster than the clock refreshes
    assert!(DECAY_TICK_MS < CLOCK_TICK_MS);
}

#[test]
fn full_flash_lasts_under_a_second() {
    let ticks = (1.0 / DECAY_PER_TICK).round() as i32;
    assert_eq!(ticks, 50);
    assert!(ticks * DECAY_TICK_MS < 1_000);
}

#[test]
fn trails_span_expected_history() {
    let span_ms = |h: HandStyle| h.trail_length as i64 * h.trail_step_ms;
    assert_eq!(span_ms(HandStyle::seconds()), 12_000);
    assert_eq!(span_ms(HandStyle::minutes()), 6 * 60_000);
    assert_eq!(span_ms(HandStyle::hours()), 60 * 60_000);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn orbits_nest_inside_view_box() {
    assert!(SECONDS_ORBIT_RADIUS > MINUTES_ORBIT_RADIUS);
    assert!(MINUTES_ORBIT_RADIUS > HOURS_ORBIT_RADIUS);
    let half_extent = VIEW_BOX[2] / 2.0;
    assert!(SECONDS_ORBIT_RADIUS + SECONDS_HEAD_RADIUS < half_extent);
    assert_eq!(VIEW_BOX[0], -half_extent);
}

#[test]
fn color_attrs_are_data_attributes() {
    for attr in [SECONDS_COLOR_ATTR, MINUTES_COLOR_ATTR, HOURS_COLOR_ATTR] {
        assert!(attr.starts_with("data-"));
    }
    assert_ne!(ROOT_ELEMENT_ID, LOADING_ELEMENT_ID);
}
