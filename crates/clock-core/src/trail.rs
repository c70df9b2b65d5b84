use crate::color::Rgb;
use crate::constants::*;
use crate::geometry::project;
use crate::time::{ClockState, TimeUnit};
use glam::DVec2;

/// Per-hand drawing parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct HandStyle {
    pub unit: TimeUnit,
    pub color: Rgb,
    pub orbit_radius: f64,
    pub head_radius: f64,
    pub trail_length: usize,
    pub trail_step_ms: i64,
    pub trail_point_radius: f64,
    pub opacity_exponent: f64,
}

impl HandStyle {
    pub fn seconds() -> Self {
        Self {
            unit: TimeUnit::Seconds,
            color: SECONDS_COLOR,
            orbit_radius: SECONDS_ORBIT_RADIUS,
            head_radius: SECONDS_HEAD_RADIUS,
            trail_length: SECONDS_TRAIL_LENGTH,
            trail_step_ms: SECONDS_TRAIL_STEP_MS,
            trail_point_radius: SECONDS_TRAIL_POINT_RADIUS,
            opacity_exponent: SECONDS_OPACITY_EXPONENT,
        }
    }

    pub fn minutes() -> Self {
        Self {
            unit: TimeUnit::Minutes,
            color: MINUTES_COLOR,
            orbit_radius: MINUTES_ORBIT_RADIUS,
            head_radius: MINUTES_HEAD_RADIUS,
            trail_length: MINUTES_TRAIL_LENGTH,
            trail_step_ms: MINUTES_TRAIL_STEP_MS,
            trail_point_radius: MINUTES_TRAIL_POINT_RADIUS,
            opacity_exponent: MINUTES_OPACITY_EXPONENT,
        }
    }

    pub fn hours() -> Self {
        Self {
            unit: TimeUnit::Hours,
            color: HOURS_COLOR,
            orbit_radius: HOURS_ORBIT_RADIUS,
            head_radius: HOURS_HEAD_RADIUS,
            trail_length: HOURS_TRAIL_LENGTH,
            trail_step_ms: HOURS_TRAIL_STEP_MS,
            trail_point_radius: HOURS_TRAIL_POINT_RADIUS,
            opacity_exponent: HOURS_OPACITY_EXPONENT,
        }
    }

    pub fn for_unit(unit: TimeUnit) -> Self {
        match unit {
            TimeUnit::Seconds => Self::seconds(),
            TimeUnit::Minutes => Self::minutes(),
            TimeUnit::Hours => Self::hours(),
        }
    }

    /// Sample this hand's afterimages looking back from `clock`.
    pub fn trail(&self, clock: ClockState, progress: f64) -> Trail<'_> {
        Trail {
            style: self,
            clock,
            progress,
            index: 0,
        }
    }
}

/// One afterimage of a hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub index: usize,
    pub angle_deg: f64,
    pub position: DVec2,
    /// 1 for the newest sample, approaching 0 for the oldest.
    pub fade: f64,
    pub opacity: f64,
    pub fill: Rgb,
}

/// Lazy walk over a hand's past positions, newest first.
///
/// Nothing is stored between frames; cloning a trail restarts it.
#[derive(Clone, Debug)]
pub struct Trail<'a> {
    style: &'a HandStyle,
    clock: ClockState,
    progress: f64,
    index: usize,
}

impl Trail<'_> {
    fn point(&self, i: usize) -> TrailPoint {
        let style = self.style;
        let time = self.clock.time_before(i as i64 * style.trail_step_ms);
        let angle_deg = time.angle(style.unit);
        let fade = 1.0 - i as f64 / style.trail_length as f64;
        TrailPoint {
            index: i,
            angle_deg,
            position: project(angle_deg, style.orbit_radius),
            fade,
            opacity: fade.powf(style.opacity_exponent),
            fill: style.color.brighten(self.progress * fade),
        }
    }
}

impl Iterator for Trail<'_> {
    type Item = TrailPoint;

    fn next(&mut self) -> Option<TrailPoint> {
        if self.index >= self.style.trail_length {
            return None;
        }
        let p = self.point(self.index);
        self.index += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.style.trail_length.saturating_sub(self.index);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Trail<'_> {}

impl std::iter::FusedIterator for Trail<'_> {}
