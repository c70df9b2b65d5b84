//! Declarative frame description handed to the rendering surface.
//!
//! `compose` is a pure function of the clock state and the brighten progress,
//! so the whole frame can be built and inspected without a browser.

use crate::color::Rgb;
use crate::constants::*;
use crate::geometry::project;
use crate::time::{ClockState, TimeUnit};
use crate::trail::HandStyle;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
    /// `None` draws an unfilled ring.
    pub fill: Option<Rgb>,
    pub stroke: Option<Stroke>,
    pub opacity: f64,
}

/// Circles in paint order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub circles: Vec<Circle>,
}

impl Scene {
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}

/// Render configuration: hand styles (seconds, minutes, hours) plus viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct ClockFace {
    pub hands: [HandStyle; 3],
    pub view_box: [f64; 4],
    pub size_px: u32,
}

impl Default for ClockFace {
    fn default() -> Self {
        Self {
            hands: [HandStyle::seconds(), HandStyle::minutes(), HandStyle::hours()],
            view_box: VIEW_BOX,
            size_px: SVG_SIZE_PX,
        }
    }
}

impl ClockFace {
    pub fn hand(&self, unit: TimeUnit) -> &HandStyle {
        match unit {
            TimeUnit::Seconds => &self.hands[0],
            TimeUnit::Minutes => &self.hands[1],
            TimeUnit::Hours => &self.hands[2],
        }
    }

    pub fn hand_mut(&mut self, unit: TimeUnit) -> &mut HandStyle {
        match unit {
            TimeUnit::Seconds => &mut self.hands[0],
            TimeUnit::Minutes => &mut self.hands[1],
            TimeUnit::Hours => &mut self.hands[2],
        }
    }

    /// Total circles `compose` emits: a ring and a head per hand plus every
    /// trail sample.
    pub fn circle_count(&self) -> usize {
        self.hands.iter().map(|h| h.trail_length + 2).sum()
    }

    /// Build one frame: guide rings, then trails, then hand heads on top.
    pub fn compose(&self, clock: ClockState, progress: f64) -> Scene {
        let mut circles = Vec::with_capacity(self.circle_count());

        for hand in &self.hands {
            circles.push(Circle {
                center: DVec2::ZERO,
                radius: hand.orbit_radius,
                fill: None,
                stroke: Some(Stroke {
                    color: RING_STROKE_COLOR,
                    width: RING_STROKE_WIDTH,
                }),
                opacity: RING_OPACITY,
            });
        }

        for hand in &self.hands {
            circles.extend(hand.trail(clock, progress).map(|p| Circle {
                center: p.position,
                radius: hand.trail_point_radius,
                fill: Some(p.fill),
                stroke: None,
                opacity: p.opacity,
            }));
        }

        let now = clock.time();
        for hand in &self.hands {
            circles.push(Circle {
                center: project(now.angle(hand.unit), hand.orbit_radius),
                radius: hand.head_radius,
                fill: Some(hand.color.brighten(progress)),
                stroke: None,
                opacity: 1.0,
            });
        }

        Scene { circles }
    }
}
