use crate::color::Rgb;

// Shared visual tuning constants for the clock face.

// Viewport: the SVG view box is centered on the clock.
pub const VIEW_BOX: [f64; 4] = [-200.0, -200.0, 400.0, 400.0];
pub const SVG_SIZE_PX: u32 = 600;

// Orbit radii for each hand (view-box units)
pub const SECONDS_ORBIT_RADIUS: f64 = 180.0;
pub const MINUTES_ORBIT_RADIUS: f64 = 140.0;
pub const HOURS_ORBIT_RADIUS: f64 = 100.0;

// Hand heads drawn at the current position
pub const SECONDS_HEAD_RADIUS: f64 = 5.0;
pub const MINUTES_HEAD_RADIUS: f64 = 7.0;
pub const HOURS_HEAD_RADIUS: f64 = 9.0;

// Trail sampling: number of afterimages and spacing between them
pub const SECONDS_TRAIL_LENGTH: usize = 120;
pub const MINUTES_TRAIL_LENGTH: usize = 360;
pub const HOURS_TRAIL_LENGTH: usize = 720;

pub const SECONDS_TRAIL_STEP_MS: i64 = 100;
pub const MINUTES_TRAIL_STEP_MS: i64 = 1_000;
pub const HOURS_TRAIL_STEP_MS: i64 = 5_000;

pub const SECONDS_TRAIL_POINT_RADIUS: f64 = 1.5;
pub const MINUTES_TRAIL_POINT_RADIUS: f64 = 1.5;
pub const HOURS_TRAIL_POINT_RADIUS: f64 = 2.0;

// Opacity = fade^exponent; seconds fade slowly, minutes/hours fall off fast
pub const SECONDS_OPACITY_EXPONENT: f64 = 0.5;
pub const MINUTES_OPACITY_EXPONENT: f64 = 2.0;
pub const HOURS_OPACITY_EXPONENT: f64 = 2.0;

// Hand palette
pub const SECONDS_COLOR: Rgb = Rgb::from_u32(0x45B7D1); // sky blue
pub const MINUTES_COLOR: Rgb = Rgb::from_u32(0x4ECDC4); // teal
pub const HOURS_COLOR: Rgb = Rgb::from_u32(0xFF6B6B); // coral

// Guide rings behind the trails
pub const RING_STROKE_COLOR: Rgb = Rgb::WHITE;
pub const RING_STROKE_WIDTH: f64 = 1.0;
pub const RING_OPACITY: f64 = 0.3;

// Brighten animation
pub const BRIGHTNESS_OFFSET: u8 = 100; // added to every channel before clamping
pub const DECAY_PER_TICK: f64 = 0.02; // progress lost per decay tick
