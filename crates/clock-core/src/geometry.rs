use glam::DVec2;

/// Project a clock angle onto a circle around the origin.
///
/// Screen coordinates: +y points down, so 0° lands on `(0, -radius)` and
/// 90° on `(radius, 0)`.
#[inline]
pub fn project(angle_deg: f64, radius: f64) -> DVec2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    DVec2::new(sin * radius, -cos * radius)
}
