use crate::constants::{HOURS_COLOR_ATTR, MINUTES_COLOR_ATTR, SECONDS_COLOR_ATTR};
use clock_core::{ClockFace, Rgb, TimeUnit};
use web_sys as web;

fn color_attr(unit: TimeUnit) -> &'static str {
    match unit {
        TimeUnit::Seconds => SECONDS_COLOR_ATTR,
        TimeUnit::Minutes => MINUTES_COLOR_ATTR,
        TimeUnit::Hours => HOURS_COLOR_ATTR,
    }
}

/// Default face with any `data-*-color` overrides from the root element.
/// Unparseable values are logged and skipped.
pub fn face_from_root(root: &web::Element) -> ClockFace {
    let mut face = ClockFace::default();
    for unit in TimeUnit::ALL {
        let attr = color_attr(unit);
        let Some(raw) = root.get_attribute(attr) else {
            continue;
        };
        match raw.parse::<Rgb>() {
            Ok(color) => {
                log::info!("[config] {} color override {}", unit.as_str(), color);
                face.hand_mut(unit).color = color;
            }
            Err(e) => log::warn!("[config] ignoring {}={:?}: {}", attr, raw, e),
        }
    }
    face
}
