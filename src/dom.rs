use crate::constants::MS_PER_MINUTE;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

/// Wall-clock "now" in local milliseconds (epoch ms shifted by the timezone
/// offset), the unit `clock_core::ClockState` works in.
pub fn local_now_ms() -> i64 {
    let date = js_sys::Date::new_0();
    let offset_ms = date.get_timezone_offset() * MS_PER_MINUTE;
    (date.get_time() - offset_ms) as i64
}
