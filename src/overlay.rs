use crate::constants::{LOADING_ELEMENT_ID, LOADING_TEXT};
use web_sys as web;

/// Show the "Loading..." placeholder, creating it inside `root` if the page
/// did not ship one.
pub fn show_loading(document: &web::Document, root: &web::Element) {
    if let Some(el) = document.get_element_by_id(LOADING_ELEMENT_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
        return;
    }
    if let Ok(el) = document.create_element("div") {
        el.set_id(LOADING_ELEMENT_ID);
        el.set_text_content(Some(LOADING_TEXT));
        _ = root.append_child(&el);
    }
}

pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_ELEMENT_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_loading_visible(document: &web::Document) -> bool {
    document
        .get_element_by_id(LOADING_ELEMENT_ID)
        .map(|el| {
            !el.class_list().contains("hidden")
                && !el
                    .get_attribute("style")
                    .map(|s| s.contains("display:none"))
                    .unwrap_or(false)
        })
        .unwrap_or(false)
}
