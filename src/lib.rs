#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod timer;

use constants::ROOT_ELEMENT_ID;
use frame::ClockView;

thread_local! {
    static MOUNTED: RefCell<Option<Rc<RefCell<ClockView>>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbit-clock starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    if MOUNTED.with(|m| m.borrow().is_some()) {
        log::warn!("[view] already mounted; ignoring");
        return Ok(());
    }
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = dom::element_by_id(&document, ROOT_ELEMENT_ID)?;
    let view = ClockView::mount(&document, &root)?;
    MOUNTED.with(|m| *m.borrow_mut() = Some(view));
    Ok(())
}

/// Mount the clock again after `unmount`.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    init().map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

/// Tear the clock down: stops both timers, unsubscribes from key presses and
/// removes the SVG.
#[wasm_bindgen]
pub fn unmount() {
    let view = MOUNTED.with(|m| m.borrow_mut().take());
    if let Some(view) = view {
        let frames = view.borrow().frames_drawn();
        drop(view);
        log::info!("[view] unmounted after {} frames", frames);
    }
}
