use crate::frame::ClockView;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `keydown` subscription on `window`; unsubscribes when dropped.
pub struct KeyListener {
    target: web::Window,
    callback: Closure<dyn FnMut(web::KeyboardEvent)>,
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        _ = self.target.remove_event_listener_with_callback(
            "keydown",
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Any key restarts the brighten flash. Auto-repeat events count as presses
/// too; the key identity is never inspected.
pub fn wire_brighten_keydown(view: Weak<RefCell<ClockView>>) -> anyhow::Result<KeyListener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let callback = Closure::wrap(Box::new(move |_ev: web::KeyboardEvent| {
        if let Some(view) = view.upgrade() {
            ClockView::on_key(&view);
        }
    }) as Box<dyn FnMut(_)>);
    window
        .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("keydown listener: {:?}", e))?;
    Ok(KeyListener {
        target: window,
        callback,
    })
}
