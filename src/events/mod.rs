pub mod keyboard;

pub use keyboard::{wire_brighten_keydown, KeyListener};
