/// Timer and DOM wiring constants for the web frontend.
///
/// Visual tuning (radii, palette, trail lengths) lives in `clock_core`; this
/// file only covers how the browser drives the view.
// Clock refresh period (~20 Hz)
pub const CLOCK_TICK_MS: i32 = 50;

// Brighten decay period (~60 Hz); only scheduled while the flash is visible
pub const DECAY_TICK_MS: i32 = 16;

// Host page elements
pub const ROOT_ELEMENT_ID: &str = "clock-root";
pub const LOADING_ELEMENT_ID: &str = "clock-loading";
pub const LOADING_TEXT: &str = "Loading...";

// Optional per-hand color overrides read from the root element
pub const SECONDS_COLOR_ATTR: &str = "data-seconds-color";
pub const MINUTES_COLOR_ATTR: &str = "data-minutes-color";
pub const HOURS_COLOR_ATTR: &str = "data-hours-color";

// Milliseconds per minute, for Date.getTimezoneOffset()
pub const MS_PER_MINUTE: f64 = 60_000.0;
