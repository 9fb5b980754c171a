// Frontend tuning constants.

pub const CANVAS_ID: &str = "floaty-canvas";

// Mobile-class viewports tick every Nth animation frame (~30 Hz at a 60 Hz
// display)
pub const MOBILE_FRAME_DIVISOR: u32 = 2;

// A frame slower than this gets a debug log line (ms)
pub const SLOW_FRAME_MS: f32 = 50.0;

// Hover text and loading hint styling
pub const TEXT_FONT: &str =
    "16px system-ui, -apple-system, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif";
pub const GLYPH_ALPHA: f32 = 0.9;
pub const LOADING_FILL: &str = "#111";
pub const LOADING_TEXT: &str = "Loading…";
pub const PLACEHOLDER_FILL: &str = "#ccc";
