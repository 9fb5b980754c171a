use glam::Vec2;

// Shared simulation tuning constants used by the core and the web frontend.

// Viewport classification
pub const MOBILE_BREAKPOINT: f32 = 768.0; // css px

// Spawn sizing (nominal entity width, css px)
pub const MOBILE_SIZE_MIN: f32 = 260.0;
pub const MOBILE_SIZE_MAX: f32 = 380.0;
pub const DESKTOP_SIZE_MIN: f32 = 400.0;
pub const DESKTOP_SIZE_MAX: f32 = 600.0;

// Placement
pub const SPAWN_MARGIN: f32 = 16.0; // required center clearance beyond touching
pub const SPAWN_ATTEMPTS: u32 = 100;

// Idle drift
pub const DRIFT_MAX: f32 = 0.5; // per-axis displacement per tick
pub const ROTATION_DRIFT_MAX: f32 = 0.002; // radians per tick

// Hover easing targets and rates (value += (target - value) * rate)
pub const HOVER_SCALE_TARGET: f32 = 1.2;
pub const HOVER_OPACITY: f32 = 1.0;
pub const IDLE_OPACITY: f32 = 0.6;
pub const SCALE_EASE_RATE: f32 = 0.1;
pub const OPACITY_EASE_RATE: f32 = 0.1;
pub const UPRIGHT_EASE_RATE: f32 = 0.05;
pub const IDLE_ROTATION_EASE_RATE: f32 = 0.02; // slower, so idle drift stays ambient

// Hover text ring
pub const TEXT_RING_PADDING: f32 = 20.0;
pub const HOVER_COLOR_CHANNEL_MIN: u8 = 50; // near-black channels make the ring unreadable

// Motion accessibility
pub const REDUCED_MOTION_SCALE: f32 = 0.3;

// Pointer sentinel far outside any plausible viewport
pub const POINTER_AWAY: Vec2 = Vec2::new(-9999.0, -9999.0);
