use glam::Vec2;

use crate::constants::TEXT_RING_PADDING;

/// State captured for the duration of one hover session: the velocity to
/// restore on exit and the color of the text ring. Present exactly while the
/// pointer is inside the entity's hit box; absent means idle.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverSession {
    pub captured_velocity: Vec2,
    pub color: [u8; 3],
}

/// One drifting, clickable image entity.
#[derive(Clone, Debug)]
pub struct Floaty {
    /// Center, in viewport css-pixel units.
    pub position: Vec2,
    /// Drift per tick. Zeroed while a hover session holds the captured value.
    pub velocity: Vec2,
    /// Nominal width; drawn height is `size * aspect`.
    pub size: f32,
    /// natural_height / natural_width of the source image.
    pub aspect: f32,
    pub rotation: f32,
    /// Slowly drifting equilibrium the idle rotation eases toward.
    pub target_rotation: f32,
    /// Per-tick increment of `target_rotation` while idle; frozen while hovered.
    pub rotation_drift: f32,
    pub hover_scale: f32,
    pub opacity: f32,
    pub hover: Option<HoverSession>,
    pub url: String,
    pub hover_text: String,
}

impl Floaty {
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.size * 0.5
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.size * self.aspect * 0.5
    }

    /// Hit test against the untransformed axis-aligned box. Rotation is
    /// ignored even though the sprite draws rotated.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.position.x - self.half_width()
            && point.x < self.position.x + self.half_width()
            && point.y > self.position.y - self.half_height()
            && point.y < self.position.y + self.half_height()
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hover.is_some()
    }

    /// Radius of the hover text ring; clears the image for any aspect ratio.
    #[inline]
    pub fn text_radius(&self) -> f32 {
        self.half_width().max(self.half_height()) + TEXT_RING_PADDING
    }
}
