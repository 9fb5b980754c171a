use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;
use smallvec::SmallVec;

/// One character of a circular text layout, positioned relative to the
/// circle's center and rotated tangent to the circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphPlacement {
    pub ch: char,
    pub offset: Vec2,
    pub rotation: f32,
}

/// Lay `text` out around a full circle of `radius`: characters evenly spaced
/// by `2π / len`, the first at 12 o'clock, proceeding clockwise in y-down
/// screen coordinates, each rotated tangent so the text reads around the
/// circumference. Pure; callers re-run it every hovered frame.
pub fn circular_text(text: &str, radius: f32) -> SmallVec<[GlyphPlacement; 64]> {
    let len = text.chars().count();
    if len == 0 {
        return SmallVec::new();
    }
    let step = TAU / len as f32;
    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            let angle = -FRAC_PI_2 + i as f32 * step;
            GlyphPlacement {
                ch,
                offset: Vec2::new(angle.cos(), angle.sin()) * radius,
                rotation: angle + FRAC_PI_2,
            }
        })
        .collect()
}
