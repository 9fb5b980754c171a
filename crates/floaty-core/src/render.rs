use glam::Vec2;

use crate::field::FloatyField;
use crate::text::circular_text;

/// Draw parameters for one entity's image, in the viewport units the
/// simulation runs in.
#[derive(Clone, Copy, Debug)]
pub struct SpriteParams {
    pub position: Vec2,
    pub rotation: f32,
    pub scale: f32,
    pub opacity: f32,
    pub width: f32,
    pub height: f32,
}

/// Backend seam: the simulation describes what to draw, the embedding
/// environment owns how. `index` is the entity's stable spawn index, which
/// backends use to look up the drawable handle.
pub trait RenderAdapter {
    fn draw_image(&mut self, index: usize, params: &SpriteParams);
    fn draw_glyph(&mut self, ch: char, position: Vec2, rotation: f32, color: [u8; 3]);
}

/// Emit one frame of draw calls: every entity's image and, for entities with
/// an active hover session, the text ring in the session color. Callers tick
/// first and draw after; this never mutates the field.
pub fn draw_field(field: &FloatyField, adapter: &mut dyn RenderAdapter) {
    for (index, f) in field.floaties.iter().enumerate() {
        adapter.draw_image(
            index,
            &SpriteParams {
                position: f.position,
                rotation: f.rotation,
                scale: f.hover_scale,
                opacity: f.opacity.clamp(0.0, 1.0),
                width: f.size,
                height: f.size * f.aspect,
            },
        );
        if let Some(session) = &f.hover {
            for glyph in circular_text(&f.hover_text, f.text_radius()) {
                adapter.draw_glyph(
                    glyph.ch,
                    f.position + glyph.offset,
                    glyph.rotation,
                    session.color,
                );
            }
        }
    }
}
