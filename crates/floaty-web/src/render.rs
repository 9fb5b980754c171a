use std::cell::RefCell;
use std::rc::Rc;

use floaty_core::{RenderAdapter, SpriteParams};
use glam::Vec2;
use web_sys as web;

use crate::assets::ImageAsset;
use crate::constants::{GLYPH_ALPHA, LOADING_FILL, LOADING_TEXT, PLACEHOLDER_FILL, TEXT_FONT};

/// Canvas 2D implementation of the core's render seam. Drawables live in a
/// list parallel to the entity store's spawn indices.
pub struct CanvasRenderer {
    ctx: web::CanvasRenderingContext2d,
    images: Rc<RefCell<Vec<ImageAsset>>>,
}

impl CanvasRenderer {
    pub fn new(ctx: web::CanvasRenderingContext2d, images: Rc<RefCell<Vec<ImageAsset>>>) -> Self {
        Self { ctx, images }
    }

    pub fn begin_frame(&self, width: f32, height: f32) {
        self.ctx
            .clear_rect(0.0, 0.0, f64::from(width), f64::from(height));
    }

    /// Lightweight hint while no image has resolved yet.
    pub fn draw_loading(&self, width: f32, height: f32) {
        self.begin_frame(width, height);
        self.ctx.save();
        self.ctx.set_font(TEXT_FONT);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style_str(LOADING_FILL);
        let _ = self.ctx.fill_text(
            LOADING_TEXT,
            f64::from(width) * 0.5,
            f64::from(height) * 0.5,
        );
        self.ctx.restore();
    }
}

impl RenderAdapter for CanvasRenderer {
    fn draw_image(&mut self, index: usize, p: &SpriteParams) {
        let images = self.images.borrow();
        let Some(asset) = images.get(index) else {
            return;
        };
        self.ctx.save();
        let _ = self
            .ctx
            .translate(f64::from(p.position.x), f64::from(p.position.y));
        let _ = self.ctx.rotate(f64::from(p.rotation));
        let _ = self.ctx.scale(f64::from(p.scale), f64::from(p.scale));
        self.ctx.set_global_alpha(f64::from(p.opacity));
        let half_w = f64::from(p.width) * 0.5;
        let half_h = f64::from(p.height) * 0.5;
        match asset {
            ImageAsset::Ready(img) => {
                let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    img,
                    -half_w,
                    -half_h,
                    f64::from(p.width),
                    f64::from(p.height),
                );
            }
            ImageAsset::Placeholder => {
                self.ctx.set_fill_style_str(PLACEHOLDER_FILL);
                self.ctx
                    .fill_rect(-half_w, -half_h, f64::from(p.width), f64::from(p.height));
            }
        }
        self.ctx.restore();
    }

    fn draw_glyph(&mut self, ch: char, position: Vec2, rotation: f32, color: [u8; 3]) {
        self.ctx.save();
        let _ = self
            .ctx
            .translate(f64::from(position.x), f64::from(position.y));
        let _ = self.ctx.rotate(f64::from(rotation));
        self.ctx.set_font(TEXT_FONT);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style_str(&format!(
            "rgba({},{},{},{})",
            color[0], color[1], color[2], GLYPH_ALPHA
        ));
        let _ = self.ctx.fill_text(&ch.to_string(), 0.0, 0.0);
        self.ctx.restore();
    }
}
