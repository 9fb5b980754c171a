use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    (rect.width() as f32, rect.height() as f32)
}

/// Match the canvas backing store to CSS size * devicePixelRatio. The context
/// transform must be re-applied afterwards; resizing the backing store resets
/// it.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Scale the drawing transform by devicePixelRatio so draw calls stay in the
/// CSS-pixel space the simulation runs in.
pub fn apply_dpr_transform(ctx: &web::CanvasRenderingContext2d) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{e:?}")))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{e:?}")))?;
    apply_dpr_transform(&ctx);
    Ok(ctx)
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn set_cursor(canvas: &web::HtmlCanvasElement, hovering: bool) {
    let cursor = if hovering { "pointer" } else { "default" };
    let _ = canvas.style().set_property("cursor", cursor);
}
