use std::cell::RefCell;
use std::rc::Rc;

use floaty_core::{draw_field, FloatyField, ViewportClass};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::assets::ImageAsset;
use crate::constants::{MOBILE_FRAME_DIVISOR, SLOW_FRAME_MS};
use crate::dom;
use crate::render::CanvasRenderer;

pub struct FrameContext {
    canvas: web::HtmlCanvasElement,
    field: Rc<RefCell<FloatyField>>,
    renderer: CanvasRenderer,
    last_instant: Instant,
    frame_index: u32,
}

impl FrameContext {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
        field: Rc<RefCell<FloatyField>>,
        images: Rc<RefCell<Vec<ImageAsset>>>,
    ) -> Self {
        Self {
            canvas,
            field,
            renderer: CanvasRenderer::new(ctx, images),
            last_instant: Instant::now(),
            frame_index: 0,
        }
    }

    /// One animation frame: advance the simulation, then draw it. Strictly
    /// mutate-then-draw, never interleaved.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_ms = (now - self.last_instant).as_secs_f32() * 1000.0;
        self.last_instant = now;
        if dt_ms > SLOW_FRAME_MS {
            log::debug!("[frame] slow frame: {dt_ms:.1} ms");
        }

        self.frame_index = self.frame_index.wrapping_add(1);
        let mut field = self.field.borrow_mut();
        let (w, h) = field.viewport();
        if field.is_empty() {
            self.renderer.draw_loading(w, h);
            return;
        }
        // Constrained viewports run at half cadence
        if ViewportClass::of(w) == ViewportClass::Mobile
            && self.frame_index % MOBILE_FRAME_DIVISOR != 0
        {
            return;
        }

        field.tick();

        self.renderer.begin_frame(w, h);
        draw_field(&field, &mut self.renderer);
        dom::set_cursor(&self.canvas, field.any_hovered());
    }
}

/// Drive [`FrameContext::frame`] from requestAnimationFrame. The loop stops
/// rescheduling itself while the page is hidden and resumes on the
/// visibilitychange back to visible.
pub fn start_loop(frame_ctx: FrameContext) {
    let frame_ctx = Rc::new(RefCell::new(frame_ctx));
    let running = Rc::new(RefCell::new(true));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let running_tick = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !*running_tick.borrow() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));

    wire_visibility(running, tick.clone());

    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

fn wire_visibility(running: Rc<RefCell<bool>>, tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(document) = web::window().and_then(|w| w.document()) else {
        return;
    };
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let hidden = doc.hidden();
        let was_running = std::mem::replace(&mut *running.borrow_mut(), !hidden);
        log::info!("[frame] visibility change, running={}", !hidden);
        if !hidden && !was_running {
            if let Some(w) = web::window() {
                if let Some(t) = tick.borrow().as_ref() {
                    let _ = w.request_animation_frame(t.as_ref().unchecked_ref());
                }
            }
        }
    }) as Box<dyn FnMut()>);
    let _ =
        document.add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
