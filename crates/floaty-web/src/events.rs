use std::cell::RefCell;
use std::rc::Rc;

use floaty_core::FloatyField;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::input;

/// Pointer Events unify mouse, touch, and stylus. Handlers only write the
/// pointer position (read by the next tick) and dispatch activation; they
/// never touch entity state directly.
pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, field: Rc<RefCell<FloatyField>>) {
    // pointermove
    {
        let field = field.clone();
        let canvas_move = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = input::pointer_css_px(&ev, &canvas_move);
            field.borrow_mut().set_pointer(pos);
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerleave: restore the far-away sentinel so nothing stays hovered
    {
        let field = field.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            field.borrow_mut().clear_pointer();
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerdown: a tap is also a move (touch devices send no pointermove
    // first), then activation opens the entity's link
    {
        let canvas_down = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = input::pointer_css_px(&ev, &canvas_down);
            let mut f = field.borrow_mut();
            f.set_pointer(pos);
            if let Some(url) = f.activate_at(pos) {
                log::info!("[pointer] open {url}");
                ev.prevent_default();
                if let Some(window) = web::window() {
                    let _ = window.open_with_url_and_target(url, "_blank");
                }
            }
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn wire_resize(
    canvas: &web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: Rc<RefCell<FloatyField>>,
) {
    if let Some(window) = web::window() {
        let canvas = canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas);
            dom::apply_dpr_transform(&ctx);
            let (w, h) = dom::canvas_css_size(&canvas);
            field.borrow_mut().resize(w, h);
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
