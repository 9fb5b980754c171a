#![cfg(target_arch = "wasm32")]
//! Canvas 2D frontend for the floaty simulation: asset loading, pointer
//! input, viewport tracking, and the requestAnimationFrame loop. All entity
//! mutation happens in the frame callback; input handlers only write the
//! pointer position and the core reads it on the next tick.

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

use std::cell::RefCell;
use std::rc::Rc;

use floaty_core::{validate_items, FloatyField, FloatyItem};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// The configured items, the only external configuration the widget needs.
fn floaty_items() -> Vec<FloatyItem> {
    vec![
        FloatyItem::new(
            "assets/images/cover_v01.png",
            "portfolio.html",
            "- PORTFOLIO - PORTFOLIO - PORTFOLIO - PORTFOLIO ",
        ),
        FloatyItem::new(
            "assets/images/lampe.png",
            "lamp.html",
            "- PARAMETRIC LAMP - PARAMETRIC LAMP - PARAMETRIC LAMP ",
        ),
    ]
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("floaty-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{e:?}")))?;

    dom::sync_canvas_backing_size(&canvas);
    let ctx = dom::context_2d(&canvas)?;
    let (css_w, css_h) = dom::canvas_css_size(&canvas);

    let mut field = FloatyField::new(css_w, css_h, js_sys::Date::now() as u64);
    field.set_reduced_motion(dom::prefers_reduced_motion(&window));
    let field = Rc::new(RefCell::new(field));

    let items = floaty_items();
    validate_items(&items)?;

    // Drawables live parallel to the entity store's spawn indices; entities
    // join the simulation as their images resolve, and the frame loop shows
    // a loading hint while the field is still empty.
    let images: Rc<RefCell<Vec<assets::ImageAsset>>> = Rc::new(RefCell::new(Vec::new()));
    for item in items {
        let field = field.clone();
        let images = images.clone();
        spawn_local(async move {
            let asset = assets::load(&item.image_src).await;
            let (natural_w, natural_h) = asset.natural_size();
            field.borrow_mut().spawn(item, natural_w, natural_h);
            images.borrow_mut().push(asset);
        });
    }

    events::wire_pointer_handlers(&canvas, field.clone());
    events::wire_resize(&canvas, ctx.clone(), field.clone());
    frame::start_loop(frame::FrameContext::new(canvas, ctx, field, images));
    Ok(())
}
