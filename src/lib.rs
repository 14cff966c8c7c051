#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, RESET_BUTTON_ID};
use std::cell::RefCell;
use std::rc::Rc;
use tunnel_core::{Limits, Settings, TickCounts, TunnelEngine, Viewport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
pub mod controls;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_reset_button(
    document: &web::Document,
    engine: &Rc<RefCell<TunnelEngine>>,
    clock: frame::Clock,
) {
    let engine = engine.clone();
    dom::add_click_listener(document, RESET_BUTTON_ID, move || {
        engine.borrow_mut().reset(clock.now_ms());
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tunnel-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;

    // Backing store tracks CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let clock = frame::Clock::start();
    let viewport = Viewport::new(canvas.width() as f32, canvas.height() as f32);
    let engine = Rc::new(RefCell::new(TunnelEngine::new(
        Settings::default().shared(),
        viewport,
        Limits::default(),
        clock.now_ms(),
    )));
    let paused = Rc::new(RefCell::new(false));
    log::info!(
        "[engine] viewport={}x{} max_entities={}",
        viewport.width,
        viewport.height,
        engine.borrow().manager().limits().max_entities
    );

    events::wire_pointer_handlers(canvas.clone(), engine.clone());
    events::wire_global_keydown(engine.clone(), paused.clone(), canvas.clone(), clock);
    wire_reset_button(&document, &engine, clock);

    {
        let eng = engine.borrow();
        let kind = eng.settings().borrow().shape_kind;
        overlay::update_hint(&document, kind, 0, false);
    }

    controls::install(controls::AppHandle {
        engine: engine.clone(),
        paused: paused.clone(),
        clock,
    });

    let painter = render::Painter::new(&canvas)?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        paused,
        canvas,
        document,
        painter,
        clock,
        totals: TickCounts::default(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
