use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use tunnel_core::TunnelEngine;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed pointer position into the engine's shared pointer cell.
pub fn wire_pointer_handlers(canvas: web::HtmlCanvasElement, engine: Rc<RefCell<TunnelEngine>>) {
    wire_pointermove(&canvas, &engine);
    wire_pointerleave(&canvas, &engine);
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, engine: &Rc<RefCell<TunnelEngine>>) {
    let canvas_move = canvas.clone();
    let engine = engine.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas_move);
        engine.borrow().set_pointer(pos);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(canvas: &web::HtmlCanvasElement, engine: &Rc<RefCell<TunnelEngine>>) {
    let engine = engine.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        engine.borrow().set_pointer(None);
        log::debug!("[pointer] left canvas");
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
