use super::keymap::{action_for_event, is_text_entry, KeyAction};
use crate::dom;
use crate::frame::Clock;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use tunnel_core::TunnelEngine;
use wasm_bindgen::JsCast;
use web_sys as web;

fn target_is_text_entry(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::HtmlElement>().ok())
        .map(|el| is_text_entry(&el.tag_name(), el.is_content_editable()))
        .unwrap_or(false)
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    engine: &Rc<RefCell<TunnelEngine>>,
    paused: &Rc<RefCell<bool>>,
    canvas: &web::HtmlCanvasElement,
    clock: Clock,
) {
    let Some(action) = action_for_event(&ev.key(), target_is_text_entry(ev)) else {
        return;
    };
    let document = dom::window_document();
    match action {
        KeyAction::TogglePause => {
            let mut p = paused.borrow_mut();
            *p = !*p;
            log::info!("[keys] paused={}", *p);
            ev.prevent_default();
        }
        KeyAction::Reset => {
            engine.borrow_mut().reset(clock.now_ms());
        }
        KeyAction::Shape(kind) => {
            let eng = engine.borrow();
            eng.settings().borrow_mut().shape_kind = kind;
            log::info!("[keys] shape={}", kind.name());
            if let Some(doc) = document.as_ref() {
                overlay::update_hint(doc, kind, eng.manager().len(), *paused.borrow());
                overlay::show(doc);
            }
        }
        KeyAction::ToggleFullscreen => {
            if let Some(doc) = document.as_ref() {
                if doc.fullscreen_element().is_some() {
                    doc.exit_fullscreen();
                } else {
                    _ = canvas.request_fullscreen();
                }
            }
            ev.prevent_default();
        }
        KeyAction::ExitFullscreen => {
            if let Some(doc) = document.as_ref() {
                doc.exit_fullscreen();
            }
        }
        KeyAction::ToggleHint => {
            if let Some(doc) = document.as_ref() {
                overlay::toggle(doc);
            }
            ev.prevent_default();
        }
    }
}

pub fn wire_global_keydown(
    engine: Rc<RefCell<TunnelEngine>>,
    paused: Rc<RefCell<bool>>,
    canvas: web::HtmlCanvasElement,
    clock: Clock,
) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &engine, &paused, &canvas, clock);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
