//! JS-facing control surface. The page's sliders, toggles and pickers call
//! these; each write lands in the shared settings and is read by the next tick.

use crate::frame::Clock;
use std::cell::RefCell;
use std::rc::Rc;
use tunnel_core::{PaletteTarget, ShapeKind, TunnelEngine};
use wasm_bindgen::prelude::*;

pub struct AppHandle {
    pub engine: Rc<RefCell<TunnelEngine>>,
    pub paused: Rc<RefCell<bool>>,
    pub clock: Clock,
}

thread_local! {
    static APP: RefCell<Option<AppHandle>> = const { RefCell::new(None) };
}

pub fn install(handle: AppHandle) {
    APP.with(|app| *app.borrow_mut() = Some(handle));
}

fn with_app<R>(f: impl FnOnce(&AppHandle) -> R) -> Option<R> {
    APP.with(|app| match app.borrow().as_ref() {
        Some(handle) => Some(f(handle)),
        None => {
            log::warn!("[controls] called before init");
            None
        }
    })
}

#[wasm_bindgen]
pub fn set_param(name: &str, value: f32) -> bool {
    with_app(|app| {
        let engine = app.engine.borrow();
        let settings = engine.settings();
        let result = settings.borrow_mut().set_param(name, value);
        match result {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[controls] {}", e);
                false
            }
        }
    })
    .unwrap_or(false)
}

#[wasm_bindgen]
pub fn set_toggle(name: &str, on: bool) -> bool {
    with_app(|app| {
        let engine = app.engine.borrow();
        let settings = engine.settings();
        let result = settings.borrow_mut().set_toggle(name, on);
        match result {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[controls] {}", e);
                false
            }
        }
    })
    .unwrap_or(false)
}

#[wasm_bindgen]
pub fn set_text(text: &str) {
    with_app(|app| {
        let engine = app.engine.borrow();
        let max_len = engine.manager().limits().max_text_len;
        engine.settings().borrow_mut().set_text(text, max_len);
    });
}

#[wasm_bindgen]
pub fn set_text_color(hex: &str) -> bool {
    with_app(|app| {
        let engine = app.engine.borrow();
        let settings = engine.settings();
        let result = settings.borrow_mut().set_text_color(hex);
        match result {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[controls] text color: {}", e);
                false
            }
        }
    })
    .unwrap_or(false)
}

/// `target` is "shapes" or "background"; `colors` is an array of hex strings.
#[wasm_bindgen]
pub fn set_palette(target: &str, colors: js_sys::Array) -> bool {
    let target = match target {
        "shapes" => PaletteTarget::Shapes,
        "background" => PaletteTarget::Background,
        other => {
            log::warn!("[controls] unknown palette target {:?}", other);
            return false;
        }
    };
    let hexes: Vec<String> = colors.iter().filter_map(|v| v.as_string()).collect();
    with_app(|app| {
        let engine = app.engine.borrow();
        let settings = engine.settings();
        let result = settings.borrow_mut().set_palette(target, hexes.as_slice());
        match result {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[controls] palette: {}", e);
                false
            }
        }
    })
    .unwrap_or(false)
}

#[wasm_bindgen]
pub fn set_shape(name: &str) -> bool {
    let Some(kind) = ShapeKind::from_name(name) else {
        log::warn!("[controls] unknown shape {:?}", name);
        return false;
    };
    with_app(|app| {
        app.engine.borrow().settings().borrow_mut().shape_kind = kind;
        true
    })
    .unwrap_or(false)
}

#[wasm_bindgen]
pub fn set_paused(paused: bool) {
    with_app(|app| *app.paused.borrow_mut() = paused);
}

#[wasm_bindgen]
pub fn reset() {
    with_app(|app| app.engine.borrow_mut().reset(app.clock.now_ms()));
}

#[wasm_bindgen]
pub fn entity_count() -> usize {
    with_app(|app| app.engine.borrow().manager().len()).unwrap_or(0)
}
