use crate::constants::{HINT_REFRESH_FRAMES, STATS_LOG_INTERVAL_FRAMES};
use crate::overlay;
use crate::render::Painter;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use tunnel_core::{FrameSummary, TickCounts, TunnelEngine};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Milliseconds since start-up; the core's time base.
#[derive(Clone, Copy)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

pub struct FrameContext {
    pub engine: Rc<RefCell<TunnelEngine>>,
    pub paused: Rc<RefCell<bool>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub painter: Painter,
    pub clock: Clock,
    pub totals: TickCounts,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now_ms = self.clock.now_ms();
        let width = self.canvas.width();
        let height = self.canvas.height();
        let paused = *self.paused.borrow();

        let engine_rc = self.engine.clone();
        let mut engine = engine_rc.borrow_mut();
        let vp = engine.viewport();
        if vp.width != width as f32 || vp.height != height as f32 {
            engine.resize(width as f32, height as f32);
        }

        if !paused {
            let summary = engine.tick(now_ms);
            record(&mut self.totals, &summary);
            if summary.frame % HINT_REFRESH_FRAMES == 0 {
                let kind = engine.settings().borrow().shape_kind;
                overlay::update_hint(&self.document, kind, summary.live, paused);
            }
        }

        let mut commands = Vec::with_capacity(engine.manager().len());
        let background = engine.render(now_ms, &mut commands);
        self.painter
            .paint(background, &commands, width as f64, height as f64);
    }
}

fn record(totals: &mut TickCounts, summary: &FrameSummary) {
    totals.shapes_spawned += summary.counts.shapes_spawned;
    totals.texts_spawned += summary.counts.texts_spawned;
    totals.evicted += summary.counts.evicted;
    if summary.frame % STATS_LOG_INTERVAL_FRAMES == 0 {
        log::info!(
            "[frame] {} live={} shapes={} texts={} evicted={}",
            summary.frame,
            summary.live,
            totals.shapes_spawned,
            totals.texts_spawned,
            totals.evicted
        );
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
