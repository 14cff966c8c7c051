//! Frame driver: one call per display refresh.

use crate::color::Rgb;
use crate::lifecycle::{EntityManager, TickCounts, Viewport};
use crate::render::{DrawCommand, RenderPass};
use crate::settings::{Limits, Settings, SharedPointer, SharedSettings};
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

/// What happened during one tick, for the host to log or display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameSummary {
    pub frame: u64,
    pub counts: TickCounts,
    pub live: usize,
}

/// Output of [`TunnelEngine::frame`].
#[derive(Clone, Debug)]
pub struct Frame<'a> {
    pub summary: FrameSummary,
    pub background: Rgb,
    pub commands: Vec<DrawCommand<'a>>,
}

pub struct TunnelEngine {
    settings: SharedSettings,
    pointer: SharedPointer,
    manager: EntityManager,
    render: RenderPass,
    viewport: Viewport,
    frame: u64,
}

impl TunnelEngine {
    pub fn new(settings: SharedSettings, viewport: Viewport, limits: Limits, now_ms: f64) -> Self {
        let pointer: SharedPointer = Rc::new(Cell::new(None));
        Self {
            manager: EntityManager::new(settings.clone(), pointer.clone(), limits, now_ms),
            render: RenderPass::new(settings.clone()),
            settings,
            pointer,
            viewport,
            frame: 0,
        }
    }

    /// Engine with default settings and limits.
    pub fn with_defaults(viewport: Viewport, now_ms: f64) -> Self {
        Self::new(Settings::default().shared(), viewport, Limits::default(), now_ms)
    }

    /// Handle the control panel writes into.
    pub fn settings(&self) -> SharedSettings {
        self.settings.clone()
    }

    /// Handle the host's pointer listeners write into.
    pub fn pointer(&self) -> SharedPointer {
        self.pointer.clone()
    }

    pub fn set_pointer(&self, pos: Option<Vec2>) {
        self.pointer.set(pos.filter(|p| p.is_finite()));
    }

    pub fn manager(&self) -> &EntityManager {
        &self.manager
    }

    pub fn render_pass(&self) -> &RenderPass {
        &self.render
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// New geometry applies to later spawns and renders only; live entities
    /// keep the max size they were given.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        log::info!(
            "[tunnel] resize {}x{}",
            self.viewport.width,
            self.viewport.height
        );
    }

    /// Drop all entities, restore default settings and restart the timers.
    pub fn reset(&mut self, now_ms: f64) {
        *self.settings.borrow_mut() = Settings::default();
        self.manager.reset(now_ms);
        self.render.reset();
        log::info!("[tunnel] reset");
    }

    /// Advance background and color state, spawn, update and evict.
    pub fn tick(&mut self, now_ms: f64) -> FrameSummary {
        self.frame += 1;
        self.render.advance_background();
        self.manager.advance_color_index();
        let mut counts = self.manager.spawn_due(now_ms, self.frame, self.viewport);
        self.manager.update(self.frame, self.viewport);
        counts.evicted = self.manager.evict(now_ms);
        FrameSummary {
            frame: self.frame,
            counts,
            live: self.manager.len(),
        }
    }

    /// Append this frame's draw commands and return the background color.
    pub fn render<'a>(&'a self, now_ms: f64, out: &mut Vec<DrawCommand<'a>>) -> Rgb {
        self.render.draw(self.manager.entities(), now_ms, out);
        self.render.background_color()
    }

    pub fn frame(&mut self, now_ms: f64) -> Frame<'_> {
        let summary = self.tick(now_ms);
        let mut commands = Vec::with_capacity(self.manager.len());
        let background = self.render(now_ms, &mut commands);
        Frame {
            summary,
            background,
            commands,
        }
    }
}
