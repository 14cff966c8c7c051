//! Ownership of the live entity collection: spawn timing, per-tick physics
//! and eviction.

use crate::constants::*;
use crate::entity::{rotation_speed, Entity, EntityKind, SpawnParams};
use crate::settings::{Limits, SharedPointer, SharedSettings};
use glam::Vec2;

/// Canvas size in pixels; degenerate sizes are clamped to one pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        let clamp = |v: f32| if v.is_finite() { v.max(1.0) } else { 1.0 };
        Self {
            width: clamp(width),
            height: clamp(height),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn diagonal(&self) -> f32 {
        Vec2::new(self.width, self.height).length()
    }

    pub fn shape_max_size(&self) -> f32 {
        self.diagonal() * SHAPE_MAX_SIZE_DIAGONALS
    }

    pub fn text_max_size(&self) -> f32 {
        self.width.max(self.height) * TEXT_MAX_SIZE_EXTENTS
    }
}

/// Per-tick counters reported back to the frame driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickCounts {
    pub shapes_spawned: usize,
    pub texts_spawned: usize,
    pub evicted: usize,
}

pub struct EntityManager {
    settings: SharedSettings,
    pointer: SharedPointer,
    limits: Limits,
    entities: Vec<Entity>,
    last_shape_spawn_ms: f64,
    last_text_spawn_ms: f64,
    /// Extra wait applied once after the word cursor wraps.
    text_hold_ms: f64,
    word_cursor: usize,
    color_index: f64,
}

impl EntityManager {
    pub fn new(
        settings: SharedSettings,
        pointer: SharedPointer,
        limits: Limits,
        now_ms: f64,
    ) -> Self {
        Self {
            settings,
            pointer,
            limits,
            entities: Vec::with_capacity(limits.max_entities),
            last_shape_spawn_ms: now_ms,
            last_text_spawn_ms: now_ms,
            text_hold_ms: 0.0,
            word_cursor: 0,
            color_index: 0.0,
        }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn color_index(&self) -> f64 {
        self.color_index
    }

    /// Drop every entity and restart the spawn timers and the color index.
    pub fn reset(&mut self, now_ms: f64) {
        self.entities.clear();
        self.last_shape_spawn_ms = now_ms;
        self.last_text_spawn_ms = now_ms;
        self.text_hold_ms = 0.0;
        self.word_cursor = 0;
        self.color_index = 0.0;
    }

    /// Advance the global color index, or reset it when cycling is off.
    pub fn advance_color_index(&mut self) {
        let cycling = self.settings.borrow().color_cycling;
        if cycling > 0.0 {
            self.color_index += cycling as f64 * COLOR_INDEX_STEP;
        } else {
            self.color_index = 0.0;
        }
    }

    #[inline]
    fn has_room(&self) -> bool {
        self.entities.len() < self.limits.max_entities
    }

    pub fn spawn_due(&mut self, now_ms: f64, frame: u64, viewport: Viewport) -> TickCounts {
        let mut counts = TickCounts::default();
        if self.shape_due(now_ms) {
            self.spawn(EntityKind::Shape, now_ms, frame, viewport);
            self.last_shape_spawn_ms = now_ms;
            counts.shapes_spawned += 1;
        }
        if self.text_due(now_ms) {
            if let Some(word) = self.next_word() {
                self.spawn(EntityKind::Text { text: word }, now_ms, frame, viewport);
                self.last_text_spawn_ms = now_ms;
                counts.texts_spawned += 1;
            }
        }
        counts
    }

    fn shape_due(&self, now_ms: f64) -> bool {
        let rate = self.settings.borrow().spawn_rate;
        rate > 0.0 && now_ms - self.last_shape_spawn_ms >= 1000.0 / rate as f64 && self.has_room()
    }

    fn text_due(&self, now_ms: f64) -> bool {
        let settings = self.settings.borrow();
        let rate = settings.text_spawn_rate;
        if settings.words().next().is_none() || rate <= 0.0 {
            return false;
        }
        let interval = 1000.0 / rate as f64 + self.text_hold_ms;
        now_ms - self.last_text_spawn_ms >= interval && self.has_room()
    }

    /// Next word of the payload; arms the post-wrap delay after the last one.
    fn next_word(&mut self) -> Option<String> {
        let settings = self.settings.borrow();
        let count = settings.words().count();
        if count == 0 {
            return None;
        }
        let idx = self.word_cursor % count;
        let word = settings.words().nth(idx)?.to_string();
        self.word_cursor = (idx + 1) % count;
        self.text_hold_ms = if self.word_cursor == 0 {
            (settings.text_delay_time.max(0.0) * 1000.0) as f64
        } else {
            0.0
        };
        Some(word)
    }

    /// Spawn point in canvas pixels: the pointer when following it, else the
    /// configured origin with optional sine/cosine automation.
    pub fn spawn_point(&self, frame: u64, viewport: Viewport) -> Vec2 {
        let settings = self.settings.borrow();
        if settings.mouse_follow {
            if let Some(p) = self.pointer.get() {
                return p;
            }
        }
        let phase = frame as f32 * ORIGIN_PHASE_PER_FRAME;
        let x_pct = if settings.origin_x_automation > 0.0 {
            settings.origin_x
                + (phase * settings.origin_x_automation).sin() * ORIGIN_AUTOMATION_SPAN_PCT
        } else {
            settings.origin_x
        };
        let y_pct = if settings.origin_y_automation > 0.0 {
            settings.origin_y
                + (phase * settings.origin_y_automation).cos() * ORIGIN_AUTOMATION_SPAN_PCT
        } else {
            settings.origin_y
        };
        Vec2::new(x_pct / 100.0 * viewport.width, y_pct / 100.0 * viewport.height)
    }

    fn spawn(&mut self, kind: EntityKind, now_ms: f64, frame: u64, viewport: Viewport) {
        let max_size = match kind {
            EntityKind::Shape => viewport.shape_max_size(),
            EntityKind::Text { .. } => viewport.text_max_size(),
        };
        let position = self.spawn_point(frame, viewport);
        let (origin, speed) = {
            let s = self.settings.borrow();
            let origin = Vec2::new(
                s.origin_x / 100.0 * viewport.width,
                s.origin_y / 100.0 * viewport.height,
            );
            (origin, s.animation_speed)
        };
        let entity = Entity::new(
            kind,
            SpawnParams {
                position,
                origin,
                speed,
                max_size,
                now_ms,
                color_offset: self.color_index,
            },
        );
        log::debug!(
            "[tunnel] spawn {} at ({:.1},{:.1}) max_size={:.0} live={}",
            if entity.is_text() { "text" } else { "shape" },
            position.x,
            position.y,
            max_size,
            self.entities.len() + 1
        );
        self.entities.push(entity);
    }

    /// Apply growth, rotation and recentering to every live entity.
    pub fn update(&mut self, frame: u64, viewport: Viewport) {
        let center = viewport.center();
        for entity in &mut self.entities {
            let speed = {
                let s = self.settings.borrow();
                let pointer_x = if s.mouse_rotation {
                    self.pointer.get().map(|p| p.x)
                } else {
                    None
                };
                if entity.is_text() {
                    let v = rotation_speed(
                        s.text_rotation_speed,
                        s.text_auto_rotation,
                        frame,
                        pointer_x,
                        viewport.width,
                    );
                    if s.invert_text_rotation {
                        -v
                    } else {
                        v
                    }
                } else {
                    rotation_speed(
                        s.rotation_speed,
                        s.auto_rotation,
                        frame,
                        pointer_x,
                        viewport.width,
                    )
                }
            };
            entity.grow();
            entity.rotate(speed);
            entity.recenter(center, RECENTER_RATE);
        }
    }

    /// Remove oversized entities and text past its lifetime budget.
    pub fn evict(&mut self, now_ms: f64) -> usize {
        let before = self.entities.len();
        self.entities.retain(|e| !e.is_expired(now_ms));
        let evicted = before - self.entities.len();
        if evicted > 0 {
            log::debug!("[tunnel] evicted {} live={}", evicted, self.entities.len());
        }
        evicted
    }
}
