//! Tunnel entities and their per-tick physics.
//!
//! Shapes and text bursts share one physics body; the variant only decides
//! how the entity is drawn and whether the text lifetime budget applies.

use crate::constants::*;
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum EntityKind {
    Shape,
    Text { text: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub kind: EntityKind,
    pub position: Vec2,
    /// Base origin at spawn, before origin automation was applied.
    pub origin: Vec2,
    pub size: f32,
    /// Radians, unbounded.
    pub rotation: f32,
    /// Animation speed captured at spawn.
    pub speed: f32,
    pub growth_rate: f32,
    pub growth_acceleration: f32,
    pub acceleration_multiplier: f32,
    pub max_size: f32,
    pub spawn_ms: f64,
    /// Palette anchor captured from the global color index at spawn.
    pub color_offset: f64,
}

/// Values an entity needs from the spawn site.
#[derive(Clone, Copy, Debug)]
pub struct SpawnParams {
    pub position: Vec2,
    pub origin: Vec2,
    pub speed: f32,
    pub max_size: f32,
    pub now_ms: f64,
    pub color_offset: f64,
}

impl Entity {
    pub fn new(kind: EntityKind, p: SpawnParams) -> Self {
        Self {
            kind,
            position: p.position,
            origin: p.origin,
            size: INITIAL_SIZE,
            rotation: 0.0,
            speed: sanitize(p.speed, 0.0),
            growth_rate: BASE_GROWTH_RATE,
            growth_acceleration: GROWTH_ACCELERATION_SEED,
            acceleration_multiplier: ACCELERATION_MULTIPLIER_START,
            max_size: sanitize(p.max_size, INITIAL_SIZE),
            spawn_ms: p.now_ms,
            color_offset: if p.color_offset.is_finite() {
                p.color_offset
            } else {
                0.0
            },
        }
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.kind, EntityKind::Text { .. })
    }

    #[inline]
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            EntityKind::Text { text } => Some(text),
            EntityKind::Shape => None,
        }
    }

    #[inline]
    pub fn age_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.spawn_ms
    }

    /// Compounding growth: the acceleration multiplier rises every tick, so
    /// growth speeds up the longer the entity lives.
    pub fn grow(&mut self) {
        self.acceleration_multiplier += ACCELERATION_MULTIPLIER_STEP;
        let compound =
            self.growth_acceleration * self.acceleration_multiplier * COMPOUND_ACCELERATION_SCALE;
        let factor = size_factor(self.size, compound);
        let step = self.speed * self.growth_rate * factor;
        if step.is_finite() && step > 0.0 {
            self.size += step;
        }
    }

    #[inline]
    pub fn rotate(&mut self, speed: f32) {
        if speed.is_finite() {
            self.rotation += speed * ROTATION_STEP_SCALE;
        }
    }

    /// Exponential approach toward `center`; bigger entities converge faster.
    pub fn recenter(&mut self, center: Vec2, rate: f32) {
        let factor = recenter_factor(self.size, rate);
        let next = self.position + (center - self.position) * factor;
        if next.is_finite() {
            self.position = next;
        }
    }

    /// Removal predicate evaluated once per tick after the update step.
    pub fn is_expired(&self, now_ms: f64) -> bool {
        if self.size > self.max_size {
            return true;
        }
        self.is_text() && self.age_ms(now_ms) > TEXT_MAX_LIFETIME_MS
    }
}

#[inline]
pub fn size_factor(size: f32, compound_acceleration: f32) -> f32 {
    let f = 1.0 + size * compound_acceleration;
    if f.is_finite() {
        f.max(MIN_SIZE_FACTOR)
    } else {
        MIN_SIZE_FACTOR
    }
}

#[inline]
pub fn recenter_factor(size: f32, rate: f32) -> f32 {
    let f = 1.0 - (-size * rate).exp();
    if f.is_finite() {
        f.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Rotation speed applied this tick.
///
/// With a pointer steering rotation the speed follows the normalized
/// horizontal offset from the canvas center; otherwise the base speed is
/// pulled part of the way toward an oscillating target.
pub fn rotation_speed(
    base_speed: f32,
    auto_amplitude: f32,
    frame: u64,
    pointer_x: Option<f32>,
    width: f32,
) -> f32 {
    if let Some(px) = pointer_x {
        let half = (width / 2.0).max(0.5);
        let norm = ((px - half) / half).clamp(-1.0, 1.0);
        return norm * POINTER_ROTATION_SCALE;
    }
    let phase = frame as f32 * ROTATION_PHASE_PER_FRAME;
    let target = phase.sin() * auto_amplitude;
    base_speed + (target - base_speed) * ROTATION_BLEND
}

#[inline]
fn sanitize(v: f32, fallback: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        fallback
    }
}
