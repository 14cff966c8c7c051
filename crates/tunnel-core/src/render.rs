//! Conversion of the live entity collection into host draw commands.

use crate::color::Rgb;
use crate::constants::*;
use crate::entity::{Entity, EntityKind};
use crate::palette;
use crate::settings::{SharedSettings, ShapeKind};
use glam::Vec2;

/// One primitive for the host rasterizer. Shapes are outline-only.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand<'a> {
    Shape {
        kind: ShapeKind,
        center: Vec2,
        rotation: f32,
        size: f32,
        color: Rgb,
        /// 0..255
        alpha: f32,
        stroke_width: f32,
    },
    Text {
        text: &'a str,
        center: Vec2,
        rotation: f32,
        font_size: f32,
        color: Rgb,
        /// 0..255
        alpha: f32,
    },
}

/// Text alpha for an entity of the given age: opaque through the visible
/// window, then a linear fade to zero over the fade window.
pub fn text_alpha(age_ms: f64, visible_s: f32, fade_s: f32) -> f32 {
    let visible_ms = visible_s.max(0.0) as f64 * 1000.0;
    if age_ms <= visible_ms {
        return ALPHA_OPAQUE;
    }
    let fade_ms = fade_s.max(0.0) as f64 * 1000.0;
    if fade_ms <= 0.0 {
        return 0.0;
    }
    let faded = (age_ms - visible_ms) / fade_ms * ALPHA_OPAQUE as f64;
    (ALPHA_OPAQUE as f64 - faded).max(0.0) as f32
}

/// Outline vertices for polygonal shapes, relative to the entity center and
/// before rotation. Circles have no vertices.
pub fn shape_outline(kind: ShapeKind, size: f32) -> Vec<Vec2> {
    let half = size / 2.0;
    match kind {
        ShapeKind::Circle => Vec::new(),
        ShapeKind::Square => vec![
            Vec2::new(-half, -half),
            Vec2::new(half, -half),
            Vec2::new(half, half),
            Vec2::new(-half, half),
        ],
        ShapeKind::Triangle => {
            let h = size * TRIANGLE_HEIGHT_RATIO;
            vec![
                Vec2::new(0.0, -h / 2.0),
                Vec2::new(-half, h / 2.0),
                Vec2::new(half, h / 2.0),
            ]
        }
        ShapeKind::Hexagon => (0..6)
            .map(|i| {
                let a = std::f32::consts::FRAC_PI_3 * i as f32;
                Vec2::new(a.cos(), a.sin()) * half
            })
            .collect(),
    }
}

/// Owns the background cycle accumulator and emits per-entity commands.
pub struct RenderPass {
    settings: SharedSettings,
    background_cycle_time: f64,
}

impl RenderPass {
    pub fn new(settings: SharedSettings) -> Self {
        Self {
            settings,
            background_cycle_time: 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.background_cycle_time = 0.0;
    }

    pub fn background_cycle_time(&self) -> f64 {
        self.background_cycle_time
    }

    /// Step the background accumulator; it only moves while cycling is on.
    pub fn advance_background(&mut self) {
        let speed = self.settings.borrow().background_cycling;
        if speed > 0.0 {
            self.background_cycle_time += (speed * BACKGROUND_CYCLE_STEP) as f64;
        }
    }

    pub fn background_color(&self) -> Rgb {
        let s = self.settings.borrow();
        palette::interpolate(
            self.background_cycle_time,
            &s.background_palette,
            0.0,
            s.background_cycling,
        )
    }

    pub fn entity_color(&self, entity: &Entity, now_ms: f64) -> Rgb {
        let s = self.settings.borrow();
        if entity.is_text() && s.static_text_color {
            return s.text_color;
        }
        palette::interpolate(
            entity.color_offset,
            &s.shape_palette,
            now_ms,
            s.color_cycling,
        )
    }

    pub fn entity_alpha(&self, entity: &Entity, now_ms: f64) -> f32 {
        let s = self.settings.borrow();
        match entity.kind {
            EntityKind::Shape => s.shape_transparency.clamp(0.0, ALPHA_OPAQUE),
            EntityKind::Text { .. } => text_alpha(
                entity.age_ms(now_ms),
                s.text_visible_time,
                s.text_fade_time,
            ),
        }
    }

    /// Append draw commands for `entities` in collection order.
    pub fn draw<'a>(&self, entities: &'a [Entity], now_ms: f64, out: &mut Vec<DrawCommand<'a>>) {
        for entity in entities {
            let color = self.entity_color(entity, now_ms);
            let alpha = self.entity_alpha(entity, now_ms);
            match &entity.kind {
                EntityKind::Shape => {
                    let (kind, stroke_width) = {
                        let s = self.settings.borrow();
                        (s.shape_kind, s.stroke_width)
                    };
                    out.push(DrawCommand::Shape {
                        kind,
                        center: entity.position,
                        rotation: entity.rotation,
                        size: entity.size,
                        color,
                        alpha,
                        stroke_width,
                    });
                }
                EntityKind::Text { text } => {
                    let font_size = entity.size / TEXT_FONT_DIVISOR;
                    if font_size >= TEXT_FONT_SIZE_LIMIT {
                        continue;
                    }
                    out.push(DrawCommand::Text {
                        text: text.as_str(),
                        center: entity.position,
                        rotation: entity.rotation,
                        font_size,
                        color,
                        alpha,
                    });
                }
            }
        }
    }
}
