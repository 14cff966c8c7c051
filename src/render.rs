use crate::constants::{MIN_STROKE_WIDTH, TEXT_FONT_FAMILY};
use tunnel_core::{shape_outline, DrawCommand, Rgb, ShapeKind};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Rasterizes core draw commands onto a 2D canvas context.
pub struct Painter {
    ctx: web::CanvasRenderingContext2d,
}

impl Painter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!(format!("get_context error: {:?}", e)))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { ctx })
    }

    pub fn paint(&self, background: Rgb, commands: &[DrawCommand<'_>], width: f64, height: f64) {
        let ctx = &self.ctx;
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(&background.to_css(255.0));
        ctx.fill_rect(0.0, 0.0, width, height);
        for cmd in commands {
            match cmd {
                DrawCommand::Shape {
                    kind,
                    center,
                    rotation,
                    size,
                    color,
                    alpha,
                    stroke_width,
                } => {
                    ctx.save();
                    _ = ctx.translate(center.x as f64, center.y as f64);
                    _ = ctx.rotate(*rotation as f64);
                    ctx.set_stroke_style_str(&color.to_css(*alpha));
                    ctx.set_line_width((*stroke_width as f64).max(MIN_STROKE_WIDTH));
                    self.outline(*kind, *size);
                    ctx.stroke();
                    ctx.restore();
                }
                DrawCommand::Text {
                    text,
                    center,
                    rotation,
                    font_size,
                    color,
                    alpha,
                } => {
                    if *alpha <= 0.0 {
                        continue;
                    }
                    ctx.save();
                    _ = ctx.translate(center.x as f64, center.y as f64);
                    _ = ctx.rotate(*rotation as f64);
                    ctx.set_font(&format!("{:.1}px {}", font_size, TEXT_FONT_FAMILY));
                    ctx.set_text_align("center");
                    ctx.set_text_baseline("middle");
                    ctx.set_fill_style_str(&color.to_css(*alpha));
                    _ = ctx.fill_text(text, 0.0, 0.0);
                    ctx.restore();
                }
            }
        }
    }

    // Path around the origin; caller has already translated and rotated.
    fn outline(&self, kind: ShapeKind, size: f32) {
        let ctx = &self.ctx;
        ctx.begin_path();
        if kind == ShapeKind::Circle {
            let r = (size as f64 / 2.0).max(0.0);
            _ = ctx.arc(0.0, 0.0, r, 0.0, std::f64::consts::TAU);
            return;
        }
        let points = shape_outline(kind, size);
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            ctx.line_to(p.x as f64, p.y as f64);
        }
        ctx.close_path();
    }
}
