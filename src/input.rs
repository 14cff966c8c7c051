use glam::Vec2;
use web_sys as web;

/// Canvas bounding box in CSS pixels.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct CssRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Map a client-space point into canvas backing-store pixels.
///
/// Returns `None` when the point lies outside the canvas or the canvas has
/// no area, which the core treats as "pointer absent".
#[inline]
pub fn client_to_canvas(client: Vec2, rect: CssRect, backing: Vec2) -> Option<Vec2> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let x_css = client.x - rect.left;
    let y_css = client.y - rect.top;
    if x_css < 0.0 || y_css < 0.0 || x_css > rect.width || y_css > rect.height {
        return None;
    }
    let p = Vec2::new(
        x_css / rect.width * backing.x,
        y_css / rect.height * backing.y,
    );
    p.is_finite().then_some(p)
}

#[inline]
pub fn css_rect(canvas: &web::HtmlCanvasElement) -> CssRect {
    let rect = canvas.get_bounding_client_rect();
    CssRect {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
    let backing = Vec2::new(canvas.width() as f32, canvas.height() as f32);
    client_to_canvas(client, css_rect(canvas), backing)
}
