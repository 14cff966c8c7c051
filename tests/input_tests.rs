// Host-side tests for pointer mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

fn rect(left: f32, top: f32, width: f32, height: f32) -> CssRect {
    CssRect {
        left,
        top,
        width,
        height,
    }
}

#[test]
fn maps_css_pixels_to_backing_pixels() {
    // 400x300 CSS box at a 2x device pixel ratio
    let r = rect(10.0, 20.0, 400.0, 300.0);
    let backing = Vec2::new(800.0, 600.0);
    let p = client_to_canvas(Vec2::new(210.0, 170.0), r, backing).unwrap();
    assert_eq!(p, Vec2::new(400.0, 300.0));
}

#[test]
fn corners_are_inside() {
    let r = rect(0.0, 0.0, 100.0, 50.0);
    let backing = Vec2::new(100.0, 50.0);
    assert_eq!(
        client_to_canvas(Vec2::ZERO, r, backing),
        Some(Vec2::new(0.0, 0.0))
    );
    assert_eq!(
        client_to_canvas(Vec2::new(100.0, 50.0), r, backing),
        Some(Vec2::new(100.0, 50.0))
    );
}

#[test]
fn outside_points_read_as_absent() {
    let r = rect(10.0, 10.0, 100.0, 100.0);
    let backing = Vec2::new(100.0, 100.0);
    assert_eq!(client_to_canvas(Vec2::new(5.0, 50.0), r, backing), None);
    assert_eq!(client_to_canvas(Vec2::new(50.0, 111.0), r, backing), None);
}

#[test]
fn zero_sized_canvas_has_no_pointer() {
    let backing = Vec2::new(100.0, 100.0);
    assert_eq!(
        client_to_canvas(Vec2::ZERO, rect(0.0, 0.0, 0.0, 100.0), backing),
        None
    );
    assert_eq!(
        client_to_canvas(Vec2::ZERO, CssRect::default(), backing),
        None
    );
}

#[test]
fn non_finite_input_is_rejected() {
    let r = rect(0.0, 0.0, 100.0, 100.0);
    let backing = Vec2::new(100.0, 100.0);
    assert_eq!(client_to_canvas(Vec2::new(f32::NAN, 10.0), r, backing), None);
}
