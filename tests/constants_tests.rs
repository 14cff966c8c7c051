// Host-side tests for front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_distinct_and_bare() {
    let ids = [CANVAS_ID, HINT_ID, RESET_BUTTON_ID];
    for id in ids {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "{} should not carry a selector prefix", id);
        assert!(!id.contains(char::is_whitespace));
    }
    assert_ne!(CANVAS_ID, HINT_ID);
    assert_ne!(CANVAS_ID, RESET_BUTTON_ID);
    assert_ne!(HINT_ID, RESET_BUTTON_ID);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_intervals_are_positive() {
    assert!(STATS_LOG_INTERVAL_FRAMES > 0);
    assert!(HINT_REFRESH_FRAMES > 0);
    assert!(HINT_REFRESH_FRAMES <= STATS_LOG_INTERVAL_FRAMES);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn stroke_floor_is_sub_pixel() {
    assert!(MIN_STROKE_WIDTH > 0.0 && MIN_STROKE_WIDTH < 1.0);
}
