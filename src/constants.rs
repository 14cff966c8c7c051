/// Host-side element ids and frame bookkeeping constants.
///
/// The page markup is owned by the surrounding site; these ids are the only
/// contract between it and the WASM front-end.
pub const CANVAS_ID: &str = "tunnel-canvas";
pub const HINT_ID: &str = "hint-overlay";
pub const RESET_BUTTON_ID: &str = "tunnel-reset";

// Text bursts are drawn with this family; size comes from the core
pub const TEXT_FONT_FAMILY: &str = "monospace";

// Stroke widths below this are invisible on high-DPI canvases
pub const MIN_STROKE_WIDTH: f64 = 0.5;

// Frame bookkeeping (in frames, ~60 per second)
pub const STATS_LOG_INTERVAL_FRAMES: u64 = 600;
pub const HINT_REFRESH_FRAMES: u64 = 30;
