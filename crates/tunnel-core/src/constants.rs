// Tunnel tuning constants shared by the simulation and the render pass.

// Capacity and text bounds (defaults for `Limits`)
pub const DEFAULT_MAX_ENTITIES: usize = 200;
pub const DEFAULT_MAX_TEXT_LEN: usize = 2000;

// Growth model
pub const INITIAL_SIZE: f32 = 1.0;
pub const BASE_GROWTH_RATE: f32 = 1.0;
pub const GROWTH_ACCELERATION_SEED: f32 = 0.001;
pub const ACCELERATION_MULTIPLIER_START: f32 = 1.0;
pub const ACCELERATION_MULTIPLIER_STEP: f32 = 0.001; // added every tick, never reset
pub const COMPOUND_ACCELERATION_SCALE: f32 = 2.0;
pub const MIN_SIZE_FACTOR: f32 = 0.1; // floor for the growth factor, also the NaN fallback

// Max size relative to canvas geometry at spawn time
pub const SHAPE_MAX_SIZE_DIAGONALS: f32 = 4.0;
pub const TEXT_MAX_SIZE_EXTENTS: f32 = 8.0;

// Rotation
pub const ROTATION_PHASE_PER_FRAME: f32 = 0.01;
pub const ROTATION_BLEND: f32 = 0.6; // fraction of the way toward the oscillating target
pub const ROTATION_STEP_SCALE: f32 = 0.01; // radians per unit of speed per tick
pub const POINTER_ROTATION_SCALE: f32 = 2.0;

// Recentering: factor = 1 - exp(-size * k)
pub const RECENTER_RATE: f32 = 0.000_06;

// Automated origin
pub const ORIGIN_PHASE_PER_FRAME: f32 = 0.05;
pub const ORIGIN_AUTOMATION_SPAN_PCT: f32 = 30.0;

// Text bursts
pub const TEXT_MAX_LIFETIME_MS: f64 = 8000.0; // fixed, not derived from the visible/fade sliders
pub const TEXT_FONT_DIVISOR: f32 = 6.0;
pub const TEXT_FONT_SIZE_LIMIT: f32 = 500.0; // glyphs at or above this are not rasterized

// Color cycling
pub const COLOR_INDEX_STEP: f64 = 0.01; // global index += color_cycling * step per tick
pub const PALETTE_TIME_SCALE: f64 = 0.0001; // palette positions per millisecond
pub const BACKGROUND_CYCLE_STEP: f32 = 0.001;

// Triangle height relative to its base
pub const TRIANGLE_HEIGHT_RATIO: f32 = 0.866;

// Alpha range
pub const ALPHA_OPAQUE: f32 = 255.0;
