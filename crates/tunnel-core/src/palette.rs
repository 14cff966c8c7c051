//! Cyclic palette interpolation.
//!
//! A palette is an ordered list of colors indexed cyclically: position `N`
//! wraps back to the first entry, so interpolation is continuous across the
//! last-to-first boundary.

use crate::color::Rgb;
use crate::constants::PALETTE_TIME_SCALE;
use smallvec::SmallVec;

pub type Palette = SmallVec<[Rgb; 8]>;

/// Returned for an empty palette instead of dividing by zero.
pub const FALLBACK_COLOR: Rgb = Rgb::GREEN;

pub fn default_shape_palette() -> Palette {
    [0x00ff00, 0xff00ff, 0x00ffff, 0xffff00]
        .into_iter()
        .map(rgb_from_u32)
        .collect()
}

pub fn default_background_palette() -> Palette {
    [0x000000, 0x4a0066, 0x661144, 0x114444]
        .into_iter()
        .map(rgb_from_u32)
        .collect()
}

#[inline]
fn rgb_from_u32(v: u32) -> Rgb {
    Rgb::from_u8((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

/// Position inside the palette after applying the time contribution.
///
/// With `rate == 0` the result depends on `offset` alone.
pub fn animated_offset(offset: f64, len: usize, time_ms: f64, rate: f32) -> f64 {
    let n = len as f64;
    let raw = if rate == 0.0 {
        offset
    } else {
        offset + time_ms * PALETTE_TIME_SCALE
    };
    let wrapped = raw.rem_euclid(n);
    // rem_euclid can round up to exactly n for tiny negative inputs
    if wrapped >= n || !wrapped.is_finite() {
        0.0
    } else {
        wrapped
    }
}

/// Map a continuous offset onto a color blended between two neighbouring
/// palette entries.
pub fn interpolate(offset: f64, palette: &[Rgb], time_ms: f64, rate: f32) -> Rgb {
    let len = palette.len();
    if len == 0 {
        return FALLBACK_COLOR;
    }
    let pos = animated_offset(offset, len, time_ms, rate);
    let base = pos.floor();
    let i1 = (base as usize) % len;
    let i2 = (i1 + 1) % len;
    let t = (pos - base) as f32;
    palette[i1].lerp(palette[i2], t)
}
