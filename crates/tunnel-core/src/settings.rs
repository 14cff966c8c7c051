//! Live tunnel parameters.
//!
//! The control panel writes into a [`SharedSettings`] handle at any time; the
//! simulation reads it at every use site during a tick rather than copying a
//! snapshot up front, so slider edits take effect on the very next read.

use crate::color::{ColorError, Rgb};
use crate::constants::{DEFAULT_MAX_ENTITIES, DEFAULT_MAX_TEXT_LEN};
use crate::palette::{default_background_palette, default_shape_palette, Palette};
use fnv::FnvHashMap;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use thiserror::Error;

pub type SharedSettings = Rc<RefCell<Settings>>;

/// Pointer position in canvas-local pixels, `None` while off-canvas.
pub type SharedPointer = Rc<Cell<Option<Vec2>>>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("unknown parameter `{0}`")]
    UnknownParam(String),
    #[error("unknown toggle `{0}`")]
    UnknownToggle(String),
    #[error("parameter `{name}` got non-finite value {value}")]
    NotFinite { name: String, value: f32 },
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error(transparent)]
    Color(#[from] ColorError),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    #[default]
    Square,
    Triangle,
    Hexagon,
}

impl ShapeKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "circle" => Some(ShapeKind::Circle),
            "square" => Some(ShapeKind::Square),
            "triangle" => Some(ShapeKind::Triangle),
            "hexagon" => Some(ShapeKind::Hexagon),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Hexagon => "hexagon",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteTarget {
    Shapes,
    Background,
}

/// Structural bounds that do not change while the tunnel runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub max_entities: usize,
    pub max_text_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_entities: DEFAULT_MAX_ENTITIES,
            max_text_len: DEFAULT_MAX_TEXT_LEN,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub animation_speed: f32,
    pub stroke_width: f32,
    pub rotation_speed: f32,
    pub auto_rotation: f32,
    pub text_rotation_speed: f32,
    pub text_auto_rotation: f32,
    /// Items per second; 0 disables shape spawning.
    pub spawn_rate: f32,
    /// Items per second; 0 disables text spawning.
    pub text_spawn_rate: f32,
    /// Percent of canvas width.
    pub origin_x: f32,
    /// Percent of canvas height.
    pub origin_y: f32,
    pub origin_x_automation: f32,
    pub origin_y_automation: f32,
    pub color_cycling: f32,
    pub background_cycling: f32,
    /// Seconds.
    pub text_visible_time: f32,
    /// Seconds.
    pub text_fade_time: f32,
    /// Extra seconds to wait after the last word before starting over.
    pub text_delay_time: f32,
    /// Shape alpha on the 0..255 scale.
    pub shape_transparency: f32,

    pub mouse_follow: bool,
    pub mouse_rotation: bool,
    pub static_text_color: bool,
    pub invert_text_rotation: bool,

    pub shape_kind: ShapeKind,
    pub text: String,
    pub text_color: Rgb,
    pub shape_palette: Palette,
    pub background_palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            animation_speed: 2.0,
            stroke_width: 2.0,
            rotation_speed: 0.0,
            auto_rotation: 0.0,
            text_rotation_speed: 0.2,
            text_auto_rotation: 0.0,
            spawn_rate: 5.0,
            text_spawn_rate: 0.1,
            origin_x: 50.0,
            origin_y: 50.0,
            origin_x_automation: 0.0,
            origin_y_automation: 0.0,
            color_cycling: 0.0,
            background_cycling: 0.0,
            text_visible_time: 5.0,
            text_fade_time: 3.0,
            text_delay_time: 0.0,
            shape_transparency: 255.0,
            mouse_follow: false,
            mouse_rotation: false,
            static_text_color: false,
            invert_text_rotation: false,
            shape_kind: ShapeKind::Square,
            text: String::new(),
            text_color: Rgb::GREEN,
            shape_palette: default_shape_palette(),
            background_palette: default_background_palette(),
        }
    }
}

// Single name -> field table; generates `PARAM_NAMES`, `param` and `param_mut`.
macro_rules! numeric_params {
    ($($name:literal => $field:ident,)+) => {
        /// Numeric parameter names accepted by [`Settings::set_param`].
        pub const PARAM_NAMES: &[&str] = &[$($name,)+];

        impl Settings {
            fn param_mut(&mut self, name: &str) -> Option<&mut f32> {
                match name {
                    $($name => Some(&mut self.$field),)+
                    _ => None,
                }
            }

            pub fn param(&self, name: &str) -> Option<f32> {
                match name {
                    $($name => Some(self.$field),)+
                    _ => None,
                }
            }
        }
    };
}

numeric_params! {
    "animationSpeed" => animation_speed,
    "strokeWidth" => stroke_width,
    "rotationSpeed" => rotation_speed,
    "autoRotation" => auto_rotation,
    "textRotationSpeed" => text_rotation_speed,
    "textAutoRotation" => text_auto_rotation,
    "spawnRate" => spawn_rate,
    "textSpawnRate" => text_spawn_rate,
    "originX" => origin_x,
    "originY" => origin_y,
    "originXAutomation" => origin_x_automation,
    "originYAutomation" => origin_y_automation,
    "colorCycling" => color_cycling,
    "backgroundCycling" => background_cycling,
    "textVisibleTime" => text_visible_time,
    "textFadeTime" => text_fade_time,
    "textDelayTime" => text_delay_time,
    "shapeTransparency" => shape_transparency,
}

impl Settings {
    pub fn shared(self) -> SharedSettings {
        Rc::new(RefCell::new(self))
    }

    /// Build from a name/value map; missing keys keep their defaults and
    /// unknown keys are returned so the caller can report them.
    pub fn from_params(params: &FnvHashMap<String, f32>) -> (Self, Vec<SettingsError>) {
        let mut settings = Settings::default();
        let mut rejected = Vec::new();
        for (name, value) in params {
            if let Err(e) = settings.set_param(name, *value) {
                rejected.push(e);
            }
        }
        (settings, rejected)
    }

    pub fn set_param(&mut self, name: &str, value: f32) -> Result<(), SettingsError> {
        if !value.is_finite() {
            return Err(SettingsError::NotFinite {
                name: name.to_string(),
                value,
            });
        }
        let slot = self
            .param_mut(name)
            .ok_or_else(|| SettingsError::UnknownParam(name.to_string()))?;
        *slot = value;
        Ok(())
    }

    pub fn set_toggle(&mut self, name: &str, on: bool) -> Result<(), SettingsError> {
        let slot = match name {
            "mouseFollow" => &mut self.mouse_follow,
            "mouseRotation" => &mut self.mouse_rotation,
            "staticTextColor" => &mut self.static_text_color,
            "invertTextRotation" => &mut self.invert_text_rotation,
            _ => return Err(SettingsError::UnknownToggle(name.to_string())),
        };
        *slot = on;
        Ok(())
    }

    /// Store the text payload, truncated to `max_len` characters.
    pub fn set_text(&mut self, text: &str, max_len: usize) {
        self.text = text.chars().take(max_len).collect();
    }

    pub fn set_text_color(&mut self, hex: &str) -> Result<(), SettingsError> {
        self.text_color = Rgb::from_hex(hex)?;
        Ok(())
    }

    /// Replace a palette from hex strings; the palette is left untouched on
    /// any parse failure or when `colors` is empty.
    pub fn set_palette<S: AsRef<str>>(
        &mut self,
        target: PaletteTarget,
        colors: &[S],
    ) -> Result<(), SettingsError> {
        if colors.is_empty() {
            return Err(SettingsError::EmptyPalette);
        }
        let parsed = colors
            .iter()
            .map(|c| Rgb::from_hex(c.as_ref()))
            .collect::<Result<Palette, _>>()?;
        match target {
            PaletteTarget::Shapes => self.shape_palette = parsed,
            PaletteTarget::Background => self.background_palette = parsed,
        }
        Ok(())
    }

    /// Words of the text payload in spawn order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }
}
