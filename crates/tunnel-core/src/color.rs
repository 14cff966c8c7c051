use glam::Vec3;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color `{0}` must look like #rrggbb or #rgb")]
    Format(String),
    #[error("color `{0}` contains a non-hex digit")]
    Digit(String),
}

/// An sRGB color with channels in the \[0, 1\] range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub Vec3);

impl Rgb {
    pub const BLACK: Rgb = Rgb(Vec3::ZERO);
    pub const WHITE: Rgb = Rgb(Vec3::ONE);
    pub const GREEN: Rgb = Rgb(Vec3::new(0.0, 1.0, 0.0));

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self(Vec3::new(r, g, b))
    }

    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Parse `#rrggbb` or `#rgb`; the leading `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(ColorError::Format(s.to_string()));
        }
        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|_| ColorError::Digit(s.to_string()))
        };
        match hex.len() {
            6 => Ok(Self::from_u8(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Self::from_u8(r * 17, g * 17, b * 17))
            }
            _ => Err(ColorError::Format(s.to_string())),
        }
    }

    /// Channel-wise linear blend; `t` is clamped to \[0, 1\].
    #[inline]
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb(self.0.lerp(other.0, t.clamp(0.0, 1.0)))
    }

    pub fn to_u8(self) -> [u8; 3] {
        let c = (self.0.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
        [c.x as u8, c.y as u8, c.z as u8]
    }

    /// CSS `rgba()` string with `alpha` given on the 0..255 scale.
    pub fn to_css(self, alpha: f32) -> String {
        let [r, g, b] = self.to_u8();
        let a = (alpha / 255.0).clamp(0.0, 1.0);
        format!("rgba({r}, {g}, {b}, {a:.3})")
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::BLACK
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_u8();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}
