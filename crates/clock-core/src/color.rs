use crate::constants::BRIGHTNESS_OFFSET;
use std::fmt;
use std::str::FromStr;

/// 8-bit sRGB color as used for SVG fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected 6 hex digits, got {0} characters")]
    Length(usize),
    #[error("invalid hex color {0:?}")]
    Digits(String),
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    /// Push the color toward white by `progress` and add the fixed
    /// brightness offset.
    ///
    /// Each channel becomes `min(255, round(c + (255 - c) * progress) + 100)`.
    /// The offset applies even at `progress == 0`, so a resting color is
    /// already brighter than its base. The result is always recomputed from
    /// `self`; feeding it back in brightens it further.
    pub fn brighten(self, progress: f64) -> Rgb {
        Rgb {
            r: brighten_channel(self.r, progress),
            g: brighten_channel(self.g, progress),
            b: brighten_channel(self.b, progress),
        }
    }
}

#[inline]
fn brighten_channel(c: u8, progress: f64) -> u8 {
    let c = c as f64;
    let lifted = (c + (255.0 - c) * progress).round() + BRIGHTNESS_OFFSET as f64;
    lifted.clamp(0.0, 255.0) as u8
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Parse `#RRGGBB` (the `#` is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return Err(ColorError::Length(hex.len()));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::Digits(s.to_string()));
        }
        let packed =
            u32::from_str_radix(hex, 16).map_err(|_| ColorError::Digits(s.to_string()))?;
        Ok(Rgb::from_u32(packed))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}
