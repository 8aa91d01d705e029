use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use rand::Rng;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ColorParseError;
use crate::named::{named_colors, DyeColor, TextFormatting};

/// Subtracted from every hue before conversion. `hsv_to_rgb` measures the
/// fraction against the wrapped sector, so a hue of exactly 1.0 lands in
/// sector 0 with a fraction of 6 and comes out yellow instead of red.
const HUE_EPSILON: f32 = 0.5e-7;

/// An RGBA color with `f32` channels nominally in `0.0..=1.0`.
///
/// Channels are not clamped on construction or interpolation. Values outside
/// the unit range survive until packing, where each channel is truncated to
/// its low byte.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Color {
    red: f32,
    green: f32,
    blue: f32,
    alpha: f32,
}

impl Color {
    pub const BLACK: Color = Color::opaque(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::opaque(1.0, 1.0, 1.0);
    pub const RED: Color = Color::opaque(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::opaque(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::opaque(0.0, 0.0, 1.0);

    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Same as [`Color::new`] with alpha fixed to 1.
    pub const fn opaque(red: f32, green: f32, blue: f32) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Unpacks `0xAARRGGBB`.
    pub fn from_argb(argb: u32) -> Self {
        Self::new(
            unpack_byte(argb >> 16),
            unpack_byte(argb >> 8),
            unpack_byte(argb),
            unpack_byte(argb >> 24),
        )
    }

    /// Unpacks `0xRRGGBB`; the top byte is ignored and alpha is 1.
    pub fn from_rgb(rgb: u32) -> Self {
        Self::new(
            unpack_byte(rgb >> 16),
            unpack_byte(rgb >> 8),
            unpack_byte(rgb),
            1.0,
        )
    }

    /// Builds an opaque color from hue, saturation and value, all in `0.0..=1.0`.
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        Self::from_rgb(hsv_to_rgb(hue - HUE_EPSILON, saturation, value))
    }

    pub fn from_hsva(hue: f32, saturation: f32, value: f32, alpha: f32) -> Self {
        Self::from_argb(pack_byte(alpha) << 24 | hsv_to_rgb(hue - HUE_EPSILON, saturation, value))
    }

    /// Text formatting entries without a color (`bold`, `reset`, ...) map to black.
    pub fn from_formatting(formatting: TextFormatting) -> Self {
        Self::from_rgb(formatting.color_value().unwrap_or(0))
    }

    pub fn from_dye(dye: DyeColor) -> Self {
        Self::from_rgb(dye.color_value())
    }

    /// A uniformly random opaque color.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    pub fn random_with<R: Rng>(rng: &mut R) -> Self {
        Self::from_argb(rng.gen_range(0..0xFF_FFFF) | 0xFF00_0000)
    }

    /// Exact, case-sensitive lookup in the named text color table.
    pub fn named(name: &str) -> Option<Self> {
        named_colors().get(name).copied()
    }

    pub fn red(&self) -> f32 {
        self.red
    }

    pub fn green(&self) -> f32 {
        self.green
    }

    pub fn blue(&self) -> f32 {
        self.blue
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self { alpha, ..*self }
    }

    /// Channels in `[r, g, b, a]` order, matching the `#[repr(C)]` layout.
    pub fn to_array(&self) -> [f32; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Packs into `0xRRGGBB`. Each channel is scaled by 255 and truncated.
    pub fn rgb(&self) -> u32 {
        pack_byte(self.red) << 16 | pack_byte(self.green) << 8 | pack_byte(self.blue)
    }

    /// Packs into `0xAARRGGBB`. Each channel is scaled by 255 and truncated.
    pub fn argb(&self) -> u32 {
        pack_byte(self.alpha) << 24 | self.rgb()
    }

    /// Returns `[hue, saturation, value, alpha]`, hue in `0.0..1.0`.
    pub fn hsv(&self) -> [f32; 4] {
        let max = self.red.max(self.green).max(self.blue);
        let min = self.red.min(self.green).min(self.blue);

        let value = max;
        let saturation = if max != 0.0 { (max - min) / max } else { 0.0 };

        let hue = if saturation == 0.0 {
            0.0
        } else {
            let range = max - min;
            let red_distance = (max - self.red) / range;
            let green_distance = (max - self.green) / range;
            let blue_distance = (max - self.blue) / range;

            let sector = if self.red == max {
                blue_distance - green_distance
            } else if self.green == max {
                2.0 + red_distance - blue_distance
            } else {
                4.0 + green_distance - red_distance
            };

            let hue = sector / 6.0;
            if hue < 0.0 {
                hue + 1.0
            } else {
                hue
            }
        };

        [hue, saturation, value, self.alpha]
    }

    /// Linear per-channel blend towards `next`. `delta` is not clamped, so
    /// values outside `0.0..=1.0` extrapolate.
    pub fn interpolate(&self, next: &Color, delta: f32) -> Self {
        Self::new(
            lerp(delta, self.red, next.red),
            lerp(delta, self.green, next.green),
            lerp(delta, self.blue, next.blue),
            lerp(delta, self.alpha, next.alpha),
        )
    }

    /// `#RRGGBB`, or `#AARRGGBB` when `include_alpha` is set.
    pub fn to_hex_string(&self, include_alpha: bool) -> String {
        if include_alpha {
            format!("#{:08X}", self.argb())
        } else {
            format!("#{:06X}", self.rgb())
        }
    }

    /// Parses `#RRGGBB`, `#AARRGGBB` or a named text color such as `dark-aqua`.
    /// Surrounding whitespace is ignored; hex digits may use either case.
    pub fn parse(text: &str) -> Result<Self, ColorParseError> {
        let text = text.trim();

        let Some(digits) = text.strip_prefix('#') else {
            return Self::named(text).ok_or_else(|| ColorParseError::UnknownName(text.to_string()));
        };

        let well_formed = matches!(digits.len(), 6 | 8)
            && digits.bytes().all(|byte| byte.is_ascii_hexdigit());
        if !well_formed {
            return Err(ColorParseError::MalformedHex(text.to_string()));
        }

        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::MalformedHex(text.to_string()))?;
        if digits.len() == 6 {
            Ok(Self::from_rgb(packed))
        } else {
            Ok(Self::from_argb(packed))
        }
    }

    /// [`Color::parse`] followed by [`Color::argb`].
    pub fn parse_and_pack(text: &str) -> Result<u32, ColorParseError> {
        Self::parse(text).map(|color| color.argb())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.argb())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex_string(true))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}

fn unpack_byte(packed: u32) -> f32 {
    (packed & 0xFF) as f32 / 255.0
}

/// Scales a channel to a byte, truncating. Out-of-range channels keep only
/// their low eight bits so they never spill into a neighbouring channel.
fn pack_byte(channel: f32) -> u32 {
    ((channel * 255.0) as i32 as u32) & 0xFF
}

fn lerp(delta: f32, start: f32, end: f32) -> f32 {
    start + delta * (end - start)
}

/// Sector-based HSV to packed `0xRRGGBB`, each channel truncated and clamped
/// to a byte.
fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> u32 {
    let scaled = hue * 6.0;
    let sector = (scaled as i32).rem_euclid(6);
    let fraction = scaled - sector as f32;

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - fraction * saturation);
    let t = value * (1.0 - (1.0 - fraction) * saturation);

    let (red, green, blue) = match sector {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    clamped_byte(red) << 16 | clamped_byte(green) << 8 | clamped_byte(blue)
}

fn clamped_byte(channel: f32) -> u32 {
    ((channel * 255.0) as i32).clamp(0, 255) as u32
}
