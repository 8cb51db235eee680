//! RGBA color type
//!
//! Channels are stored as `f32` in `0.0..=1.0`. Colors can be built from
//! packed integers or parsed from CSS-style hex strings (`#rgb`, `#rgba`,
//! `#rrggbb`, `#rrggbbaa`).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{CoreError, Result};

/// RGBA color
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from a packed `0xRRGGBB` integer
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse a hex color string, with or without a leading `#`
    ///
    /// Accepts 3, 4, 6 or 8 hex digits. Short forms repeat each digit
    /// (`#f80` is `#ff8800`). Missing alpha means fully opaque.
    pub fn parse_hex(input: &str) -> Result<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);

        let mut nibbles = Vec::with_capacity(digits.len());
        for ch in digits.chars() {
            let value = ch.to_digit(16).ok_or_else(|| CoreError::InvalidHexDigit {
                input: input.to_string(),
                digit: ch,
            })?;
            nibbles.push(value as u8);
        }

        let channels: Vec<u8> = match nibbles.len() {
            3 | 4 => nibbles.iter().map(|n| n * 17).collect(),
            6 | 8 => nibbles.chunks(2).map(|pair| pair[0] * 16 + pair[1]).collect(),
            len => {
                return Err(CoreError::InvalidHexLength {
                    input: input.to_string(),
                    len,
                })
            }
        };

        let channel = |i: usize| channels.get(i).map_or(1.0, |c| *c as f32 / 255.0);
        Ok(Self::rgba(channel(0), channel(1), channel(2), channel(3)))
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Linear interpolation between two colors
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_hex(s)
    }
}
