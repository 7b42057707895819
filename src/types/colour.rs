//! Colour type, hex parsing and contrast math.

use std::fmt;
use std::str::FromStr;

use palette::{LinSrgb, Mix, Srgb};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{BrandError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Accepts `#RGB`, `#RRGGBB` and `#RRGGBBAA`, with or without the `#`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 => {
                let mut digits = [0u8; 3];
                for (slot, c) in digits.iter_mut().zip(hex.chars()) {
                    let d = c.to_digit(16).ok_or_else(|| invalid_hex(s))? as u8;
                    *slot = d << 4 | d;
                }
                Ok(Self::rgb(digits[0], digits[1], digits[2]))
            }
            6 => Ok(Self::rgb(
                parse_hex_byte(&hex[0..2], s)?,
                parse_hex_byte(&hex[2..4], s)?,
                parse_hex_byte(&hex[4..6], s)?,
            )),
            8 => Ok(Self::new(
                parse_hex_byte(&hex[0..2], s)?,
                parse_hex_byte(&hex[2..4], s)?,
                parse_hex_byte(&hex[4..6], s)?,
                parse_hex_byte(&hex[6..8], s)?,
            )),
            _ => Err(invalid_hex(s)),
        }
    }

    /// Convert to an RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// `#RRGGBB` form without alpha, as used in SVG paint attributes.
    pub fn to_rgb_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Alpha as a 0..=1 fraction.
    pub fn alpha_f32(self) -> f32 {
        self.a as f32 / 255.0
    }

    fn to_srgb(self) -> Srgb<f32> {
        Srgb::new(self.r, self.g, self.b).into_format()
    }

    fn from_srgb(rgb: Srgb<f32>, a: u8) -> Self {
        let rgb: Srgb<u8> = rgb.into_format();
        Self::new(rgb.red, rgb.green, rgb.blue, a)
    }

    /// Interpolate towards `other` in sRGB space, as SVG gradients do.
    pub fn mix(self, other: Colour, t: f32) -> Colour {
        let t = t.clamp(0.0, 1.0);
        let mixed = self.to_srgb().mix(other.to_srgb(), t);
        let a = self.a as f32 + (other.a as f32 - self.a as f32) * t;
        Self::from_srgb(mixed, a.round() as u8)
    }

    /// WCAG 2.1 relative luminance of the RGB channels.
    pub fn relative_luminance(self) -> f32 {
        let lin: LinSrgb<f32> = self.to_srgb().into_linear();
        0.2126 * lin.red + 0.7152 * lin.green + 0.0722 * lin.blue
    }

    /// WCAG 2.1 contrast ratio between two colours, in `1.0..=21.0`.
    pub fn contrast_ratio(self, other: Colour) -> f32 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (light, dark) = if a >= b { (a, b) } else { (b, a) };
        (light + 0.05) / (dark + 0.05)
    }
}

impl FromStr for Colour {
    type Err = BrandError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Colour::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

fn invalid_hex(s: &str) -> BrandError {
    BrandError::Config {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB, #RRGGBB, or #RRGGBBAA format".to_string()),
    }
}

fn parse_hex_byte(byte: &str, whole: &str) -> Result<u8> {
    u8::from_str_radix(byte, 16).map_err(|_| invalid_hex(whole))
}
