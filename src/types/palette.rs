//! The brand palette.

use serde::{Deserialize, Serialize};

use super::Colour;

/// The five named brand colours shared by every generated asset.
///
/// `white` and `dark_brown` are only used by the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub cream: Colour,
    pub orange: Colour,
    pub brick: Colour,
    pub white: Colour,
    pub dark_brown: Colour,
}

impl Palette {
    /// The builtin brand palette.
    pub const BRAND: Self = Self {
        cream: Colour::rgb(0xF5, 0xE9, 0xE4),
        orange: Colour::rgb(0xFF, 0xA0, 0x46),
        brick: Colour::rgb(0xD4, 0x45, 0x1D),
        white: Colour::WHITE,
        dark_brown: Colour::rgb(0x4B, 0x1F, 0x12),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::BRAND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_hex_values() {
        let p = Palette::default();
        assert_eq!(p.cream.to_string(), "#F5E9E4");
        assert_eq!(p.orange.to_string(), "#FFA046");
        assert_eq!(p.brick.to_string(), "#D4451D");
        assert_eq!(p.white.to_string(), "#FFFFFF");
        assert_eq!(p.dark_brown.to_string(), "#4B1F12");
    }

    #[test]
    fn test_partial_yaml_keeps_brand_defaults() {
        let p: Palette = serde_yaml::from_str("orange: \"#FF8800\"").unwrap();
        assert_eq!(p.orange, Colour::rgb(0xFF, 0x88, 0x00));
        assert_eq!(p.cream, Palette::BRAND.cream);
        assert_eq!(p.brick, Palette::BRAND.brick);
    }
}
