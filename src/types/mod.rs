//! Core value types for brandmark.
//!
//! - `Colour` - RGBA colour values with hex parsing and contrast math
//! - `Palette` - The fixed set of named brand colours

mod colour;
mod palette;

pub use colour::Colour;
pub use palette::Palette;
