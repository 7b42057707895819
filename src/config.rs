//! Brand configuration (brand.yaml) parsing.
//!
//! All constants that drive the generators live here: palette, output
//! directory, mark sizes, banner copy and layout, and optimizer settings.
//! A loaded `BrandConfig` is immutable and passed by reference into every
//! generator.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BrandError, Result};
use crate::types::Palette;

/// The name of the configuration file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "brand.yaml";

/// Upper bound for the banner overlay opacity.
pub const MAX_OVERLAY_OPACITY: f64 = 0.2;

/// Top-level configuration loaded from brand.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    /// Public assets directory that generators write into and the
    /// optimizer walks.
    pub output: PathBuf,

    /// Brand colours.
    pub palette: Palette,

    /// Hexagon mark settings.
    pub mark: MarkConfig,

    /// Open Graph banner settings.
    pub banner: BannerConfig,

    /// Optimizer settings.
    pub optimize: OptimizeConfig,

    /// Extra directory scanned for `.ttf`/`.otf`/`.ttc` fonts.
    pub fonts_dir: Option<PathBuf>,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("public"),
            palette: Palette::default(),
            mark: MarkConfig::default(),
            banner: BannerConfig::default(),
            optimize: OptimizeConfig::default(),
            fonts_dir: None,
        }
    }
}

/// Mark (logo + favicon) settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkConfig {
    pub initials: String,
    pub font_family: String,
    pub logo_size: u32,
    pub favicon_size: u32,
    /// Sizes embedded in favicon.ico, one frame each.
    pub ico_sizes: Vec<u32>,
}

impl Default for MarkConfig {
    fn default() -> Self {
        Self {
            initials: "VS".to_string(),
            font_family: "Arial, Helvetica, sans-serif".to_string(),
            logo_size: 500,
            favicon_size: 180,
            ico_sizes: vec![32],
        }
    }
}

/// Banner settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub subtitle: String,
    pub font_family: String,
    pub margin_left: f64,
    pub title_top: f64,
    pub title_size: f64,
    pub subtitle_size: f64,
    /// Extra space between the title line box and the subtitle.
    pub subtitle_gap: f64,
    /// Offset of the orange stop in the background gradient.
    pub orange_stop: f64,
    pub overlay_opacity: f64,
    pub circuit: bool,
    pub title_shadow: bool,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 630,
            title: "Varun Samiyani".to_string(),
            subtitle: "Frontend Developer & AI Explorer".to_string(),
            font_family: "Inter, Arial, Helvetica, sans-serif".to_string(),
            margin_left: 80.0,
            title_top: 170.0,
            title_size: 90.0,
            subtitle_size: 40.0,
            subtitle_gap: 2.0,
            orange_stop: 0.5,
            overlay_opacity: 0.15,
            circuit: true,
            title_shadow: true,
        }
    }
}

/// Optimizer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizeConfig {
    /// Lossy WebP quality, 1 to 100.
    pub webp_quality: u8,
    pub jpeg_quality: u8,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            webp_quality: 82,
            jpeg_quality: 82,
        }
    }
}

impl BrandConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BrandError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load an explicit config path, or `brand.yaml` in `dir` if present,
    /// or fall back to the builtin defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| BrandError::Config {
                message: format!("Invalid config: {}", e),
                help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject values the generators cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.mark.logo_size < 2 || self.mark.favicon_size < 2 {
            return Err(config_error(
                "mark sizes must be at least 2 pixels",
                "Set mark.logo_size and mark.favicon_size to 2 or more",
            ));
        }
        if self.mark.ico_sizes.iter().any(|&s| !(2..=256).contains(&s)) {
            return Err(config_error(
                "ico sizes must be between 2 and 256 pixels",
                "ICO frames cannot exceed 256x256",
            ));
        }
        if self.mark.initials.trim().is_empty() {
            return Err(config_error(
                "mark.initials must not be empty",
                "Use one or two letters, e.g. \"VS\"",
            ));
        }
        if self.banner.width == 0 || self.banner.height == 0 {
            return Err(config_error(
                "banner dimensions must be non-zero",
                "The Open Graph default is 1200x630",
            ));
        }
        if !(0.0..=1.0).contains(&self.banner.orange_stop) {
            return Err(config_error(
                "banner.orange_stop must be within 0.0..=1.0",
                "The brand gradient uses 0.5 to 0.55",
            ));
        }
        if !(0.0..=MAX_OVERLAY_OPACITY).contains(&self.banner.overlay_opacity) {
            return Err(config_error(
                format!(
                    "banner.overlay_opacity must be within 0.0..={}",
                    MAX_OVERLAY_OPACITY
                ),
                "Higher overlay opacity compromises text contrast",
            ));
        }
        if self.banner.title_size <= 0.0 || self.banner.subtitle_size <= 0.0 {
            return Err(config_error(
                "banner font sizes must be positive",
                "The defaults are 90 (title) and 40 (subtitle)",
            ));
        }
        for (name, q) in [
            ("webp_quality", self.optimize.webp_quality),
            ("jpeg_quality", self.optimize.jpeg_quality),
        ] {
            if !(1..=100).contains(&q) {
                return Err(config_error(
                    format!("optimize.{} must be within 1..=100", name),
                    "82 is a reasonable default",
                ));
            }
        }
        Ok(())
    }

    /// Resolve the output directory against a base directory.
    pub fn output_dir(&self, base: &Path) -> PathBuf {
        if self.output.is_absolute() {
            self.output.clone()
        } else {
            base.join(&self.output)
        }
    }
}

fn config_error(message: impl Into<String>, help: impl Into<String>) -> BrandError {
    BrandError::Config {
        message: message.into(),
        help: Some(help.into()),
    }
}
