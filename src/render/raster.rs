//! `resvg` rasterizer backend.

use std::path::Path;
use std::sync::Arc;

use image::{Rgba, RgbaImage};
use resvg::tiny_skia;
use usvg::fontdb::{self, Family};

use crate::error::{BrandError, Result};
use crate::scene::{Scene, TextRun};

use super::{to_svg, Renderer};

/// Installed families tried, in order, for each generic family.
const SANS_SERIF_FALLBACKS: &[&str] = &[
    "Arial",
    "Helvetica",
    "Liberation Sans",
    "DejaVu Sans",
    "Noto Sans",
    "Roboto",
    "Inter",
];
const SERIF_FALLBACKS: &[&str] = &[
    "Times New Roman",
    "Times",
    "Liberation Serif",
    "DejaVu Serif",
    "Noto Serif",
];
const MONOSPACE_FALLBACKS: &[&str] = &[
    "Courier New",
    "Liberation Mono",
    "DejaVu Sans Mono",
    "Noto Sans Mono",
];

/// Renders scenes through an SVG document and `resvg`.
///
/// Text is shaped with fonts from the system font database plus any
/// `.ttf`/`.otf`/`.ttc` files in an optional fonts directory. A scene whose
/// text has no matching face is rejected instead of rendered without it.
pub struct SvgRenderer {
    options: usvg::Options<'static>,
}

impl SvgRenderer {
    /// Renderer with system fonts and an optional extra fonts directory.
    pub fn new(fonts_dir: Option<&Path>) -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        if let Some(dir) = fonts_dir {
            db.load_fonts_dir(dir);
        }
        Self::with_fontdb(db)
    }

    /// Renderer over an explicit font database.
    ///
    /// Generic families (`sans-serif`, `serif`, `monospace`) are pointed at
    /// faces that are actually installed.
    pub fn with_fontdb(mut db: fontdb::Database) -> Self {
        assign_generic_families(&mut db);
        let options = usvg::Options {
            fontdb: Arc::new(db),
            ..Default::default()
        };
        Self { options }
    }

    /// Number of font faces available for text.
    pub fn font_count(&self) -> usize {
        self.options.fontdb.len()
    }

    /// Whether some installed face matches a CSS `font-family` list.
    pub fn has_font_for(&self, font_family: &str, weight: u16) -> bool {
        let names = parse_family_list(font_family);
        let families: Vec<Family<'_>> = names.iter().map(|n| to_family(n)).collect();
        let query = fontdb::Query {
            families: &families,
            weight: fontdb::Weight(weight),
            ..Default::default()
        };
        self.options.fontdb.query(&query).is_some()
    }

    fn check_fonts(&self, scene: &Scene) -> Result<()> {
        for run in scene.text_runs() {
            if !self.has_font_for(&run.font_family, run.font_weight) {
                return Err(missing_font(run));
            }
        }
        Ok(())
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, scene: &Scene) -> Result<RgbaImage> {
        self.check_fonts(scene)?;

        let svg = to_svg(scene);
        let tree = usvg::Tree::from_str(&svg, &self.options).map_err(|e| BrandError::Render {
            message: format!("Failed to parse scene SVG: {}", e),
        })?;

        let mut pixmap =
            tiny_skia::Pixmap::new(scene.width, scene.height).ok_or_else(|| BrandError::Render {
                message: format!(
                    "Failed to allocate {}x{} canvas",
                    scene.width, scene.height
                ),
            })?;
        resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

        let mut image = RgbaImage::new(scene.width, scene.height);
        for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        Ok(image)
    }
}

fn missing_font(run: &TextRun) -> BrandError {
    BrandError::Render {
        message: format!(
            "No installed font matches \"{}\" for text '{}'; install one of them or set fonts_dir",
            run.font_family, run.text
        ),
    }
}

/// Split a CSS `font-family` value into unquoted names.
fn parse_family_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|name| name.trim().trim_matches(|c| c == '"' || c == '\'').trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn to_family(name: &str) -> Family<'_> {
    match name.to_ascii_lowercase().as_str() {
        "sans-serif" => Family::SansSerif,
        "serif" => Family::Serif,
        "monospace" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        _ => Family::Name(name),
    }
}

fn installed(db: &fontdb::Database, name: &str) -> bool {
    db.faces()
        .any(|face| face.families.iter().any(|(family, _)| family == name))
}

fn first_installed(db: &fontdb::Database, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find(|name| installed(db, name))
        .map(|name| name.to_string())
}

/// Point the generic families at installed faces, keeping fontdb's
/// defaults when they already resolve.
fn assign_generic_families(db: &mut fontdb::Database) {
    // Any face at all is better than silently dropping text.
    let any_family = db
        .faces()
        .find_map(|face| face.families.first().map(|(name, _)| name.clone()));

    let pick = |db: &fontdb::Database, generic: Family<'_>, candidates: &[&str]| {
        if installed(db, db.family_name(&generic)) {
            None
        } else {
            first_installed(db, candidates).or_else(|| any_family.clone())
        }
    };

    if let Some(name) = pick(db, Family::SansSerif, SANS_SERIF_FALLBACKS) {
        db.set_sans_serif_family(name);
    }
    if let Some(name) = pick(db, Family::Serif, SERIF_FALLBACKS) {
        db.set_serif_family(name);
    }
    if let Some(name) = pick(db, Family::Monospace, MONOSPACE_FALLBACKS) {
        db.set_monospace_family(name);
    }
}
