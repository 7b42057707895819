//! Layout checks for composed scenes.
//!
//! Each check takes a `&Scene` and returns a `ValidationResult`. They work
//! on the scene description alone, so no renderer or fonts are involved.

use crate::config::MAX_OVERLAY_OPACITY;
use crate::scene::{DrawOp, Point, Scene, TextRun};

use super::warning::{Diagnostic, ValidationResult};

/// Minimum WCAG contrast for body text.
pub const MIN_CONTRAST: f32 = 4.5;

/// Minimum WCAG contrast for large text.
pub const MIN_CONTRAST_LARGE: f32 = 3.0;

/// Decoration groups must stay translucent and under the opacity ceiling.
pub fn check_overlay_opacity(scene: &Scene) -> ValidationResult {
    let mut result = ValidationResult::new();

    for op in scene.ops() {
        if let DrawOp::Group { opacity, .. } = op {
            if !(0.0..=MAX_OVERLAY_OPACITY).contains(opacity) {
                result.push(
                    Diagnostic::error(
                        "brandmark::validate::overlay-opacity",
                        format!(
                            "Overlay opacity {} is outside 0..={}",
                            opacity, MAX_OVERLAY_OPACITY
                        ),
                    )
                    .with_help("Lower banner.overlay_opacity in the config"),
                );
            }
        }
    }

    result
}

/// Nothing but text may be drawn once the first text run is down.
pub fn check_text_on_top(scene: &Scene) -> ValidationResult {
    let mut result = ValidationResult::new();

    let Some(first_text) = scene.ops().iter().position(DrawOp::is_text) else {
        return result;
    };

    for (index, op) in scene.ops().iter().enumerate().skip(first_text) {
        if !op.is_text() {
            result.push(
                Diagnostic::error(
                    "brandmark::validate::layer-order",
                    format!("Draw operation {} paints over text", index),
                )
                .with_help("Decoration must be drawn before the text layer"),
            );
        }
    }

    result
}

/// Text runs must not share any area.
pub fn check_text_overlap(scene: &Scene) -> ValidationResult {
    let mut result = ValidationResult::new();
    let runs = scene.text_runs();

    for (i, a) in runs.iter().enumerate() {
        for b in &runs[i + 1..] {
            if a.bounds().intersects(&b.bounds()) {
                result.push(
                    Diagnostic::error(
                        "brandmark::validate::text-overlap",
                        format!("Text '{}' overlaps '{}'", a.text, b.text),
                    )
                    .with_help("Increase banner.subtitle_gap or reduce the font sizes"),
                );
            }
        }
    }

    result
}

/// Text should stay inside the canvas.
pub fn check_text_in_canvas(scene: &Scene) -> ValidationResult {
    let mut result = ValidationResult::new();
    let (width, height) = (scene.width as f64, scene.height as f64);

    for run in scene.text_runs() {
        let b = run.bounds();
        if b.x < 0.0 || b.y < 0.0 || b.right() > width || b.bottom() > height {
            result.push(Diagnostic::warning(
                "brandmark::validate::text-clipped",
                format!(
                    "Text '{}' extends past the {}x{} canvas",
                    run.text, scene.width, scene.height
                ),
            ));
        }
    }

    result
}

/// Worst-case contrast of a run against the backdrop under its layout box.
pub fn text_contrast(scene: &Scene, run: &TextRun) -> f32 {
    let b = run.bounds();
    let samples = [
        b.center(),
        Point::new(b.x, b.y),
        Point::new(b.right(), b.y),
        Point::new(b.x, b.bottom()),
        Point::new(b.right(), b.bottom()),
    ];

    samples
        .iter()
        .map(|&p| run.fill.contrast_ratio(scene.backdrop_at(p)))
        .fold(f32::INFINITY, f32::min)
}

/// Text should meet the WCAG contrast bar against its backdrop.
pub fn check_text_contrast(scene: &Scene) -> ValidationResult {
    let mut result = ValidationResult::new();

    for run in scene.text_runs() {
        let required = if run.is_large() {
            MIN_CONTRAST_LARGE
        } else {
            MIN_CONTRAST
        };
        let ratio = text_contrast(scene, run);
        if ratio < required {
            result.push(
                Diagnostic::warning(
                    "brandmark::validate::contrast",
                    format!(
                        "Text '{}' has contrast {:.2}:1 against its backdrop (needs {:.1}:1)",
                        run.text, ratio, required
                    ),
                )
                .with_help("Adjust the palette or move the text over a darker region"),
            );
        }
    }

    result
}
