//! Layout validation for composed scenes.
//!
//! Runs a suite of checks against the mark and banner scenes and reports
//! errors and warnings. Used by `brandmark check` and before every
//! generator writes files.

mod checks;
mod warning;

pub use checks::{text_contrast, MIN_CONTRAST, MIN_CONTRAST_LARGE};
pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::config::BrandConfig;
use crate::output::{plural, Printer};
use crate::scene::{compose_banner, compose_mark, BannerStyle, MarkStyle, Scene};

/// Run all checks against one scene.
pub fn validate_scene(scene: &Scene) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_overlay_opacity(scene));
    result.merge(checks::check_text_on_top(scene));
    result.merge(checks::check_text_overlap(scene));
    result.merge(checks::check_text_in_canvas(scene));
    result.merge(checks::check_text_contrast(scene));

    result
}

/// Validate the mark at its PNG output sizes.
///
/// ICO frames reuse the same proportional layout and are not checked
/// separately.
pub fn validate_mark(config: &BrandConfig) -> ValidationResult {
    let style = MarkStyle::from(&config.mark);
    let mut result = ValidationResult::new();

    let mut sizes = vec![config.mark.logo_size, config.mark.favicon_size];
    sizes.dedup();
    for size in sizes {
        let scene = compose_mark(size, &style, &config.palette);
        result.merge_with_context(&format!("mark {}x{}", size, size), validate_scene(&scene));
    }

    result
}

pub fn validate_banner(config: &BrandConfig) -> ValidationResult {
    let scene = compose_banner(&BannerStyle::from(&config.banner), &config.palette);
    let mut result = ValidationResult::new();
    result.merge_with_context("og-image", validate_scene(&scene));
    result
}

/// Print diagnostics and a one-line summary to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        printer.note(&format!("{}[{}]: {}", label, d.code, d.message));
        if let Some(help) = &d.help {
            printer.note(&format!("  help: {}", help));
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        printer.error(
            "Failed",
            &format!(
                "validation: {}, {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
        );
    } else if warnings > 0 {
        printer.warning(
            "Checked",
            &format!("layout ({})", plural(warnings, "warning", "warnings")),
        );
    }
}
