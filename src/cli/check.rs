//! `brandmark check`: validate the layouts without writing any files.

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::validation::{validate_banner, validate_mark, ValidationResult};

use super::{require_valid, Context};

pub fn run(ctx: &Context, printer: &Printer) -> Result<()> {
    let mut result = ValidationResult::new();
    result.merge(validate_mark(&ctx.config));
    result.merge(validate_banner(&ctx.config));

    require_valid(&result, printer)?;

    if result.is_ok() {
        printer.success("Checked", "mark and og-image layouts");
    } else {
        printer.success(
            "Checked",
            &format!(
                "mark and og-image layouts ({})",
                plural(result.warning_count(), "warning", "warnings")
            ),
        );
    }
    Ok(())
}
