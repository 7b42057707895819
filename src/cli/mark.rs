//! `brandmark mark`: logo, favicon PNG and favicon ICO.

use crate::codec::ImageCodec;
use crate::error::Result;
use crate::generate::{generate_mark, Artifact};
use crate::output::{display_path, plural, Printer};
use crate::render::Renderer;
use crate::validation::validate_mark;

use super::{require_valid, Context};

pub fn run(ctx: &Context, printer: &Printer) -> Result<()> {
    let artifacts = generate(ctx, &ctx.renderer(), printer)?;
    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(artifacts.len(), "file", "files"),
            display_path(&ctx.out_dir)
        ),
    );
    Ok(())
}

/// Validate and generate the mark, printing one line per written file.
pub fn generate<R: Renderer + ?Sized>(
    ctx: &Context,
    renderer: &R,
    printer: &Printer,
) -> Result<Vec<Artifact>> {
    require_valid(&validate_mark(&ctx.config), printer)?;

    let artifacts = generate_mark(&ctx.config, &ctx.out_dir, renderer, &ImageCodec)?;
    for artifact in &artifacts {
        report(artifact, printer);
    }
    Ok(artifacts)
}

pub(super) fn report(artifact: &Artifact, printer: &Printer) {
    printer.status(
        "Generated",
        &format!(
            "{} {}",
            display_path(&artifact.path),
            printer.dim(&format!("({}x{})", artifact.width, artifact.height))
        ),
    );
}
