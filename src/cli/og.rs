//! `brandmark og`: the Open Graph banner.

use crate::codec::ImageCodec;
use crate::error::Result;
use crate::generate::{generate_banner, Artifact};
use crate::output::{display_path, Printer};
use crate::render::Renderer;
use crate::validation::validate_banner;

use super::mark::report;
use super::{require_valid, Context};

pub fn run(ctx: &Context, printer: &Printer) -> Result<()> {
    let artifact = generate(ctx, &ctx.renderer(), printer)?;
    printer.success("Finished", &display_path(&artifact.path));
    Ok(())
}

pub fn generate<R: Renderer + ?Sized>(
    ctx: &Context,
    renderer: &R,
    printer: &Printer,
) -> Result<Artifact> {
    require_valid(&validate_banner(&ctx.config), printer)?;

    let artifact = generate_banner(&ctx.config, &ctx.out_dir, renderer, &ImageCodec)?;
    report(&artifact, printer);
    Ok(artifact)
}
