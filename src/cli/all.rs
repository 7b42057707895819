//! `brandmark all`: mark, then banner. The optimizer is never run here.

use crate::error::Result;
use crate::output::{display_path, plural, Printer};

use super::{mark, og, Context};

pub fn run(ctx: &Context, printer: &Printer) -> Result<()> {
    // One font database for both generators.
    let renderer = ctx.renderer();

    let mut count = mark::generate(ctx, &renderer, printer)?.len();
    og::generate(ctx, &renderer, printer)?;
    count += 1;

    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(count, "file", "files"),
            display_path(&ctx.out_dir)
        ),
    );
    Ok(())
}
