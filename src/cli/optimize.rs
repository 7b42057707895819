//! `brandmark optimize`: WebP and minified variants for the assets directory.

use clap::Args;

use crate::codec::ImageCodec;
use crate::error::{BrandError, Result};
use crate::optimize::{OptimizeEvent, OptimizeReport, Optimizer};
use crate::output::{display_path, plural, Printer};

use super::Context;

/// Write WebP and minified variants of every image in the assets directory
#[derive(Args, Debug)]
pub struct OptimizeArgs {
    /// Exit with an error if any file fails to optimize
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: OptimizeArgs, ctx: &Context, printer: &Printer) -> Result<()> {
    let optimizer = Optimizer::new(ImageCodec, ctx.config.optimize.clone());

    let report = optimizer.run(&ctx.out_dir, |event| match event {
        OptimizeEvent::Optimized(outcome) => {
            let outputs: Vec<String> = outcome
                .outputs
                .iter()
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .collect();
            printer.status(
                "Optimized",
                &format!(
                    "{} {}",
                    display_path(&outcome.input),
                    printer.dim(&format!("-> {}", outputs.join(", ")))
                ),
            );
        }
        OptimizeEvent::Failed(failure) => {
            printer.error(
                "Failed",
                &format!("{}: {}", display_path(&failure.path), failure.message),
            );
        }
    })?;

    summarize(&report, ctx, printer);

    if args.strict && report.has_failures() {
        return Err(BrandError::Optimize {
            message: plural(report.failures.len(), "file failed", "files failed"),
            help: Some("Fix or remove the listed files, or run without --strict".to_string()),
        });
    }
    Ok(())
}

fn summarize(report: &OptimizeReport, ctx: &Context, printer: &Printer) {
    if report.is_empty() {
        printer.info(
            "Skipped",
            &format!("nothing to optimize in {}", display_path(&ctx.out_dir)),
        );
        return;
    }

    let written = report.outputs().count();
    let mut summary = format!(
        "{}, {} written",
        plural(report.outcomes.len(), "image", "images"),
        plural(written, "file", "files")
    );
    if report.has_failures() {
        summary.push_str(&format!(
            ", {}",
            plural(report.failures.len(), "failure", "failures")
        ));
        printer.warning("Finished", &summary);
    } else {
        printer.success("Finished", &summary);
    }
}
