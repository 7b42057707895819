//! Logo and favicon generator.

use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::codec::{Codec, Format, IcoLayer};
use crate::config::BrandConfig;
use crate::error::Result;
use crate::render::Renderer;
use crate::scene::{compose_mark, MarkStyle};

use super::{ensure_output_dir, write_file, Artifact, ArtifactKind, TransientFile};

pub const LOGO_FILENAME: &str = "logo.png";
pub const FAVICON_PNG_FILENAME: &str = "favicon.png";
pub const FAVICON_ICO_FILENAME: &str = "favicon.ico";

/// Path of the intermediate PNG used to build one ICO frame.
pub fn transient_favicon_path(out_dir: &Path, size: u32) -> PathBuf {
    out_dir.join(format!("favicon-{}.png", size))
}

/// Generate `logo.png`, `favicon.png` and `favicon.ico` in `out_dir`.
///
/// Each ICO frame is rendered to `favicon-<size>.png`, read back into the
/// icon container and removed before returning.
pub fn generate_mark<R, C>(
    config: &BrandConfig,
    out_dir: &Path,
    renderer: &R,
    codec: &C,
) -> Result<Vec<Artifact>>
where
    R: Renderer + ?Sized,
    C: Codec + ?Sized,
{
    ensure_output_dir(out_dir)?;

    let style = MarkStyle::from(&config.mark);
    let render_png = |size: u32| -> Result<Vec<u8>> {
        let scene = compose_mark(size, &style, &config.palette);
        let pixels = renderer.render(&scene)?;
        codec.encode(&DynamicImage::ImageRgba8(pixels), Format::Png)
    };

    let mut artifacts = Vec::new();

    for (name, size) in [
        (LOGO_FILENAME, config.mark.logo_size),
        (FAVICON_PNG_FILENAME, config.mark.favicon_size),
    ] {
        let path = out_dir.join(name);
        write_file(&path, &render_png(size)?)?;
        artifacts.push(Artifact {
            path,
            width: size,
            height: size,
            kind: ArtifactKind::Png,
        });
    }

    let mut transients = Vec::with_capacity(config.mark.ico_sizes.len());
    let mut frames = Vec::with_capacity(config.mark.ico_sizes.len());
    for &size in &config.mark.ico_sizes {
        let png = render_png(size)?;
        let transient = TransientFile::create(transient_favicon_path(out_dir, size), &png)?;
        frames.push((transient.read()?, size));
        transients.push(transient);
    }

    let layers: Vec<IcoLayer<'_>> = frames
        .iter()
        .map(|(png, size)| IcoLayer {
            png,
            width: *size,
            height: *size,
        })
        .collect();
    let ico = codec.encode_ico(&layers)?;

    let ico_path = out_dir.join(FAVICON_ICO_FILENAME);
    write_file(&ico_path, &ico)?;
    drop(transients);

    let largest = config.mark.ico_sizes.iter().copied().max().unwrap_or(0);
    artifacts.push(Artifact {
        path: ico_path,
        width: largest,
        height: largest,
        kind: ArtifactKind::Ico,
    });

    Ok(artifacts)
}
