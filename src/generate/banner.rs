//! Open Graph image generator.

use std::path::Path;

use image::DynamicImage;

use crate::codec::{Codec, Format};
use crate::config::BrandConfig;
use crate::error::Result;
use crate::render::Renderer;
use crate::scene::{compose_banner, BannerStyle};

use super::{ensure_output_dir, write_file, Artifact, ArtifactKind};

pub const OG_IMAGE_FILENAME: &str = "og-image.png";

/// Generate `og-image.png` in `out_dir`.
pub fn generate_banner<R, C>(
    config: &BrandConfig,
    out_dir: &Path,
    renderer: &R,
    codec: &C,
) -> Result<Artifact>
where
    R: Renderer + ?Sized,
    C: Codec + ?Sized,
{
    ensure_output_dir(out_dir)?;

    let scene = compose_banner(&BannerStyle::from(&config.banner), &config.palette);
    let pixels = renderer.render(&scene)?;
    let bytes = codec.encode(&DynamicImage::ImageRgba8(pixels), Format::Png)?;

    let path = out_dir.join(OG_IMAGE_FILENAME);
    write_file(&path, &bytes)?;

    Ok(Artifact {
        path,
        width: scene.width,
        height: scene.height,
        kind: ArtifactKind::Png,
    })
}
