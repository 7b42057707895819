//! Rendering backends.
//!
//! Generators only depend on the `Renderer` capability: turn a `Scene` into
//! an RGBA pixel buffer. The shipped backend serializes the scene to SVG and
//! rasterizes it with `resvg`.

mod raster;
mod svg;

use image::RgbaImage;

use crate::error::Result;
use crate::scene::Scene;

pub use raster::SvgRenderer;
pub use svg::to_svg;

/// Capability to rasterize a scene.
pub trait Renderer {
    /// Render `scene` into a `scene.width`×`scene.height` straight-alpha
    /// RGBA buffer.
    fn render(&self, scene: &Scene) -> Result<RgbaImage>;
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn render(&self, scene: &Scene) -> Result<RgbaImage> {
        (**self).render(scene)
    }
}
