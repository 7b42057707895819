//! Image encoding and decoding.
//!
//! The `Codec` trait is the boundary between generated or loaded pixels and
//! persisted bytes. `ImageCodec` implements it on top of the `image` and
//! `webp` crates.

use std::fmt;

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ExtendedColorType, ImageEncoder};

use crate::error::{BrandError, Result};

/// Encoded output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Lossless PNG at maximum compression.
    Png,
    Jpeg { quality: u8 },
    WebP { quality: u8 },
}

impl Format {
    /// Canonical file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Jpeg { .. } => "jpg",
            Format::WebP { .. } => "webp",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Png => write!(f, "PNG"),
            Format::Jpeg { quality } => write!(f, "JPEG (q{})", quality),
            Format::WebP { quality } => write!(f, "WebP (q{})", quality),
        }
    }
}

/// One PNG-encoded frame of an ICO container.
#[derive(Debug, Clone, Copy)]
pub struct IcoLayer<'a> {
    pub png: &'a [u8],
    pub width: u32,
    pub height: u32,
}

/// Capability to turn pixels into bytes and back.
///
/// Images travel as `DynamicImage` so decoded inputs keep their colour type
/// and bit depth until an output format needs something narrower.
pub trait Codec {
    fn encode(&self, image: &DynamicImage, format: Format) -> Result<Vec<u8>>;

    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage>;

    /// Pack PNG-encoded frames into a single `.ico` file.
    fn encode_ico(&self, layers: &[IcoLayer<'_>]) -> Result<Vec<u8>>;
}

impl<C: Codec + ?Sized> Codec for &C {
    fn encode(&self, image: &DynamicImage, format: Format) -> Result<Vec<u8>> {
        (**self).encode(image, format)
    }

    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage> {
        (**self).decode(bytes)
    }

    fn encode_ico(&self, layers: &[IcoLayer<'_>]) -> Result<Vec<u8>> {
        (**self).encode_ico(layers)
    }
}

/// Codec backed by the `image` crate, with lossy WebP from libwebp.
///
/// PNG keeps the source colour type (8 or 16 bits, with or without alpha).
/// JPEG is written as 8-bit RGB and WebP as 8-bit RGBA.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCodec;

impl ImageCodec {
    fn encode_png(image: &DynamicImage) -> image::ImageResult<Vec<u8>> {
        let mut buf = Vec::new();
        let encoder =
            PngEncoder::new_with_quality(&mut buf, CompressionType::Best, FilterType::Adaptive);
        match image {
            // PNG has no float samples.
            DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
                DynamicImage::ImageRgba16(image.to_rgba16()).write_with_encoder(encoder)?
            }
            _ => image.write_with_encoder(encoder)?,
        }
        Ok(buf)
    }

    fn encode_jpeg(image: &DynamicImage, quality: u8) -> image::ImageResult<Vec<u8>> {
        let mut buf = Vec::new();
        // JPEG has no alpha channel.
        let rgb = image.to_rgb8();
        JpegEncoder::new_with_quality(&mut buf, quality.clamp(1, 100)).write_image(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            ExtendedColorType::Rgb8,
        )?;
        Ok(buf)
    }

    fn encode_webp(image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
        let rgba = image.to_rgba8();
        let quality = f32::from(quality.min(100));
        let encoded = webp::Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height())
            .encode_simple(false, quality)
            .map_err(|e| BrandError::Encode {
                message: format!("Failed to encode WebP (q{}): {:?}", quality, e),
            })?;
        Ok(encoded.to_vec())
    }
}

impl Codec for ImageCodec {
    fn encode(&self, image: &DynamicImage, format: Format) -> Result<Vec<u8>> {
        let result = match format {
            Format::Png => Self::encode_png(image),
            Format::Jpeg { quality } => Self::encode_jpeg(image, quality),
            Format::WebP { quality } => return Self::encode_webp(image, quality),
        };

        result.map_err(|e| BrandError::Encode {
            message: format!("Failed to encode {}: {}", format, e),
        })
    }

    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage> {
        image::load_from_memory(bytes).map_err(|e| BrandError::Encode {
            message: format!("Failed to decode image: {}", e),
        })
    }

    fn encode_ico(&self, layers: &[IcoLayer<'_>]) -> Result<Vec<u8>> {
        if layers.is_empty() {
            return Err(BrandError::Encode {
                message: "An icon needs at least one frame".to_string(),
            });
        }

        let frames = layers
            .iter()
            .map(|layer| {
                IcoFrame::with_encoded(
                    layer.png,
                    layer.width,
                    layer.height,
                    ExtendedColorType::Rgba8,
                )
            })
            .collect::<image::ImageResult<Vec<_>>>()
            .map_err(|e| BrandError::Encode {
                message: format!("Invalid icon frame: {}", e),
            })?;

        let mut buf = Vec::new();
        IcoEncoder::new(&mut buf)
            .encode_images(&frames)
            .map_err(|e| BrandError::Encode {
                message: format!("Failed to encode ICO: {}", e),
            })?;
        Ok(buf)
    }
}
