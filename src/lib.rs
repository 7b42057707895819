//! brandmark - Brand image generator and web asset optimizer
//!
//! Composes the hexagon mark and the Open Graph banner as resolution
//! independent scenes, rasterizes them into fixed-name PNG/ICO files, and
//! batch-converts raster assets into WebP and minified variants.

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod generate;
pub mod optimize;
pub mod output;
pub mod render;
pub mod scene;
pub mod types;
pub mod validation;

pub use codec::{Codec, Format, IcoLayer, ImageCodec};
pub use config::{BannerConfig, BrandConfig, MarkConfig, OptimizeConfig};
pub use error::{BrandError, Result};
pub use generate::{generate_banner, generate_mark, Artifact, ArtifactKind};
pub use optimize::{FileFailure, FileOutcome, OptimizeEvent, OptimizeReport, Optimizer};
pub use render::{to_svg, Renderer, SvgRenderer};
pub use scene::{compose_banner, compose_mark, BannerStyle, DrawOp, MarkMetrics, MarkStyle, Scene};
pub use types::{Colour, Palette};
pub use validation::{validate_banner, validate_mark, validate_scene, Diagnostic, Severity, ValidationResult};
