//! Batch optimizer for raster assets.
//!
//! Every eligible `name.png` / `name.jpg` below the assets directory gets a
//! `name.webp` sibling plus a recompressed `name.min.png` or `name.min.jpg`.
//! Originals are never touched. A file that fails is recorded and skipped;
//! the batch always runs to the end.

mod scanner;

use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::{Codec, Format};
use crate::config::OptimizeConfig;
use crate::error::{BrandError, Result};

pub use scanner::{
    detect_input_kind, is_minified, scan_images, InputKind, ScanResult, MINIFIED_MARKER,
};

/// Outputs produced for one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub outputs: Vec<PathBuf>,
}

/// A file the optimizer gave up on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Result of one optimizer run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptimizeReport {
    pub outcomes: Vec<FileOutcome>,
    pub failures: Vec<FileFailure>,
}

impl OptimizeReport {
    /// Number of files that were looked at.
    pub fn processed(&self) -> usize {
        self.outcomes.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processed() == 0
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Every file written during the run, in walk order.
    pub fn outputs(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .flat_map(|o| o.outputs.iter().map(PathBuf::as_path))
    }
}

/// Per-file progress reported while the batch runs.
#[derive(Debug)]
pub enum OptimizeEvent<'a> {
    Optimized(&'a FileOutcome),
    Failed(&'a FileFailure),
}

/// Sibling path of `input` with its stem suffixed and a new extension,
/// e.g. `hero.png` + (`.min`, `png`) -> `hero.min.png`.
fn sibling(input: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}.{}", stem, suffix, extension))
}

pub struct Optimizer<C> {
    codec: C,
    config: OptimizeConfig,
}

impl<C: Codec> Optimizer<C> {
    pub fn new(codec: C, config: OptimizeConfig) -> Self {
        Self { codec, config }
    }

    /// Optimize every eligible image below `root`.
    ///
    /// Fails only when `root` is not a directory. Per-file errors, including
    /// entries the directory walk could not read, are collected into the
    /// report and passed to `on_event`.
    pub fn run<F>(&self, root: &Path, mut on_event: F) -> Result<OptimizeReport>
    where
        F: FnMut(OptimizeEvent<'_>),
    {
        if !root.is_dir() {
            return Err(BrandError::Setup {
                message: format!("Assets directory not found: {}", root.display()),
                help: Some(
                    "Create the directory or point --out at an existing one".to_string(),
                ),
            });
        }

        let scan = scan_images(root);
        let mut report = OptimizeReport::default();
        for failure in scan.failures {
            on_event(OptimizeEvent::Failed(&failure));
            report.failures.push(failure);
        }

        for path in scan.images {
            match self.optimize_file(&path) {
                Ok(outputs) => {
                    let outcome = FileOutcome {
                        input: path,
                        outputs,
                    };
                    on_event(OptimizeEvent::Optimized(&outcome));
                    report.outcomes.push(outcome);
                }
                Err(err) => {
                    let failure = FileFailure {
                        path,
                        message: err.to_string(),
                    };
                    on_event(OptimizeEvent::Failed(&failure));
                    report.failures.push(failure);
                }
            }
        }

        Ok(report)
    }

    /// Write the WebP and minified variants of a single image.
    ///
    /// Returns the written paths. On error, outputs written before the
    /// failure are left in place.
    pub fn optimize_file(&self, input: &Path) -> Result<Vec<PathBuf>> {
        let kind = detect_input_kind(input).ok_or_else(|| BrandError::Encode {
            message: format!("Unsupported image type: {}", input.display()),
        })?;

        let bytes = fs::read(input)
            .map_err(|e| BrandError::io(input, format!("Failed to read image: {}", e)))?;
        let pixels = self.codec.decode(&bytes)?;

        let minified = match kind {
            InputKind::Png => Format::Png,
            InputKind::Jpeg => Format::Jpeg {
                quality: self.config.jpeg_quality,
            },
        };
        let targets = [
            (
                sibling(input, "", "webp"),
                Format::WebP {
                    quality: self.config.webp_quality,
                },
            ),
            (
                sibling(input, MINIFIED_MARKER, kind.minified_extension()),
                minified,
            ),
        ];

        let mut written = Vec::with_capacity(targets.len());
        for (path, format) in targets {
            let encoded = self.codec.encode(&pixels, format)?;
            fs::write(&path, encoded)
                .map_err(|e| BrandError::io(&path, format!("Failed to write file: {}", e)))?;
            written.push(path);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{IcoLayer, ImageCodec};
    use image::{DynamicImage, ImageBuffer, Rgba, RgbaImage};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample() -> RgbaImage {
        RgbaImage::from_fn(24, 16, |x, y| Rgba([(x * 10) as u8, (y * 15) as u8, 0x40, 255]))
    }

    fn write_sample(path: &Path, format: Format) -> Vec<u8> {
        let bytes = ImageCodec
            .encode(&DynamicImage::ImageRgba8(sample()), format)
            .unwrap();
        fs::write(path, &bytes).unwrap();
        bytes
    }

    fn optimizer() -> Optimizer<ImageCodec> {
        Optimizer::new(ImageCodec, OptimizeConfig::default())
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_sibling_names() {
        assert_eq!(
            sibling(Path::new("img/hero.png"), "", "webp"),
            PathBuf::from("img/hero.webp")
        );
        assert_eq!(
            sibling(Path::new("img/photo.JPEG"), ".min", "jpg"),
            PathBuf::from("img/photo.min.jpg")
        );
    }

    #[test]
    fn test_optimizes_png_and_jpeg() {
        let dir = tempdir().unwrap();
        let png = write_sample(&dir.path().join("a.png"), Format::Png);
        let jpg = write_sample(&dir.path().join("b.jpg"), Format::Jpeg { quality: 95 });

        let report = optimizer().run(dir.path(), |_| {}).unwrap();

        assert!(!report.has_failures());
        assert_eq!(report.outcomes.len(), 2);
        assert_eq!(
            file_names(dir.path()),
            vec!["a.min.png", "a.png", "a.webp", "b.jpg", "b.min.jpg", "b.webp"]
        );

        // Originals untouched.
        assert_eq!(fs::read(dir.path().join("a.png")).unwrap(), png);
        assert_eq!(fs::read(dir.path().join("b.jpg")).unwrap(), jpg);

        // Lossless PNG recompression keeps the pixels.
        let min = image::open(dir.path().join("a.min.png")).unwrap().to_rgba8();
        assert_eq!(min, sample());
        let webp = image::open(dir.path().join("b.webp")).unwrap();
        assert_eq!((webp.width(), webp.height()), (24, 16));
    }

    #[test]
    fn test_skips_minified_inputs() {
        let dir = tempdir().unwrap();
        write_sample(&dir.path().join("x.min.png"), Format::Png);

        let report = optimizer().run(dir.path(), |_| {}).unwrap();

        assert!(report.is_empty());
        assert_eq!(file_names(dir.path()), vec!["x.min.png"]);
    }

    #[test]
    fn test_rerun_does_not_chain_outputs() {
        let dir = tempdir().unwrap();
        write_sample(&dir.path().join("a.png"), Format::Png);

        optimizer().run(dir.path(), |_| {}).unwrap();
        let report = optimizer().run(dir.path(), |_| {}).unwrap();

        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(file_names(dir.path()), vec!["a.min.png", "a.png", "a.webp"]);
    }

    #[test]
    fn test_corrupt_file_is_isolated() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("img")).unwrap();
        fs::write(dir.path().join("img/broken.png"), b"not a png").unwrap();
        write_sample(&dir.path().join("img/good.png"), Format::Png);

        let mut events = Vec::new();
        let report = optimizer()
            .run(dir.path(), |event| {
                events.push(match event {
                    OptimizeEvent::Optimized(o) => format!("ok {}", o.input.display()),
                    OptimizeEvent::Failed(f) => format!("err {}", f.path.display()),
                })
            })
            .unwrap();

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].path, dir.path().join("img/broken.png"));
        assert!(!report.failures[0].message.is_empty());
        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(events.len(), 2);
        assert!(events[0].starts_with("err "));
        assert!(dir.path().join("img/good.webp").exists());
        assert!(dir.path().join("img/good.min.png").exists());
        assert!(!dir.path().join("img/broken.webp").exists());
    }

    #[test]
    fn test_sixteen_bit_png_keeps_precision() {
        let dir = tempdir().unwrap();
        let deep: ImageBuffer<Rgba<u16>, Vec<u16>> =
            ImageBuffer::from_fn(6, 3, |x, y| Rgba([1 + x as u16, 3, 12345 + y as u16, 65535]));
        let original = DynamicImage::ImageRgba16(deep);
        let bytes = ImageCodec.encode(&original, Format::Png).unwrap();
        fs::write(dir.path().join("deep.png"), bytes).unwrap();

        let report = optimizer().run(dir.path(), |_| {}).unwrap();
        assert!(!report.has_failures());

        let min = image::open(dir.path().join("deep.min.png")).unwrap();
        assert_eq!(min.color(), image::ColorType::Rgba16);
        assert_eq!(min, original);
    }

    #[test]
    fn test_webp_respects_quality_setting() {
        let dir = tempdir().unwrap();
        let grainy = RgbaImage::from_fn(64, 48, |x, y| {
            let grain = ((x * 29 + y * 13) ^ (x * y)) % 31;
            Rgba([(x * 2 + grain) as u8, (y * 3 + grain) as u8, (grain * 5) as u8, 255])
        });
        let bytes = ImageCodec
            .encode(&DynamicImage::ImageRgba8(grainy), Format::Jpeg { quality: 95 })
            .unwrap();
        fs::write(dir.path().join("photo.jpg"), bytes).unwrap();

        let webp_size = |quality: u8| {
            let config = OptimizeConfig {
                webp_quality: quality,
                ..OptimizeConfig::default()
            };
            Optimizer::new(ImageCodec, config)
                .run(dir.path(), |_| {})
                .unwrap();
            fs::metadata(dir.path().join("photo.webp")).unwrap().len()
        };

        let low = webp_size(10);
        let high = webp_size(100);
        assert!(low < high, "q10 {} bytes, q100 {} bytes", low, high);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_errors_are_reported() {
        let dir = tempdir().unwrap();
        write_sample(&dir.path().join("a.png"), Format::Png);
        std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join("link.png"))
            .unwrap();

        let mut failed = Vec::new();
        let report = optimizer()
            .run(dir.path(), |event| {
                if let OptimizeEvent::Failed(f) = event {
                    failed.push(f.path.clone());
                }
            })
            .unwrap();

        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(failed, vec![dir.path().join("link.png")]);
        assert!(report.has_failures());
    }

    struct NoWebpCodec;

    impl Codec for NoWebpCodec {
        fn encode(&self, image: &DynamicImage, format: Format) -> Result<Vec<u8>> {
            match format {
                Format::WebP { .. } => Err(BrandError::Encode {
                    message: "webp disabled".to_string(),
                }),
                other => ImageCodec.encode(image, other),
            }
        }

        fn decode(&self, bytes: &[u8]) -> Result<DynamicImage> {
            ImageCodec.decode(bytes)
        }

        fn encode_ico(&self, layers: &[IcoLayer<'_>]) -> Result<Vec<u8>> {
            ImageCodec.encode_ico(layers)
        }
    }

    #[test]
    fn test_encoder_failure_does_not_abort_batch() {
        let dir = tempdir().unwrap();
        write_sample(&dir.path().join("a.png"), Format::Png);
        write_sample(&dir.path().join("b.png"), Format::Png);

        let report = Optimizer::new(NoWebpCodec, OptimizeConfig::default())
            .run(dir.path(), |_| {})
            .unwrap();

        assert_eq!(report.failures.len(), 2);
        assert!(report.outcomes.is_empty());
        assert!(report.failures[0].message.contains("webp disabled"));
    }

    #[test]
    fn test_missing_root_is_setup_error() {
        let dir = tempdir().unwrap();
        let err = optimizer()
            .run(&dir.path().join("missing"), |_| {})
            .unwrap_err();
        assert!(matches!(err, BrandError::Setup { .. }));
    }
}
