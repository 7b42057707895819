//! File system scanner for optimizable images.
//!
//! Recursively walks the assets directory and picks out PNG and JPEG files
//! that are not themselves optimizer output.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::FileFailure;

/// Suffix marking optimizer output; such files are never re-processed.
pub const MINIFIED_MARKER: &str = ".min";

/// Raster formats the optimizer accepts as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Png,
    Jpeg,
}

impl InputKind {
    /// Extension of the format-preserving minified output.
    pub fn minified_extension(self) -> &'static str {
        match self {
            InputKind::Png => "png",
            InputKind::Jpeg => "jpg",
        }
    }
}

/// Detect the input kind from a file extension (case-insensitive).
pub fn detect_input_kind(path: &Path) -> Option<InputKind> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some(InputKind::Png),
        "jpg" | "jpeg" => Some(InputKind::Jpeg),
        _ => None,
    }
}

/// Whether a file is optimizer output such as `hero.min.png`.
pub fn is_minified(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|stem| stem.to_ascii_lowercase().ends_with(MINIFIED_MARKER))
        .unwrap_or(false)
}

/// Images found below the assets directory, plus entries the walk could
/// not read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub images: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

/// Recursively collect eligible images under `root` in depth-first,
/// name-sorted order.
///
/// Unreadable directories, broken symlinks and link cycles are reported as
/// failures instead of being skipped.
pub fn scan_images(root: &Path) -> ScanResult {
    let mut result = ScanResult::default();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                result.failures.push(FileFailure {
                    path,
                    message: format!("Failed to scan: {}", err),
                });
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if detect_input_kind(&path).is_some() && !is_minified(&path) {
            result.images.push(path);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_detect_input_kind() {
        assert_eq!(detect_input_kind(Path::new("a.png")), Some(InputKind::Png));
        assert_eq!(detect_input_kind(Path::new("b.jpg")), Some(InputKind::Jpeg));
        assert_eq!(detect_input_kind(Path::new("c.JPEG")), Some(InputKind::Jpeg));
        assert_eq!(detect_input_kind(Path::new("d.webp")), None);
        assert_eq!(detect_input_kind(Path::new("favicon.ico")), None);
        assert_eq!(detect_input_kind(Path::new("README")), None);
    }

    #[test]
    fn test_is_minified() {
        assert!(is_minified(Path::new("x.min.png")));
        assert!(is_minified(Path::new("dir/photo.min.jpg")));
        assert!(is_minified(Path::new("photo.MIN.JPG")));
        assert!(!is_minified(Path::new("x.png")));
        assert!(!is_minified(Path::new("admin.png")));
    }

    #[test]
    fn test_scan_filters_and_recurses() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("img/nested")).unwrap();

        for name in [
            "a.png",
            "b.jpg",
            "a.webp",
            "a.min.png",
            "notes.txt",
            "img/c.jpeg",
            "img/nested/d.PNG",
            "img/nested/d.min.jpg",
        ] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let scan = scan_images(dir.path());
        assert!(scan.failures.is_empty());

        let found: Vec<String> = scan
            .images
            .iter()
            .map(|p| {
                p.strip_prefix(dir.path())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();

        assert_eq!(found, vec!["a.png", "b.jpg", "img/c.jpeg", "img/nested/d.PNG"]);
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        let scan = scan_images(Path::new("/nonexistent/path"));
        assert!(scan.images.is_empty());
        assert_eq!(scan.failures.len(), 1);
        assert_eq!(scan.failures[0].path, PathBuf::from("/nonexistent/path"));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_reports_broken_symlink() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.png"), b"x").unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.png"), dir.path().join("b.png"))
            .unwrap();

        let scan = scan_images(dir.path());

        assert_eq!(scan.images, vec![dir.path().join("a.png")]);
        assert_eq!(scan.failures.len(), 1);
        assert_eq!(scan.failures[0].path, dir.path().join("b.png"));
        assert!(scan.failures[0].message.starts_with("Failed to scan"));
    }
}
