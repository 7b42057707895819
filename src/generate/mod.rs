//! Asset generators.
//!
//! Each generator composes a scene, renders it through a `Renderer`,
//! encodes it through a `Codec` and writes fixed file names into the
//! output directory. Nothing is retried; the first failure aborts the run.

mod banner;
mod mark;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BrandError, Result};

pub use banner::{generate_banner, OG_IMAGE_FILENAME};
pub use mark::{
    generate_mark, transient_favicon_path, FAVICON_ICO_FILENAME, FAVICON_PNG_FILENAME,
    LOGO_FILENAME,
};

/// Kind of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Png,
    Ico,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Png => write!(f, "png"),
            ArtifactKind::Ico => write!(f, "ico"),
        }
    }
}

/// A file written by a generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub kind: ArtifactKind,
}

/// Create the output directory if it does not exist yet.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| BrandError::Setup {
        message: format!("Failed to create output directory {}: {}", dir.display(), e),
        help: Some("Check that the parent directory exists and is writable".to_string()),
    })
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|e| BrandError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })
}

/// A file that only lives for the duration of one generator run.
///
/// Removed when dropped, so it never outlives the run whether the run
/// succeeds or fails.
struct TransientFile {
    path: PathBuf,
}

impl TransientFile {
    fn create(path: PathBuf, bytes: &[u8]) -> Result<Self> {
        write_file(&path, bytes)?;
        Ok(Self { path })
    }

    fn read(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(|e| BrandError::Io {
            path: self.path.clone(),
            message: format!("Failed to read back intermediate file: {}", e),
        })
    }
}

impl Drop for TransientFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_output_dir_creates_nested() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("my-app").join("public");

        ensure_output_dir(&out).unwrap();
        assert!(out.is_dir());
        // Idempotent.
        ensure_output_dir(&out).unwrap();
    }

    #[test]
    fn test_ensure_output_dir_fails_under_a_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("public");
        fs::write(&blocker, "not a directory").unwrap();

        let err = ensure_output_dir(&blocker.join("nested")).unwrap_err();
        assert!(matches!(err, BrandError::Setup { .. }));
    }

    #[test]
    fn test_transient_file_removed_on_drop() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("favicon-32.png");

        {
            let file = TransientFile::create(path.clone(), b"bytes").unwrap();
            assert_eq!(file.read().unwrap(), b"bytes");
            assert!(path.exists());
        }
        assert!(!path.exists());
    }
}
