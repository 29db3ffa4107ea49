//! Directory listing and extension classification.

use std::path::{Path, PathBuf};

use seqmeta_model::USABLE_EXTENSIONS;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Classification of one directory entry against the configured target
/// extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClass {
    /// Extension equals the target; the file should be processed.
    Candidate,
    /// Extension is in the usable image set but is not the target.
    OtherUsableFormat,
    /// Extension is outside the usable set entirely.
    Unsupported,
    /// The filename has no extension.
    NoExtension,
}

/// Lists regular files in `dir`, in the order the filesystem yields them.
///
/// The listing is deliberately not sorted: processing order and the
/// "first file" used for title derivation both follow directory order.
pub fn list_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        } else {
            debug!(path = %path.display(), "skipping non-file entry");
        }
    }
    Ok(files)
}

/// Classifies a filename by its extension (case-insensitive, after the
/// last dot) against the target extension.
#[must_use]
pub fn classify(filename: &str, target_extension: &str) -> FileClass {
    let Some(extension) = extension_of(filename) else {
        return FileClass::NoExtension;
    };
    if extension.eq_ignore_ascii_case(target_extension) {
        return FileClass::Candidate;
    }
    if USABLE_EXTENSIONS
        .iter()
        .any(|usable| extension.eq_ignore_ascii_case(usable))
    {
        return FileClass::OtherUsableFormat;
    }
    FileClass::Unsupported
}

/// Returns the extension after the last dot, or `None` when there is no
/// dot or it would leave an empty stem (dotfiles count as extensionless).
fn extension_of(filename: &str) -> Option<&str> {
    let (stem, extension) = filename.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }
    Some(extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn list_entries_returns_only_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.exr"), b"x").unwrap();
        std::fs::write(dir.path().join("b.txt"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let files = list_entries(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.is_file()));
    }

    #[test]
    fn list_entries_missing_dir_fails() {
        let err = list_entries(Path::new("/no/such/dir")).unwrap_err();
        assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
    }

    #[test]
    fn classify_target_extension() {
        assert_eq!(classify("shot_0001.exr", "exr"), FileClass::Candidate);
        assert_eq!(classify("shot_0001.EXR", "exr"), FileClass::Candidate);
        assert_eq!(classify("frame.DNG", "dng"), FileClass::Candidate);
    }

    #[test]
    fn classify_other_usable_format() {
        assert_eq!(classify("shot.arw", "exr"), FileClass::OtherUsableFormat);
        assert_eq!(classify("shot.raw", "exr"), FileClass::OtherUsableFormat);
    }

    #[test]
    fn classify_unsupported() {
        assert_eq!(classify("notes.txt", "exr"), FileClass::Unsupported);
        assert_eq!(classify("thumb.jpg", "exr"), FileClass::Unsupported);
    }

    #[test]
    fn classify_no_extension() {
        assert_eq!(classify("Makefile", "exr"), FileClass::NoExtension);
        assert_eq!(classify(".hidden", "exr"), FileClass::NoExtension);
    }

    #[test]
    fn classify_uses_last_dot() {
        assert_eq!(classify("shot.010.exr", "exr"), FileClass::Candidate);
        assert_eq!(classify("shot.exr.tmp", "exr"), FileClass::Unsupported);
    }
}
