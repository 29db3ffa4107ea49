//! Run configuration.

use std::path::PathBuf;

/// Image extensions this tool knows how to classify. Files whose extension
/// falls outside this set (and is not the configured target) are warned
/// about and skipped.
pub const USABLE_EXTENSIONS: [&str; 4] = ["exr", "arw", "raw", "dng"];

/// What to do when a candidate file cannot be opened or parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadFailurePolicy {
    /// Abort the whole run; no output document is written.
    #[default]
    FailFast,
    /// Log a warning and continue with the remaining files.
    SkipAndWarn,
}

/// Explicit configuration for one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Directory to scan (non-recursive).
    pub images_dir: PathBuf,
    /// Target file extension, lowercase, without a leading dot.
    pub target_extension: String,
    /// Optional lens serial-number table; absence disables lens resolution.
    pub lens_table: Option<PathBuf>,
    /// Per-file read failure policy.
    pub on_read_failure: ReadFailurePolicy,
}

impl ExtractOptions {
    /// Build options, normalizing the extension (leading dot and case are
    /// stripped, matching the original CLI contract).
    #[must_use]
    pub fn new(images_dir: impl Into<PathBuf>, target_extension: &str) -> Self {
        Self {
            images_dir: images_dir.into(),
            target_extension: normalize_extension(target_extension),
            lens_table: None,
            on_read_failure: ReadFailurePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_lens_table(mut self, path: Option<PathBuf>) -> Self {
        self.lens_table = path;
        self
    }

    #[must_use]
    pub fn with_read_failure_policy(mut self, policy: ReadFailurePolicy) -> Self {
        self.on_read_failure = policy;
        self
    }
}

fn normalize_extension(raw: &str) -> String {
    raw.trim().trim_start_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_normalized() {
        let options = ExtractOptions::new("/tmp", ".EXR");
        assert_eq!(options.target_extension, "exr");
        let options = ExtractOptions::new("/tmp", "Dng");
        assert_eq!(options.target_extension, "dng");
    }

    #[test]
    fn defaults_to_fail_fast() {
        let options = ExtractOptions::new("/tmp", "exr");
        assert_eq!(options.on_read_failure, ReadFailurePolicy::FailFast);
        assert!(options.lens_table.is_none());
    }
}
