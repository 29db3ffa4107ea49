//! Per-file records and the aggregated report.

/// A single file's normalized metadata: promoted keys first, then the
/// remaining original keys in their original relative order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Source filename (not the full path).
    pub filename: String,
    /// Ordered key/value entries.
    pub entries: Vec<(String, String)>,
}

impl FileRecord {
    #[must_use]
    pub fn new(filename: impl Into<String>, entries: Vec<(String, String)>) -> Self {
        Self {
            filename: filename.into(),
            entries,
        }
    }
}

/// The aggregated report for one directory scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Derived document title (first file's stem, frame digits stripped,
    /// `metadata` appended).
    pub title: String,
    /// Records in processing order.
    pub records: Vec<FileRecord>,
}

/// Why a directory entry was not processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Recognized image format, but not the configured target extension.
    OtherUsableFormat,
    /// Extension outside the usable set entirely.
    UnsupportedExtension,
    /// No extension at all.
    NoExtension,
    /// Reading the file failed and the run policy allows skipping.
    ReadFailed,
}

impl SkipReason {
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::OtherUsableFormat => "other image format",
            Self::UnsupportedExtension => "not a usable image extension",
            Self::NoExtension => "no file extension",
            Self::ReadFailed => "could not read metadata",
        }
    }
}

/// Outcome of handling one directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Metadata extracted; the record carries this many entries.
    Processed { filename: String, entry_count: usize },
    /// Entry was skipped, with the reason.
    Skipped {
        filename: String,
        reason: SkipReason,
    },
}
