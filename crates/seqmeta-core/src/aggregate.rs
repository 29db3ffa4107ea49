//! Report accumulation and title derivation.

use seqmeta_model::{FileRecord, Report};

/// Accumulates normalized records across one directory scan.
///
/// The report title is derived from the first record pushed; with zero
/// records, no report (and so no output document) is produced.
#[derive(Debug, Default)]
pub struct Aggregator {
    title: Option<String>,
    records: Vec<FileRecord>,
}

impl Aggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: FileRecord) {
        if self.title.is_none() {
            self.title = Some(derive_title(&record.filename));
        }
        self.records.push(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finish the scan. `None` when nothing was processed.
    #[must_use]
    pub fn into_report(self) -> Option<Report> {
        let title = self.title?;
        Some(Report {
            title,
            records: self.records,
        })
    }
}

/// Derive the report title from the first processed filename: drop the
/// extension, strip the trailing frame-number digits plus any separator
/// they leave dangling, and append `metadata`.
///
/// `shot010_0001.exr` becomes `shot010metadata`. The digit strip runs
/// once; digits uncovered by removing the separator stay put.
#[must_use]
pub fn derive_title(filename: &str) -> String {
    let stem = filename
        .rsplit_once('.')
        .map_or(filename, |(stem, _)| stem);
    let stem = stem.trim_end_matches(|ch: char| ch.is_ascii_digit());
    let stem = stem.trim_end_matches(['_', '-', '.']);
    format!("{stem}metadata")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_title_from_frame_numbered_name() {
        assert_eq!(derive_title("shot010_0001.exr"), "shot010metadata");
        assert_eq!(derive_title("shot010_0002.exr"), "shot010metadata");
    }

    #[test]
    fn derives_title_without_frame_number() {
        assert_eq!(derive_title("plate.exr"), "platemetadata");
    }

    #[test]
    fn strips_only_one_digit_group() {
        // Digits uncovered by the separator strip are kept.
        assert_eq!(derive_title("shot010_0001_0002.exr"), "shot010_0001metadata");
    }

    #[test]
    fn handles_name_without_extension() {
        assert_eq!(derive_title("shot010_0001"), "shot010metadata");
    }

    #[test]
    fn all_digit_stem_degenerates_cleanly() {
        assert_eq!(derive_title("0001.exr"), "metadata");
    }

    #[test]
    fn title_comes_from_first_record() {
        let mut aggregator = Aggregator::new();
        aggregator.push(FileRecord::new("shot020_0005.exr", vec![]));
        aggregator.push(FileRecord::new("shot010_0001.exr", vec![]));
        let report = aggregator.into_report().unwrap();
        assert_eq!(report.title, "shot020metadata");
        assert_eq!(report.records.len(), 2);
    }

    #[test]
    fn empty_aggregator_yields_no_report() {
        let aggregator = Aggregator::new();
        assert!(aggregator.is_empty());
        assert!(aggregator.into_report().is_none());
    }
}
