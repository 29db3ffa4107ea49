//! The run-to-completion extraction pipeline.
//!
//! Directory listing → extension classification → attribute reading →
//! normalization → aggregation → XML report, fully sequential, one file
//! at a time in directory-listing order. The report is written once at
//! the end, and only when at least one file was processed.

use std::ffi::OsStr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use seqmeta_ingest::lens::LensResolver;
use seqmeta_ingest::reader::AttributeReader;
use seqmeta_ingest::{FileClass, classify, list_entries};
use seqmeta_model::{ExtractOptions, FileOutcome, ReadFailurePolicy, SkipReason};
use seqmeta_report::write_report;

use crate::aggregate::Aggregator;
use crate::normalize::normalize;

/// What one run did: where the report went (if anywhere) and what happened
/// to each directory entry that was considered.
#[derive(Debug)]
pub struct RunSummary {
    pub scanned_dir: PathBuf,
    pub output_path: Option<PathBuf>,
    pub outcomes: Vec<FileOutcome>,
}

impl RunSummary {
    #[must_use]
    pub fn processed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, FileOutcome::Processed { .. }))
            .count()
    }

    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.processed_count()
    }
}

/// Run one extraction over the configured directory.
///
/// Fatal conditions (unreadable directory, configured-but-unreadable lens
/// table, unreadable candidate file under [`ReadFailurePolicy::FailFast`])
/// abort with no output document written. Wrong-extension files are
/// skipped and recorded. With zero processed files the run succeeds and
/// writes nothing.
pub fn run(options: &ExtractOptions, reader: &dyn AttributeReader) -> Result<RunSummary> {
    let entries = list_entries(&options.images_dir)
        .with_context(|| format!("scanning {}", options.images_dir.display()))?;

    let mut resolver = LensResolver::new(options.lens_table.clone());
    let mut aggregator = Aggregator::new();
    let mut outcomes = Vec::new();

    for path in entries {
        let Some(filename) = path.file_name().and_then(OsStr::to_str) else {
            debug!(path = %path.display(), "skipping non-utf8 filename");
            continue;
        };

        match classify(filename, &options.target_extension) {
            FileClass::Candidate => match reader.read_attributes(&path) {
                Ok(attrs) => {
                    debug!(file = filename, "extracting metadata");
                    let record = normalize(filename, &attrs, &mut resolver)
                        .with_context(|| format!("normalizing {filename}"))?;
                    outcomes.push(FileOutcome::Processed {
                        filename: filename.to_string(),
                        entry_count: record.entries.len(),
                    });
                    aggregator.push(record);
                }
                Err(error) => match options.on_read_failure {
                    ReadFailurePolicy::FailFast => {
                        return Err(error)
                            .with_context(|| format!("reading {}", path.display()));
                    }
                    ReadFailurePolicy::SkipAndWarn => {
                        warn!(file = filename, %error, "could not read metadata, skipping");
                        outcomes.push(FileOutcome::Skipped {
                            filename: filename.to_string(),
                            reason: SkipReason::ReadFailed,
                        });
                    }
                },
            },
            FileClass::OtherUsableFormat => {
                debug!(file = filename, "recognized format but not the target extension");
                outcomes.push(FileOutcome::Skipped {
                    filename: filename.to_string(),
                    reason: SkipReason::OtherUsableFormat,
                });
            }
            FileClass::Unsupported => {
                warn!(file = filename, "not an image extension usable in this tool");
                outcomes.push(FileOutcome::Skipped {
                    filename: filename.to_string(),
                    reason: SkipReason::UnsupportedExtension,
                });
            }
            FileClass::NoExtension => {
                debug!(file = filename, "no extension, skipping");
                outcomes.push(FileOutcome::Skipped {
                    filename: filename.to_string(),
                    reason: SkipReason::NoExtension,
                });
            }
        }
    }

    let output_path = match aggregator.into_report() {
        Some(report) => {
            let path = options.images_dir.join(format!("{}.xml", report.title));
            write_report(&path, &report)?;
            info!(
                records = report.records.len(),
                output = %path.display(),
                "wrote metadata report"
            );
            Some(path)
        }
        None => {
            info!(dir = %options.images_dir.display(), "no qualifying files, nothing written");
            None
        }
    };

    Ok(RunSummary {
        scanned_dir: options.images_dir.clone(),
        output_path,
        outcomes,
    })
}
