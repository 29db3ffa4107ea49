//! Data model for the sequence metadata extractor.

pub mod attrs;
pub mod options;
pub mod record;

pub use attrs::AttributeMap;
pub use options::{ExtractOptions, ReadFailurePolicy, USABLE_EXTENSIONS};
pub use record::{FileOutcome, FileRecord, Report, SkipReason};
