use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while discovering files or reading their metadata.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("images directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to read directory {path}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("lens table {path} is not readable as CSV")]
    LensTable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("could not open or read metadata in {path}: {message}")]
    ImageRead { path: PathBuf, message: String },

    #[error("no built-in reader for .{extension} files: {path}")]
    UnsupportedReader { path: PathBuf, extension: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;
