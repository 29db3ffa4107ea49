//! Ingestion: directory discovery, lens table resolution, and the
//! attribute reader seam.

pub mod discovery;
pub mod error;
pub mod lens;
pub mod reader;

pub use discovery::{FileClass, classify, list_entries};
pub use error::{IngestError, Result};
pub use lens::{LensResolver, LensTable};
pub use reader::{AttributeReader, ExrAttributeReader};
