//! Core normalization and aggregation for sequence metadata reports.

pub mod aggregate;
pub mod normalize;
pub mod pipeline;

pub use aggregate::{Aggregator, derive_title};
pub use normalize::{PROMOTED_KEYS, normalize};
pub use pipeline::{RunSummary, run};
