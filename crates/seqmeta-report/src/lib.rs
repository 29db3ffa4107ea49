//! XML report output.

pub mod xml;

pub use xml::{render_report, write_report};
