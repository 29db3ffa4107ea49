//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "seqmeta",
    version,
    about = "Extract embedded metadata from image sequences into an XML report",
    long_about = "Scan a directory of image-sequence files (EXR by default), extract the\n\
                  embedded metadata attributes of each file, optionally resolve lens\n\
                  serial numbers to focal lengths via a CSV table, and write one XML\n\
                  report per directory."
)]
pub struct Cli {
    /// Directory of image sequences with metadata (non-recursive).
    #[arg(
        short = 'i',
        long = "images",
        value_name = "DIR",
        default_value = "."
    )]
    pub images: PathBuf,

    /// CSV file of lens serial numbers and their mm equivalents,
    /// e.g. "Z50108175, 29mm". Absence disables lens resolution.
    #[arg(short = 'l', long = "lens_list", value_name = "PATH")]
    pub lens_list: Option<PathBuf>,

    /// Desired file extension to process (leading dot and case are ignored).
    #[arg(
        short = 't',
        long = "type",
        value_name = "EXT",
        default_value = "exr"
    )]
    pub extension: String,

    /// Warn and continue past unreadable files instead of aborting the run.
    #[arg(long = "skip-unreadable")]
    pub skip_unreadable: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
