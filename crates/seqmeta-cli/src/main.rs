//! Sequence metadata extractor CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};

mod cli;
mod logging;
mod summary;

use crate::cli::{Cli, LogFormatArg};
use crate::logging::{LogConfig, LogFormat, init_logging};
use crate::summary::print_summary;
use seqmeta_ingest::ExrAttributeReader;
use seqmeta_model::{ExtractOptions, ReadFailurePolicy};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli));

    let policy = if cli.skip_unreadable {
        ReadFailurePolicy::SkipAndWarn
    } else {
        ReadFailurePolicy::FailFast
    };
    let options = ExtractOptions::new(cli.images, &cli.extension)
        .with_lens_table(cli.lens_list)
        .with_read_failure_policy(policy);

    let exit_code = match seqmeta_core::run(&options, &ExrAttributeReader) {
        Ok(summary) => {
            print_summary(&summary);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stderr().is_terminal(),
        },
    }
}
