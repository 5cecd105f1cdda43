//! This module defines the command line interface (CLI) of the demonstration
//! binary.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Csv,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(
        value_name = "N",
        value_parser = clap::value_parser!(u64).range(0..=93),
        help = "Fibonacci index to compute (93 is the largest fitting 64 bits)"
    )]
    pub n: u64,

    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity level"
    )]
    pub verbosity: u8,

    #[arg(
        long,
        short = 'l',
        value_name = "LOG_FILE",
        help = "Optional path to the log file. Defaults to stderr if not specified."
    )]
    pub log_output: Option<PathBuf>,

    #[arg(
        value_enum,
        short = 't',
        long = "to",
        default_value = "plain",
        help = "The output format"
    )]
    pub output_format: OutputFormat,

    #[arg(
        short = 's',
        long = "sequence",
        help = "Also print every value of the sequence up to N"
    )]
    pub sequence: bool,
}
