//! Logger setup for the demonstration binary.

use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Configures env_logger from the CLI verbosity and optional log file path.
pub fn setup_logger(verbosity: u8, log_output: Option<PathBuf>) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let target = match log_output {
        None => Target::Stderr,
        Some(path) => match File::create(&path) {
            Ok(file) => Target::Pipe(Box::new(file) as Box<dyn Write + Send>),
            Err(err) => {
                eprintln!(
                    "could not create log file {}: {}; logging to stderr",
                    path.display(),
                    err
                );
                Target::Stderr
            }
        },
    };

    Builder::from_default_env()
        .format_timestamp(None)
        .filter_level(level)
        .target(target)
        .init();
}
