use clap::Parser;
use itertools::Itertools;
use log::{debug, info};
use std::process;

mod cli;
mod logging;

use memotable::error::KeyEncodingError;
use memotable::recursive::{RecMemoizer, Recur};

fn fib(n: &u64, rec: &mut Recur<'_, u64, u64>) -> Result<u64, KeyEncodingError> {
    if *n <= 1 {
        return Ok(*n);
    }
    Ok(rec.call(&(n - 1))? + rec.call(&(n - 2))?)
}

fn run(args: &cli::Args) -> Result<(), KeyEncodingError> {
    let mut memo = RecMemoizer::new(fib);

    let value = memo.call(&args.n)?;
    info!("fibonacci({}) filled {} cache entries", args.n, memo.len());

    match args.output_format {
        cli::OutputFormat::Plain => {
            println!("fibonacci({}) = {}", args.n, value);
            if args.sequence {
                // every index is already cached from the top-level call
                let sequence: Result<Vec<u64>, KeyEncodingError> =
                    (0..=args.n).map(|i| memo.call(&i)).collect();
                println!("sequence: {}", sequence?.iter().format(", "));
            }
        }
        cli::OutputFormat::Csv => {
            println!("n,fibonacci");
            for i in 0..=args.n {
                println!("{},{}", i, memo.call(&i)?);
            }
        }
    }

    debug!("cache holds {} entries", memo.len());
    Ok(())
}

fn main() {
    let args = cli::Args::parse();

    logging::setup_logger(args.verbosity, args.log_output.clone());

    if let Err(err) = run(&args) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
