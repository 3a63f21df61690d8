use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use tracing_subscriber::EnvFilter;
use words::Letters;

const USAGE: &str = "Usage: get-letters [number]";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "rejected arguments");
            let _ = e.print();
            println!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(mask = opts.number.mask(), "decoded letters");
    println!("{}", opts.number);
    ExitCode::SUCCESS
}

/// CLI to list the letters selected by a bitmask
#[derive(Parser)]
#[command(version)]
struct Opts {
    /// Non-negative decimal bitmask. Bit 0 is `a`, bit 25 is `z`; higher bits are ignored.
    #[arg(allow_negative_numbers = true)]
    number: Letters,
}
