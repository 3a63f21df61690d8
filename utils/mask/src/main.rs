use std::io::{self, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use words::Letters;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let opts = Opts::parse();

    let mut stdout = BufWriter::new(io::stdout().lock());
    for set in &opts.charsets {
        if set.chars().any(|c| !c.is_ascii_alphabetic()) {
            tracing::warn!(charset = %set, "characters outside a-z do not contribute to the mask");
        }
        write_mask(&mut stdout, set, opts.decimal).context("Failed to write to stdout")?;
    }
    stdout.flush().context("Failed to write to stdout")
}

/// One line per character set: `<set>: <binary> <decimal> [<letters>]`,
/// or only `<decimal>` when `decimal_only` is set.
fn write_mask<W: Write>(out: &mut W, set: &str, decimal_only: bool) -> io::Result<()> {
    let mask = words::bitmask(set);
    if decimal_only {
        return writeln!(out, "{}", mask);
    }
    writeln!(out, "{}: {:0>26b} {} [{}]", set, mask, mask, Letters::from(mask))
}

/// CLI to compute bitmasks for words (or sets of characters).
/// The decimal value can be handed back to `get-letters`.
#[derive(Parser)]
#[command(version)]
struct Opts {
    /// Print only the decimal mask of each set, one per line.
    #[arg(short, long)]
    decimal: bool,

    #[arg(required = true)]
    charsets: Vec<String>,
}
