use std::{
    fs::File,
    io::{BufWriter, Write as _},
};

use anyhow::Context;
use clap::{Parser, error::ErrorKind};
use tracing_subscriber::EnvFilter;
use words_list::{ArrayDeclaration, DEFAULT_ARRAY_NAME, WordsList};

const USAGE: &str = "Usage: txt-to-rust input.txt output.rs [ARRAY_NAME]";

fn main() -> anyhow::Result<()> {
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
            std::process::exit(1);
        }
    };

    // Input is fully read before the output is created.
    let words = WordsList::from_path(&opts.input)
        .with_context(|| anyhow::anyhow!("Failed to read word file {}", opts.input.display()))?;
    tracing::debug!(input = %opts.input.display(), words = words.len(), "read word list");

    let source_name = opts
        .input
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    let file = File::create(&opts.output).with_context(|| {
        anyhow::anyhow!("Failed to create output file {}", opts.output.display())
    })?;
    let mut writer = BufWriter::new(file);
    ArrayDeclaration::new(&source_name, &opts.array_name, &words)
        .write_to(&mut writer)
        .and_then(|_| writer.flush())
        .with_context(|| anyhow::anyhow!("Failed to write output file {}", opts.output.display()))?;

    tracing::debug!(
        output = %opts.output.display(),
        array = %opts.array_name,
        "wrote array declaration"
    );
    Ok(())
}

/// Script to turn a newline-delimited word file into a Rust source file holding
/// a `pub const` array of the words plus a `LENGTH` constant.
///
/// Blank lines and lines starting with `#` are skipped; every other line is
/// trimmed and emitted as an escaped string literal, in file order.
#[derive(Debug, clap::Parser)]
#[command(version)]
struct Opts {
    /// Filepath of the newline-delimited word list.
    #[arg(allow_hyphen_values = true)]
    input: std::path::PathBuf,

    /// Filepath of the generated Rust source. Overwritten if it exists.
    #[arg(allow_hyphen_values = true)]
    output: std::path::PathBuf,

    /// Name of the generated array constant.
    #[arg(default_value = DEFAULT_ARRAY_NAME, allow_hyphen_values = true)]
    array_name: String,
}
