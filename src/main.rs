use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seqview::matcher::{delimited, repeats};
use seqview::{remove_if, Cursor, RemoveWhen, Subrange, View};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "seqview", about = "Lazily elide bytes from a file or stdin")]
struct Cli {
    /// Log view decisions to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Remove every byte that appears in `--chars`.
    Remove {
        /// Bytes to remove.
        #[arg(long)]
        chars: String,
        /// Input file (default: stdin).
        input: Option<PathBuf>,
    },
    /// Strip delimited spans such as block comments.
    Strip {
        /// Opening delimiter.
        #[arg(long, default_value = "/*")]
        open: String,
        /// Closing delimiter.
        #[arg(long, default_value = "*/")]
        close: String,
        /// Input file (default: stdin).
        input: Option<PathBuf>,
    },
    /// Drop runs of identical bytes of at least `--min` length.
    DropRuns {
        /// Shortest run that gets dropped.
        #[arg(long, default_value_t = 2)]
        min: usize,
        /// Input file (default: stdin).
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Remove { chars, input } => {
            let bytes = read_input(input.as_deref())?;
            let set = chars.into_bytes();
            emit(&remove_if(Subrange::from_slice(&bytes), |b| set.contains(b)))?
        }
        Commands::Strip { open, close, input } => {
            if open.is_empty() {
                anyhow::bail!("opening delimiter must not be empty");
            }
            let bytes = read_input(input.as_deref())?;
            let matcher = delimited(open.as_bytes(), close.as_bytes());
            emit(&RemoveWhen::new(Subrange::from_slice(&bytes), matcher))?
        }
        Commands::DropRuns { min, input } => {
            let bytes = read_input(input.as_deref())?;
            emit(&RemoveWhen::new(Subrange::from_slice(&bytes), repeats(min)))?
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("failed to read stdin")?;
            Ok(bytes)
        }
    }
}

fn emit<'a, V>(view: &V) -> Result<()>
where
    V: View,
    V::Cursor: Cursor<Item = &'a u8>,
{
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut written = 0usize;
    for &byte in view.iter() {
        out.write_all(&[byte]).context("failed to write to stdout")?;
        written += 1;
    }
    out.flush().context("failed to flush stdout")?;
    tracing::info!(written, "emitted surviving bytes");
    Ok(())
}
