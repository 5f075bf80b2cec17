use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pullchain::prelude::*;
use pullchain::sources::{channel, decode, from_std, utf8_decoder};
use pullchain::{DecodeConfig, QueueConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pullchain", about = "Drive lazy pull pipelines over text files")]
struct Cli {
    /// Log pipeline events at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the distinct lines of a file.
    Uniq {
        /// Input file.
        file: PathBuf,
        /// Walk from the last line backwards.
        #[arg(long)]
        reverse: bool,
        /// Treat lines of equal length as duplicates.
        #[arg(long)]
        by_length: bool,
    },
    /// Print lines in fixed-size batches.
    Chunks {
        /// Input file.
        file: PathBuf,
        /// Lines per batch.
        #[arg(long, default_value_t = 4)]
        size: usize,
    },
    /// Count the decoded units of a file.
    Units {
        /// Input file.
        file: PathBuf,
        /// Count raw bytes instead of code points.
        #[arg(long)]
        bytes: bool,
        /// Replace malformed UTF-8 with U+FFFD instead of failing.
        #[arg(long)]
        replace: bool,
    },
    /// Feed lines through a push queue from a producer thread.
    Pump {
        /// Input file.
        file: PathBuf,
        /// Queue capacity; 0 for a rendezvous queue, unbounded when omitted.
        #[arg(long)]
        capacity: Option<usize>,
        /// Print every K-th line.
        #[arg(long, default_value_t = 1)]
        every: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Uniq {
            file,
            reverse,
            by_length,
        } => run_uniq(&file, reverse, by_length)?,
        Commands::Chunks { file, size } => run_chunks(&file, size)?,
        Commands::Units {
            file,
            bytes,
            replace,
        } => run_units(&file, bytes, replace)?,
        Commands::Pump {
            file,
            capacity,
            every,
        } => run_pump(&file, capacity, every)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn print_lines<'a>(lines: impl Pull<Item = &'a str>) {
    lines.for_each(|line| println!("{line}"));
}

fn run_uniq(path: &Path, reverse: bool, by_length: bool) -> Result<()> {
    let text = read_text(path)?;
    let lines = from_std(text.lines());

    match (reverse, by_length) {
        (false, false) => print_lines(lines.unique()),
        (false, true) => print_lines(lines.unique_by(|line| line.len())),
        (true, false) => print_lines(lines.de_unique().rev()),
        (true, true) => print_lines(lines.de_unique_by(|line| line.len()).rev()),
    }

    Ok(())
}

fn run_chunks(path: &Path, size: usize) -> Result<()> {
    anyhow::ensure!(size > 0, "--size must be > 0");
    let text = read_text(path)?;
    let mut lines = from_std(text.lines());

    let mut batch = 0usize;
    loop {
        batch += 1;
        match lines.next_chunk(size) {
            Ok(chunk) => println!("batch {batch}\t{}", chunk.join(" | ")),
            Err(partial) => {
                if !partial.items().is_empty() {
                    println!(
                        "batch {batch}\t{}\t(partial, {} missing)",
                        partial.items().join(" | "),
                        partial.missing()
                    );
                }
                break;
            }
        }
    }

    Ok(())
}

fn run_units(path: &Path, bytes: bool, replace: bool) -> Result<()> {
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    if bytes {
        let count = decode::<u8>(&raw)?.count();
        println!("bytes: {count}");
        return Ok(());
    }

    let config = if replace {
        DecodeConfig::lossy()
    } else {
        DecodeConfig::strict()
    };
    let mut decoder = utf8_decoder(raw, config);
    let count = decoder
        .try_fold(0usize, |n, unit| unit.map(|_| n + 1))
        .with_context(|| format!("{} is not valid UTF-8", path.display()))?;

    println!("code points: {count}");
    if decoder.replaced() > 0 {
        println!("replaced: {}", decoder.replaced());
    }

    Ok(())
}

fn run_pump(path: &Path, capacity: Option<usize>, every: usize) -> Result<()> {
    let text = read_text(path)?;
    let config = match capacity {
        None => QueueConfig::unbounded(),
        Some(0) => QueueConfig::rendezvous(),
        Some(n) => QueueConfig::bounded(n),
    };
    let (tx, rx) = channel::<String>(config).context("invalid queue settings")?;

    let producer = thread::spawn(move || {
        for line in text.lines() {
            if tx.send(line.to_owned()).is_err() {
                break;
            }
        }
    });

    let mut shown = 0usize;
    rx.try_step_by(every)
        .context("invalid --every")?
        .for_each(|line| {
            shown += 1;
            println!("{line}");
        });

    producer
        .join()
        .map_err(|_| anyhow::anyhow!("producer thread panicked"))?;
    tracing::debug!(shown, "pump finished");

    Ok(())
}
