use std::io;

use anyhow::{ensure, Context};
use clap::Parser;
use heap_paths::{
    sorting::quicksort::{quicksort, quicksort_seeded},
    utility::{init_tracing, read_numbers},
};
use rand::thread_rng;
use tracing::info;

/// Reads a count followed by that many integers from stdin, sorts them and
/// prints the sorted values from position `start` up to, but excluding,
/// position `end` (both 1-based).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First position to print
    start: Option<usize>,

    /// Position after the last one to print
    end: Option<usize>,

    /// Seed for the pivot selection
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut values: Vec<i64> =
        read_numbers(io::stdin().lock()).context("unable to read values from stdin")?;

    let start = args.start.unwrap_or(1).saturating_sub(1);
    let end = args.end.map(|end| end.saturating_sub(1)).unwrap_or(values.len());
    ensure!(
        start <= end && end <= values.len(),
        "invalid range to print, {} values were read",
        values.len()
    );

    match args.seed {
        Some(seed) => quicksort_seeded(&mut values, seed),
        None => quicksort(&mut values, &mut thread_rng()),
    }
    info!(number_of_values = values.len(), "sorted");

    for value in &values[start..end] {
        println!("{}", value);
    }

    Ok(())
}
