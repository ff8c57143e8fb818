use std::io;

use anyhow::Context;
use clap::Parser;
use heap_paths::{
    coding::huffman::{Frequency, HuffmanTree},
    utility::{init_tracing, read_numbers},
};

/// Reads a count followed by that many symbol frequencies from stdin and prints
/// the number of bits of the Huffman encoding.
///
/// Frequencies must be non-negative integers. A negative frequency is rejected
/// as malformed input instead of being skipped; zero frequencies are skipped.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print the code length of every symbol as JSON
    #[arg(short, long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let frequencies: Vec<Frequency> =
        read_numbers(io::stdin().lock()).context("unable to read frequencies from stdin")?;
    let tree = HuffmanTree::from_frequencies(&frequencies);
    let total_bits = tree.as_ref().map(|tree| tree.total_bits()).unwrap_or(0);

    if args.json {
        let code_lengths = tree.map(|tree| tree.code_lengths()).unwrap_or_default();
        let record = serde_json::json!({
            "total_bits": total_bits,
            "code_lengths": code_lengths,
        });
        println!("{}", record);
    } else {
        println!("{}", total_bits);
    }

    Ok(())
}
