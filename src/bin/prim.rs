use std::io;

use anyhow::{ensure, Context};
use clap::Parser;
use heap_paths::{
    graphs::{read_graph, EdgeDirection, Graph, Vertex},
    search::prim::prim,
    utility::init_tracing,
};

/// Reads an undirected graph from stdin and prints the total weight of its
/// minimum spanning tree.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Vertex the tree is grown from
    #[arg(short, long, default_value_t = 0)]
    root: Vertex,

    /// Print the tree edges and total weight as JSON
    #[arg(short, long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let graph = read_graph(io::stdin().lock(), EdgeDirection::Undirected)
        .context("unable to read graph from stdin")?;
    ensure!(
        args.root < graph.number_of_vertices(),
        "root {} out of range, total vertices: {}",
        args.root,
        graph.number_of_vertices()
    );

    let tree = prim(&graph, args.root)?;

    if args.json {
        println!("{}", serde_json::to_string(&tree)?);
    } else {
        println!("{}", tree.total_weight);
    }

    Ok(())
}
