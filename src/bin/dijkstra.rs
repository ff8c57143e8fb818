use std::io;

use anyhow::{ensure, Context};
use clap::Parser;
use heap_paths::{
    graphs::{read_graph, EdgeDirection, Graph, Vertex},
    search::{
        dijkstra::dijkstra_one_to_one,
        path::{ShortestPathRequest, ShortestPathTestCase},
    },
    utility::init_tracing,
};

/// Reads a directed graph from stdin and prints the shortest distance between
/// two vertices, or "not connected".
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Start vertex
    source: Vertex,

    /// End vertex
    target: Vertex,

    /// Print the request and its distance as JSON
    #[arg(short, long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let graph = read_graph(io::stdin().lock(), EdgeDirection::Directed)
        .context("unable to read graph from stdin")?;
    ensure!(
        args.source < graph.number_of_vertices() && args.target < graph.number_of_vertices(),
        "start or end vertex out of range, total vertices: {}",
        graph.number_of_vertices()
    );

    let distance = dijkstra_one_to_one(&graph, args.source, args.target);

    if args.json {
        let test_case = ShortestPathTestCase {
            request: ShortestPathRequest::new(args.source, args.target),
            distance,
        };
        println!("{}", serde_json::to_string(&test_case)?);
    } else {
        match distance {
            Some(distance) => println!("{}", distance),
            None => println!("not connected"),
        }
    }

    Ok(())
}
