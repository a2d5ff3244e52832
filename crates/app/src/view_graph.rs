use connected_graph::prelude::*;

use clap::Parser;
use log::info;

use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

mod common;

use common::{CommonArgs, Result};

/// Loads the graph stored in `<graph_dir>/<stem>.wel` and prints its weighted
/// edge list, one `source target distance` line per edge.
#[derive(Debug, clap::Parser)]
#[clap(author, version, about)]
struct Args {
    /// Name of the stored graph, without directory and extension.
    stem: String,

    #[clap(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    common::init_logging();
    let args = Args::parse();

    let path = args.common.graph_path(&args.stem);

    info!(
        "Reading graph ({} bit) from: {:?}",
        if args.common.use_32_bit { "32" } else { "64" },
        path
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.common.use_32_bit {
        run::<u32, _>(&path, &mut out)?;
    } else {
        run::<usize, _>(&path, &mut out)?;
    }

    out.flush()?;

    Ok(())
}

fn run<NI: Idx, W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let start = Instant::now();
    let graph: WeightedGraph<NI, f64> = GraphBuilder::new()
        .file_format(WeightedEdgeListInput::default())
        .path(path)
        .build()?;

    info!(
        "Graph loaded successfully (node_count = {:?}, edge_count = {:?}, connected = {}) in {:?}",
        graph.node_count(),
        graph.edge_count(),
        is_connected(&graph),
        start.elapsed()
    );

    for (source, target, distance) in graph.edges_with_distances() {
        writeln!(out, "{} {} {}", source, target, distance)?;
    }

    Ok(())
}
