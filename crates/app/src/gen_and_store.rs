use connected_graph::prelude::*;

use clap::Parser;
use log::info;

use std::path::Path;
use std::time::Instant;

mod common;

use common::{CommonArgs, Result};

/// Generates a random connected graph with a random distance in [1, 100] on
/// every edge and stores it in `<graph_dir>/<stem>.wel`.
#[derive(Debug, clap::Parser)]
#[clap(author, version, about)]
struct Args {
    /// Number of nodes.
    n_vertices: usize,

    /// Number of edges, at least `n_vertices - 1`.
    n_edges: usize,

    /// Name of the stored graph, without directory and extension.
    stem: String,

    #[clap(flatten)]
    common: CommonArgs,

    #[clap(flatten)]
    config: GeneratorConfig,
}

fn main() -> Result<()> {
    common::init_logging();
    let args = Args::parse();

    let path = args.common.graph_path(&args.stem);

    info!(
        "Generating graph ({} bit) with {} nodes and {} edges into: {:?}",
        if args.common.use_32_bit { "32" } else { "64" },
        args.n_vertices,
        args.n_edges,
        path
    );

    if args.common.use_32_bit {
        run::<u32>(args.n_vertices, args.n_edges, args.config, &path)
    } else {
        run::<usize>(args.n_vertices, args.n_edges, args.config, &path)
    }
}

fn run<NI: Idx>(
    node_count: usize,
    edge_count: usize,
    config: GeneratorConfig,
    path: &Path,
) -> Result<()> {
    let start = Instant::now();
    let graph: WeightedGraph<NI, u32> = gen_and_store(
        node_count,
        edge_count,
        Distances::Uniform,
        config,
        Some(path),
    )?;

    let min_degree = (0..node_count)
        .map(|node| graph.degree(NI::new(node)))
        .min()
        .unwrap_or_else(NI::zero);
    let max_degree = (0..node_count)
        .map(|node| graph.degree(NI::new(node)))
        .max()
        .unwrap_or_else(NI::zero);

    info!(
        "Stored graph (node_count = {:?}, edge_count = {:?}, min_degree = {:?}, max_degree = {:?}) in {:?}",
        graph.node_count(),
        graph.edge_count(),
        min_degree,
        max_degree,
        start.elapsed()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args() {
        let args = Args::try_parse_from([
            "gen_and_store",
            "10",
            "15",
            "small",
            "--seed",
            "42",
            "--strategy",
            "rejection",
            "--graph-dir",
            "out",
        ])
        .unwrap();

        assert_eq!(args.n_vertices, 10);
        assert_eq!(args.n_edges, 15);
        assert_eq!(
            args.config,
            GeneratorConfig::new(Some(42), Strategy::Rejection, DEFAULT_MAX_ATTEMPTS)
        );
        assert_eq!(
            args.common.graph_path(&args.stem),
            Path::new("out").join("small.wel")
        );
    }

    #[test]
    fn default_args() {
        let args = Args::try_parse_from(["gen_and_store", "4", "3", "tree"]).unwrap();

        assert_eq!(args.config, GeneratorConfig::default());
        assert!(!args.common.use_32_bit);
        assert_eq!(
            args.common.graph_path(&args.stem),
            Path::new("graphs").join("tree.wel")
        );
    }

    #[test]
    fn run_stores_graph() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.wel");

        run::<u32>(4, 3, GeneratorConfig::default().with_seed(3), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("4 3\n"));
        assert_eq!(content.lines().count(), 4);
    }

    #[test]
    fn run_rejects_impossible_edge_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("impossible.wel");

        assert!(run::<u32>(5, 11, GeneratorConfig::default(), &path).is_err());
        assert!(!path.exists());
    }
}
