use connected_graph::prelude::*;
use log::info;

type AppResult = Result<(), Box<dyn std::error::Error>>;

fn main() -> AppResult {
    // First, we want to prepare some logging, so that we can see
    // the output of what's going on.
    env_logger::init();

    // We generate a connected graph with 1000 nodes and 5000 edges.
    // Passing a seed makes the result reproducible, every run of
    // this demo creates the same graph.
    let config = GeneratorConfig::default().with_seed(42);
    let g: WeightedGraph<u32, u32> =
        time(|| random_connected_graph(1_000, 5_000, Distances::Uniform, config))?;

    // Each edge got a random distance between 1 and 100.
    let total: u64 = g.distances().iter().map(|&d| u64::from(d)).sum();
    info!("mean distance = {}", total as f64 / g.edge_count() as f64);

    // Running connected components confirms that there is exactly one.
    let components = time(|| wcc(&g));
    info!("component count = {}", components.set_count());

    // A breadth-first search from node 0 reaches every node.
    let order: Vec<u32> = time(|| bfs_undirected(&g, [0]).collect());
    info!("bfs visited {} nodes", order.len());

    // A path of consecutive neighbors can be mapped to edge ids, which
    // in turn index into the distances.
    let b = g.neighbors(0).copied().max().unwrap_or(0);
    let c = g.neighbors(b).copied().find(|&n| n != 0).unwrap_or(b);
    let path = [0, b, c];
    if let Some(edge_ids) = g.path_edges(&path) {
        let length: u32 = edge_ids.iter().map(|&e| g.distances()[e]).sum();
        info!("path {path:?} uses edges {edge_ids:?} with length {length}");
    }

    // The rejection strategy samples uniformly among all graphs with the
    // given number of edges, but may need several attempts for sparse graphs.
    let config = config.with_strategy(Strategy::Rejection);
    let g: WeightedGraph<u32, f32> =
        time(|| random_connected_graph(100, 400, Distances::Uniform, config))?;
    info!("connected = {}", is_connected(&g));

    Ok(())
}

fn time<T, F: FnOnce() -> T>(f: F) -> T {
    let start = std::time::Instant::now();
    let res = f();
    info!("Execution took {:?}", start.elapsed());
    res
}
