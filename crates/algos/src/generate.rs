use std::{fs::File, path::Path, time::Instant};

use log::{debug, info};
use rand::{rngs::StdRng, seq::index, seq::SliceRandom, Rng, SeedableRng};

use crate::prelude::*;

/// Smallest distance drawn by [`Distances::Uniform`].
pub const MIN_DISTANCE: u8 = 1;
/// Largest distance drawn by [`Distances::Uniform`].
pub const MAX_DISTANCE: u8 = 100;

pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// How the edges of a connected graph are sampled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Strategy {
    /// Builds a random spanning tree first and adds the remaining edges
    /// uniformly from all node pairs not in the tree.
    #[default]
    SpanningTree,
    /// Samples `edge_count` node pairs uniformly and starts over until the
    /// sample is connected, at most `max_attempts` times.
    Rejection,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct GeneratorConfig {
    /// Seed for the random number generator. Without a seed, the generator
    /// is seeded from the operating system.
    #[cfg_attr(feature = "clap", clap(long))]
    pub seed: Option<u64>,

    /// Defines how edges are sampled.
    #[cfg_attr(
        feature = "clap",
        clap(long, value_enum, default_value_t = Strategy::SpanningTree)
    )]
    pub strategy: Strategy,

    /// Number of samples the rejection strategy draws before giving up.
    #[cfg_attr(feature = "clap", clap(long, default_value_t = DEFAULT_MAX_ATTEMPTS))]
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            strategy: Strategy::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    pub fn new(seed: Option<u64>, strategy: Strategy, max_attempts: usize) -> Self {
        Self {
            seed,
            strategy,
            max_attempts,
        }
    }

    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    #[must_use]
    pub fn with_strategy(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }

    #[must_use]
    pub fn with_max_attempts(self, max_attempts: usize) -> Self {
        Self {
            max_attempts,
            ..self
        }
    }
}

/// The distances to put on the generated edges.
#[derive(Clone, Debug, PartialEq)]
pub enum Distances<EV> {
    /// One positive distance per edge. The distance at position `i` belongs
    /// to the `i`-th generated edge.
    Given(Vec<EV>),
    /// Every edge gets an independent, uniformly drawn integer distance in
    /// `[MIN_DISTANCE, MAX_DISTANCE]`.
    Uniform,
}

impl<EV> Default for Distances<EV> {
    fn default() -> Self {
        Distances::Uniform
    }
}

impl<EV> From<Vec<EV>> for Distances<EV> {
    fn from(distances: Vec<EV>) -> Self {
        Distances::Given(distances)
    }
}

/// Creates a random connected, undirected, simple graph with `node_count`
/// nodes and `edge_count` edges.
///
/// Edges are enumerated in canonical pair order, i.e., `(u, v)` with `u < v`
/// sorted by `v` first and `u` second: `(0, 1), (0, 2), (1, 2), (0, 3), ...`.
/// Distances are assigned to the edges in that order.
///
/// # Errors
///
/// Fails with [`Error::InvalidArgument`] before sampling anything if
///
/// * `node_count` is zero,
/// * `edge_count` is less than `node_count - 1`,
/// * `edge_count` exceeds `node_count * (node_count - 1) / 2`,
/// * given distances do not match `edge_count` or are not positive,
/// * the rejection strategy is configured with zero attempts.
///
/// The rejection strategy fails with [`Error::AttemptsExhausted`] if none
/// of its samples is connected.
///
/// # Example
///
/// ```
/// use connected_graph::prelude::*;
///
/// let config = GeneratorConfig::default().with_seed(7);
/// let graph: WeightedGraph<usize, f64> = random_connected_graph(
///     4,
///     3,
///     Distances::Given(vec![1.5, 2.5, 3.5]),
///     config,
/// )
/// .unwrap();
///
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.distances(), &[1.5, 2.5, 3.5]);
/// assert!(is_connected(&graph));
/// ```
pub fn random_connected_graph<NI, EV>(
    node_count: usize,
    edge_count: usize,
    distances: Distances<EV>,
    config: GeneratorConfig,
) -> Result<WeightedGraph<NI, EV>, Error>
where
    NI: Idx,
    EV: Distance,
{
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    random_connected_graph_with_rng(node_count, edge_count, distances, config, &mut rng)
}

/// Same as [`random_connected_graph`], but draws from the given random
/// number generator. The seed of the config is ignored.
pub fn random_connected_graph_with_rng<NI, EV, R>(
    node_count: usize,
    edge_count: usize,
    distances: Distances<EV>,
    config: GeneratorConfig,
    rng: &mut R,
) -> Result<WeightedGraph<NI, EV>, Error>
where
    NI: Idx,
    EV: Distance,
    R: Rng + ?Sized,
{
    let start = Instant::now();

    let pair_count = validate(node_count, edge_count, &distances, &config)?;
    NI::try_new(node_count).map_err(connected_graph_builder::Error::from)?;

    let pairs = match config.strategy {
        Strategy::SpanningTree => spanning_tree_pairs(node_count, edge_count, pair_count, rng),
        Strategy::Rejection => {
            rejection_pairs(node_count, edge_count, pair_count, config.max_attempts, rng)?
        }
    };

    let distances = match distances {
        Distances::Given(distances) => distances,
        Distances::Uniform => (0..edge_count)
            .map(|_| EV::from(rng.gen_range(MIN_DISTANCE..=MAX_DISTANCE)))
            .collect(),
    };

    let edges = pairs
        .into_iter()
        .map(pair_from_index)
        .zip(distances)
        .map(|((u, v), d)| (NI::new(u), NI::new(v), d));

    let graph = GraphBuilder::new()
        .edges_with_values(edges)
        .node_count(NI::new(node_count))
        .build()?;

    info!(
        "Generated connected graph (node_count = {}, edge_count = {}, strategy = {:?}) in {:?}",
        node_count,
        edge_count,
        config.strategy,
        start.elapsed()
    );

    Ok(graph)
}

/// Generates a random connected graph and, if a path is given, writes it to
/// that path in the weighted edge list format. Missing parent directories
/// are created.
pub fn gen_and_store<NI, EV>(
    node_count: usize,
    edge_count: usize,
    distances: Distances<EV>,
    config: GeneratorConfig,
    path: Option<&Path>,
) -> Result<WeightedGraph<NI, EV>, Error>
where
    NI: Idx,
    EV: Distance,
{
    let graph = random_connected_graph(node_count, edge_count, distances, config)?;

    if let Some(path) = path {
        let start = Instant::now();
        store(&graph, path)?;
        info!("Stored graph at {:?} in {:?}", path, start.elapsed());
    }

    Ok(graph)
}

fn store<NI, EV>(
    graph: &WeightedGraph<NI, EV>,
    path: &Path,
) -> Result<(), connected_graph_builder::Error>
where
    NI: Idx,
    EV: Distance,
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;

    graph.serialize(file)
}

/// Checks the request and returns the number of node pairs.
fn validate<EV: Distance>(
    node_count: usize,
    edge_count: usize,
    distances: &Distances<EV>,
    config: &GeneratorConfig,
) -> Result<usize, InvalidArgument> {
    if node_count == 0 {
        return Err(InvalidArgument::NoNodes);
    }

    let minimum = node_count - 1;
    if edge_count < minimum {
        return Err(InvalidArgument::TooFewEdges {
            node_count,
            edge_count,
            minimum,
        });
    }

    let maximum = pair_count(node_count).ok_or(InvalidArgument::TooManyNodes { node_count })?;
    if edge_count > maximum {
        return Err(InvalidArgument::TooManyEdges {
            node_count,
            edge_count,
            maximum,
        });
    }

    if let Distances::Given(distances) = distances {
        if distances.len() != edge_count {
            return Err(InvalidArgument::DistanceCountMismatch {
                expected: edge_count,
                actual: distances.len(),
            });
        }
        if let Some(position) = distances.iter().position(|d| !d.is_positive()) {
            return Err(InvalidArgument::NonPositiveDistance { position });
        }
    }

    if config.strategy == Strategy::Rejection && config.max_attempts == 0 {
        return Err(InvalidArgument::ZeroAttempts);
    }

    Ok(maximum)
}

/// Number of unordered pairs of distinct nodes, `None` on overflow.
pub fn pair_count(node_count: usize) -> Option<usize> {
    if node_count % 2 == 0 {
        (node_count / 2).checked_mul(node_count.saturating_sub(1))
    } else {
        node_count.checked_mul((node_count - 1) / 2)
    }
}

#[inline]
fn triangle(v: usize) -> usize {
    v * v.saturating_sub(1) / 2
}

/// Position of the pair `(u, v)`, `u < v`, in canonical pair order.
#[inline]
pub fn pair_index(u: usize, v: usize) -> usize {
    debug_assert!(u < v);
    triangle(v) + u
}

/// The pair `(u, v)`, `u < v`, at position `index` in canonical pair order.
pub fn pair_from_index(index: usize) -> (usize, usize) {
    let mut v = (((index as f64) * 8.0 + 1.0).sqrt() as usize + 1) / 2;
    // correct rounding errors of the estimate
    while v > 1 && triangle(v) > index {
        v -= 1;
    }
    while triangle(v + 1) <= index {
        v += 1;
    }
    (index - triangle(v), v)
}

/// Pair indices of a random spanning tree plus `edge_count - node_count + 1`
/// uniformly chosen non-tree pairs, sorted.
fn spanning_tree_pairs<R: Rng + ?Sized>(
    node_count: usize,
    edge_count: usize,
    pair_count: usize,
    rng: &mut R,
) -> Vec<usize> {
    let mut nodes = (0..node_count).collect::<Vec<_>>();
    nodes.shuffle(rng);

    let mut pairs = Vec::with_capacity(edge_count);
    for i in 1..node_count {
        let u = nodes[i];
        let v = nodes[rng.gen_range(0..i)];
        pairs.push(pair_index(usize::min(u, v), usize::max(u, v)));
    }
    pairs.sort_unstable();

    let tree_size = pairs.len();
    let mut extra = index::sample(rng, pair_count - tree_size, edge_count - tree_size).into_vec();
    extra.sort_unstable();

    // Map the k-th free pair to its index among all pairs by skipping
    // over the tree pairs.
    let mut skipped = 0;
    for k in extra {
        let mut index = k + skipped;
        while skipped < tree_size && pairs[skipped] <= index {
            skipped += 1;
            index += 1;
        }
        pairs.push(index);
    }

    pairs.sort_unstable();

    debug!(
        "Sampled spanning tree with {} edges and {} additional edges",
        tree_size,
        pairs.len() - tree_size
    );

    pairs
}

/// Pair indices of a uniformly sampled connected graph, sorted.
fn rejection_pairs<R: Rng + ?Sized>(
    node_count: usize,
    edge_count: usize,
    pair_count: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<usize>, Error> {
    for attempt in 1..=max_attempts {
        let mut pairs = index::sample(rng, pair_count, edge_count).into_vec();
        pairs.sort_unstable();

        let edges = pairs
            .iter()
            .map(|&index| pair_from_index(index))
            .collect::<Vec<_>>();

        if spans_all_nodes(node_count, &edges) {
            debug!("Found connected sample in attempt {}", attempt);
            return Ok(pairs);
        }

        debug!("Sample {} is not connected", attempt);
    }

    Err(Error::AttemptsExhausted {
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tap::prelude::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn canonical_pair_order() {
        let pairs = (0..10).map(pair_from_index).collect::<Vec<_>>();

        assert_eq!(
            pairs,
            vec![
                (0, 1),
                (0, 2),
                (1, 2),
                (0, 3),
                (1, 3),
                (2, 3),
                (0, 4),
                (1, 4),
                (2, 4),
                (3, 4)
            ]
        );
        assert_eq!(pair_index(3, 4), 9);
        assert_eq!(pair_index(0, 5), 10);
    }

    #[test]
    fn pair_from_large_index() {
        let v = 3_000_000_000_usize;
        let u = 2_999_999_999_usize;

        assert_eq!(pair_from_index(pair_index(u, v)), (u, v));
        assert_eq!(pair_from_index(pair_index(0, v)), (0, v));
    }

    #[test]
    fn pair_count_of_small_graphs() {
        assert_eq!(pair_count(1), Some(0));
        assert_eq!(pair_count(2), Some(1));
        assert_eq!(pair_count(5), Some(10));
        assert_eq!(pair_count(6), Some(15));
        assert_eq!(pair_count(usize::MAX), None);
    }

    #[test]
    fn spanning_tree_only() {
        let pairs = spanning_tree_pairs(6, 5, 15, &mut rng());
        let edges = pairs
            .iter()
            .map(|&i| pair_from_index(i))
            .collect::<Vec<_>>();

        assert_eq!(pairs.len(), 5);
        assert!(spans_all_nodes(6, &edges));
    }

    #[test]
    fn spanning_tree_with_all_pairs() {
        let pairs = spanning_tree_pairs(6, 15, 15, &mut rng());

        assert_eq!(pairs, (0..15).collect::<Vec<_>>());
    }

    #[test]
    fn spanning_tree_pairs_are_distinct() {
        let mut rng = rng();
        for edge_count in 7..=28 {
            let pairs = spanning_tree_pairs(8, edge_count, 28, &mut rng);
            let distinct = pairs.clone().tap_mut(|p| p.dedup());

            assert_eq!(pairs.len(), edge_count);
            assert_eq!(distinct, pairs);
            assert!(pairs.iter().all(|&p| p < 28));
        }
    }

    #[test]
    fn rejection_finds_connected_sample() {
        let pairs = rejection_pairs(5, 9, 10, 100, &mut rng()).unwrap();
        let edges = pairs
            .iter()
            .map(|&i| pair_from_index(i))
            .collect::<Vec<_>>();

        assert_eq!(pairs.len(), 9);
        assert!(spans_all_nodes(5, &edges));
    }

    #[test]
    fn rejection_gives_up() {
        // a spanning tree of 40 nodes is practically never drawn uniformly
        let res = rejection_pairs(40, 39, 780, 3, &mut rng());

        assert!(matches!(res, Err(Error::AttemptsExhausted { attempts: 3 })));
    }

    #[test]
    fn validate_counts() {
        let config = GeneratorConfig::default();
        let uniform = Distances::<u32>::Uniform;

        assert_eq!(validate(1, 0, &uniform, &config), Ok(0));
        assert_eq!(validate(5, 10, &uniform, &config), Ok(10));
        assert_eq!(validate(0, 0, &uniform, &config), Err(InvalidArgument::NoNodes));
        assert_eq!(
            validate(4, 2, &uniform, &config),
            Err(InvalidArgument::TooFewEdges {
                node_count: 4,
                edge_count: 2,
                minimum: 3
            })
        );
        assert_eq!(
            validate(5, 11, &uniform, &config),
            Err(InvalidArgument::TooManyEdges {
                node_count: 5,
                edge_count: 11,
                maximum: 10
            })
        );
    }

    #[test]
    fn validate_distances() {
        let config = GeneratorConfig::default();

        assert_eq!(
            validate(3, 2, &Distances::Given(vec![1, 2, 3]), &config),
            Err(InvalidArgument::DistanceCountMismatch {
                expected: 2,
                actual: 3
            })
        );
        assert_eq!(
            validate(3, 2, &Distances::Given(vec![1, 0]), &config),
            Err(InvalidArgument::NonPositiveDistance { position: 1 })
        );
        assert_eq!(
            validate(3, 2, &Distances::Given(vec![f32::NAN, 1.0]), &config),
            Err(InvalidArgument::NonPositiveDistance { position: 0 })
        );
        assert_eq!(
            validate(3, 2, &Distances::Given(vec![-1, 1]), &config),
            Err(InvalidArgument::NonPositiveDistance { position: 0 })
        );
    }

    #[test]
    fn validate_attempts() {
        let uniform = Distances::<u32>::Uniform;
        let config = GeneratorConfig::default().with_max_attempts(0);

        assert_eq!(validate(3, 2, &uniform, &config), Ok(3));
        assert_eq!(
            validate(3, 2, &uniform, &config.with_strategy(Strategy::Rejection)),
            Err(InvalidArgument::ZeroAttempts)
        );
    }

    #[test]
    fn index_type_too_small() {
        let res = random_connected_graph::<u32, u32>(
            u32::MAX as usize + 2,
            u32::MAX as usize + 1,
            Distances::Uniform,
            GeneratorConfig::default(),
        );

        assert!(matches!(
            res,
            Err(Error::Builder(connected_graph_builder::Error::IdxError { .. }))
        ));
    }

    #[test]
    fn store_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graphs").join("tree.wel");

        let graph = gen_and_store::<u32, u32>(
            3,
            2,
            Distances::Given(vec![4, 2]),
            GeneratorConfig::default().with_seed(1),
            Some(path.as_path()),
        )
        .unwrap();

        let stored = std::fs::read_to_string(&path).unwrap();
        let (s0, t0) = graph.edges()[0];
        let (s1, t1) = graph.edges()[1];

        assert_eq!(stored, format!("3 2\n{s0} {t0} 4\n{s1} {t1} 2\n"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_from_json() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"seed":42,"strategy":"rejection","max_attempts":10}"#)
                .unwrap();

        assert_eq!(
            config,
            GeneratorConfig::new(Some(42), Strategy::Rejection, 10)
        );
    }
}
