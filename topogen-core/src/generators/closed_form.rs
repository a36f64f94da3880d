//! Closed-form generators: uniform random, wheel, cycle, complete and star.

use rand::Rng;
use tracing::{debug, instrument};

use crate::{error::Result, matrix::AdjacencyMatrix};

use super::{require_nodes, validate_random};

/// Generates an Erdos-Renyi graph.
///
/// Each of the `n(n-1)/2` unordered pairs is connected independently with
/// probability `edge_probability`.
///
/// # Errors
/// Returns [`crate::GraphError::ZeroNodes`] or [`crate::GraphError::TooFewNodes`]
/// when `num_nodes < 2`, and [`crate::GraphError::InvalidProbability`] when
/// `edge_probability` is not a finite value in `[0, 1]`.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use topogen_core::generate_random_graph;
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let graph = generate_random_graph(6, 1.0, &mut rng)?;
/// assert_eq!(graph.edge_count(), 15);
/// # Ok::<(), topogen_core::GraphError>(())
/// ```
#[instrument(name = "generate.random", level = "debug", err, skip(rng))]
pub fn generate_random_graph<R: Rng + ?Sized>(
    num_nodes: usize,
    edge_probability: f64,
    rng: &mut R,
) -> Result<AdjacencyMatrix> {
    validate_random(num_nodes, edge_probability)?;

    let mut matrix = AdjacencyMatrix::zeros(num_nodes);
    for a in 0..num_nodes {
        for b in (a + 1)..num_nodes {
            if rng.gen_bool(edge_probability) {
                matrix.connect(a, b);
            }
        }
    }

    debug!(edges = matrix.edge_count(), "random graph generated");
    Ok(matrix)
}

/// Generates the "wheel" topology: a path `0..n-1` closed back to node 0.
///
/// The result is a plain cycle with no hub node. A conventional wheel graph
/// would add a universal hub; this generator keeps the ring-only behaviour.
/// For a single node the closing edge would be a self-loop and is skipped.
///
/// # Errors
/// Returns [`crate::GraphError::ZeroNodes`] when `num_nodes == 0`.
#[instrument(name = "generate.wheel", level = "debug", err)]
pub fn generate_wheel_graph(num_nodes: usize) -> Result<AdjacencyMatrix> {
    require_nodes(num_nodes)?;

    let mut matrix = AdjacencyMatrix::zeros(num_nodes);
    let last = num_nodes - 1;
    for node in 0..last {
        matrix.connect(node, node + 1);
    }
    if last > 0 {
        matrix.connect(last, 0);
    }

    debug!(edges = matrix.edge_count(), "wheel graph generated");
    Ok(matrix)
}

/// Generates a ring where node `i` connects to `(i + 1) mod n`.
///
/// # Errors
/// Returns [`crate::GraphError::ZeroNodes`] when `num_nodes == 0`.
///
/// # Examples
/// ```
/// use topogen_core::generate_cycle_graph;
///
/// let ring = generate_cycle_graph(4)?;
/// assert_eq!(ring.edges().collect::<Vec<_>>(), vec![(0, 1), (0, 3), (1, 2), (2, 3)]);
/// # Ok::<(), topogen_core::GraphError>(())
/// ```
#[instrument(name = "generate.cycle", level = "debug", err)]
pub fn generate_cycle_graph(num_nodes: usize) -> Result<AdjacencyMatrix> {
    require_nodes(num_nodes)?;

    let mut matrix = AdjacencyMatrix::zeros(num_nodes);
    for node in 0..num_nodes {
        let next = (node + 1) % num_nodes;
        if next != node {
            matrix.connect(node, next);
        }
    }

    debug!(edges = matrix.edge_count(), "cycle graph generated");
    Ok(matrix)
}

/// Generates the complete graph on `num_nodes` nodes.
///
/// # Errors
/// Returns [`crate::GraphError::ZeroNodes`] when `num_nodes == 0`.
#[instrument(name = "generate.complete", level = "debug", err)]
pub fn generate_complete_graph(num_nodes: usize) -> Result<AdjacencyMatrix> {
    require_nodes(num_nodes)?;

    let mut matrix = AdjacencyMatrix::zeros(num_nodes);
    for a in 0..num_nodes {
        for b in (a + 1)..num_nodes {
            matrix.connect(a, b);
        }
    }

    debug!(edges = matrix.edge_count(), "complete graph generated");
    Ok(matrix)
}

/// Generates a star with node 0 at the centre.
///
/// # Errors
/// Returns [`crate::GraphError::ZeroNodes`] when `num_nodes == 0`.
#[instrument(name = "generate.star", level = "debug", err)]
pub fn generate_star_graph(num_nodes: usize) -> Result<AdjacencyMatrix> {
    require_nodes(num_nodes)?;

    let mut matrix = AdjacencyMatrix::zeros(num_nodes);
    for leaf in 1..num_nodes {
        matrix.connect(0, leaf);
    }

    debug!(edges = matrix.edge_count(), "star graph generated");
    Ok(matrix)
}
