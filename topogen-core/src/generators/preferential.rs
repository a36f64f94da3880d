//! Barabasi-Albert preferential attachment.
//!
//! Nodes are added one at a time. Each new node attaches to a fixed number of
//! distinct earlier nodes, chosen with probability proportional to their
//! current degree. Growth either starts from a single bootstrap edge between
//! nodes 0 and 1 or continues from a caller-supplied graph.

use tracing::{Span, debug, field, instrument};

use crate::{
    error::{GraphError, Result, SamplingError},
    matrix::AdjacencyMatrix,
    sampling::WeightedSampler,
};

use super::validate_attachment;

/// Matrix, running degrees, and first node still to be attached.
struct GrowthState {
    matrix: AdjacencyMatrix,
    degrees: Vec<usize>,
    next_node: usize,
}

impl GrowthState {
    /// Seeds growth from `existing`, or from the bootstrap edge `0-1` when no
    /// graph is supplied.
    ///
    /// Callers guarantee `existing` has at most `num_nodes` nodes.
    fn seed(num_nodes: usize, existing: Option<&AdjacencyMatrix>) -> Self {
        let mut matrix = AdjacencyMatrix::zeros(num_nodes);
        let mut degrees = vec![0; num_nodes];

        let next_node = match existing {
            Some(prefix) => {
                matrix.copy_prefix(prefix);
                for (degree, prefix_degree) in degrees.iter_mut().zip(prefix.degrees()) {
                    *degree = prefix_degree;
                }
                prefix.node_count()
            }
            // A single-node graph has no room for the bootstrap edge.
            None if num_nodes < 2 => num_nodes,
            None => {
                matrix.connect(0, 1);
                degrees[0] = 1;
                degrees[1] = 1;
                2
            }
        };

        Self {
            matrix,
            degrees,
            next_node,
        }
    }

    fn attach<S: WeightedSampler + ?Sized>(
        &mut self,
        node: usize,
        num_edges_to_attach: usize,
        sampler: &mut S,
    ) -> Result<()> {
        let candidates = &self.degrees[..node];
        let targets = sampler
            .sample_distinct(candidates, num_edges_to_attach)
            .map_err(|error| attachment_error(node, error))?;
        check_targets(node, num_edges_to_attach, &targets)?;

        for &target in &targets {
            self.matrix.connect(node, target);
            self.degrees[target] += 1;
        }
        self.degrees[node] += num_edges_to_attach;
        Ok(())
    }
}

/// Rejects sampler output that is not `requested` distinct nodes in `0..node`.
fn check_targets(node: usize, requested: usize, targets: &[usize]) -> Result<()> {
    let mut seen = vec![false; node];
    let distinct_earlier = targets.iter().all(|&target| {
        seen.get_mut(target)
            .is_some_and(|taken| !std::mem::replace(taken, true))
    });
    if targets.len() == requested && distinct_earlier {
        return Ok(());
    }
    Err(GraphError::InvalidSamplerOutput {
        node,
        requested,
        returned: targets.to_vec(),
    })
}

fn attachment_error(node: usize, error: SamplingError) -> GraphError {
    match error {
        SamplingError::ZeroTotalWeight => GraphError::ZeroDegreeMass { node },
        SamplingError::InsufficientCandidates {
            available,
            requested,
        } => GraphError::InsufficientCandidates {
            node,
            available,
            requested,
        },
    }
}

/// Grows a scale-free graph by preferential attachment.
///
/// Without `existing_graph`, nodes 0 and 1 are joined by a bootstrap edge and
/// growth starts at node 2. With `existing_graph`, its matrix is copied into
/// the top-left block, degrees are taken from its rows, and growth starts at
/// its node count; the bootstrap edge is not added. The caller's matrix is
/// never modified.
///
/// Every new node `k` attaches to `num_edges_to_attach` distinct nodes in
/// `0..k`, drawn by `sampler` with weights equal to their current degree.
///
/// # Errors
/// - [`GraphError::ZeroNodes`] when `num_nodes == 0`.
/// - [`GraphError::AttachCountExceedsNodes`] when
///   `num_edges_to_attach > num_nodes`.
/// - [`GraphError::ExistingGraphTooLarge`] when `existing_graph` has more
///   than `num_nodes` nodes.
/// - [`GraphError::ZeroDegreeMass`] when every candidate has degree zero at
///   some step, for example when extending an edgeless graph.
/// - [`GraphError::InsufficientCandidates`] when fewer candidates have
///   non-zero degree than edges are requested.
/// - [`GraphError::InvalidSamplerOutput`] when `sampler` returns the wrong
///   number of targets, repeats a target, or names a node that is not
///   earlier than the one being attached.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use topogen_core::{RngSampler, generate_barabasi_albert_graph};
///
/// let mut sampler = RngSampler::new(SmallRng::seed_from_u64(3));
/// let seed = generate_barabasi_albert_graph(4, 1, None, &mut sampler)?;
/// let grown = generate_barabasi_albert_graph(6, 1, Some(&seed), &mut sampler)?;
/// assert_eq!(grown.edge_count(), seed.edge_count() + 2);
/// # Ok::<(), topogen_core::GraphError>(())
/// ```
#[instrument(
    name = "generate.barabasi_albert",
    level = "debug",
    err,
    skip(existing_graph, sampler),
    fields(existing_size = field::Empty),
)]
pub fn generate_barabasi_albert_graph<S: WeightedSampler + ?Sized>(
    num_nodes: usize,
    num_edges_to_attach: usize,
    existing_graph: Option<&AdjacencyMatrix>,
    sampler: &mut S,
) -> Result<AdjacencyMatrix> {
    validate_attachment(num_nodes, num_edges_to_attach)?;
    if let Some(existing) = existing_graph {
        Span::current().record("existing_size", existing.node_count());
        if existing.node_count() > num_nodes {
            return Err(GraphError::ExistingGraphTooLarge {
                existing: existing.node_count(),
                num_nodes,
            });
        }
    }

    let mut state = GrowthState::seed(num_nodes, existing_graph);
    for node in state.next_node..num_nodes {
        state.attach(node, num_edges_to_attach, sampler)?;
    }

    debug!(
        edges = state.matrix.edge_count(),
        "preferential attachment graph generated"
    );
    Ok(state.matrix)
}
