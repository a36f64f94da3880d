//! Graph generators.
//!
//! Each generator validates its arguments before allocating, then returns a
//! fresh [`crate::AdjacencyMatrix`]. Randomised generators take their source
//! of randomness explicitly.

mod closed_form;
mod preferential;

#[cfg(test)]
mod property;

pub use closed_form::{
    generate_complete_graph, generate_cycle_graph, generate_random_graph, generate_star_graph,
    generate_wheel_graph,
};
pub use preferential::generate_barabasi_albert_graph;

use crate::error::{GraphError, Result};

/// Smallest node count the uniform random generator accepts.
pub(crate) const RANDOM_GRAPH_MIN_NODES: usize = 2;

pub(crate) const fn require_nodes(num_nodes: usize) -> Result<()> {
    if num_nodes == 0 {
        return Err(GraphError::ZeroNodes);
    }
    Ok(())
}

pub(crate) fn validate_random(num_nodes: usize, edge_probability: f64) -> Result<()> {
    require_nodes(num_nodes)?;
    if num_nodes < RANDOM_GRAPH_MIN_NODES {
        return Err(GraphError::TooFewNodes {
            minimum: RANDOM_GRAPH_MIN_NODES,
            got: num_nodes,
        });
    }
    // NaN fails the range check as well.
    if !(0.0..=1.0).contains(&edge_probability) {
        return Err(GraphError::InvalidProbability {
            got: edge_probability,
        });
    }
    Ok(())
}

pub(crate) const fn validate_attachment(num_nodes: usize, num_edges_to_attach: usize) -> Result<()> {
    if num_nodes == 0 {
        return Err(GraphError::ZeroNodes);
    }
    if num_edges_to_attach > num_nodes {
        return Err(GraphError::AttachCountExceedsNodes {
            num_edges_to_attach,
            num_nodes,
        });
    }
    Ok(())
}
