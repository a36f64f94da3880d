//! Topogen core library.
//!
//! Generators for synthetic simple undirected graphs, returned as dense
//! [`AdjacencyMatrix`] values. The catalogue covers uniform random, wheel,
//! cycle, complete and star graphs, plus Barabasi-Albert preferential
//! attachment, which can also grow a previously generated graph.
//!
//! Randomised generators never touch a global RNG: pass an [`rand::Rng`] (or a
//! [`WeightedSampler`]) explicitly, or set a seed on a [`GraphRequest`].
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalogue;
mod error;
mod generators;
mod matrix;
mod memory;
mod sampling;

#[cfg(test)]
mod test_utils;

pub use crate::{
    catalogue::{
        DEFAULT_EDGE_PROBABILITY, DEFAULT_NUM_NODES, GraphKind, GraphRequest, Generator,
    },
    error::{GraphError, GraphErrorCode, GraphErrorKind, MatrixParseError, Result, SamplingError},
    generators::{
        generate_barabasi_albert_graph, generate_complete_graph, generate_cycle_graph,
        generate_random_graph, generate_star_graph, generate_wheel_graph,
    },
    matrix::AdjacencyMatrix,
    memory::estimate_matrix_bytes,
    sampling::{RngSampler, WeightedSampler},
};
