//! Generator catalogue and request builder.
//!
//! [`GraphKind`] names every generator the crate offers. [`GraphRequest`]
//! collects a node count, a kind and an optional seed, validates them
//! up front, and yields a [`Generator`] that can be run repeatedly.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{info, instrument};

use crate::{
    error::{GraphError, Result},
    generators::{
        generate_barabasi_albert_graph, generate_complete_graph, generate_cycle_graph,
        generate_random_graph, generate_star_graph, generate_wheel_graph, require_nodes,
        validate_attachment, validate_random,
    },
    matrix::AdjacencyMatrix,
    sampling::RngSampler,
};

/// Node count used by [`GraphRequest::default`].
pub const DEFAULT_NUM_NODES: usize = 16;
/// Edge probability used by [`GraphRequest::default`].
pub const DEFAULT_EDGE_PROBABILITY: f64 = 0.5;

/// The generators offered by the catalogue.
///
/// # Examples
/// ```
/// use topogen_core::GraphKind;
///
/// let kind = GraphKind::BarabasiAlbert { num_edges_to_attach: 2 };
/// assert_eq!(kind.name(), "barabasi-albert");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GraphKind {
    /// Uniform random (Erdos-Renyi) graph.
    Random {
        /// Probability that any given pair is connected.
        edge_probability: f64,
    },
    /// Ring closed back to node 0; see [`generate_wheel_graph`].
    Wheel,
    /// Ring where node `i` connects to `(i + 1) mod n`.
    Cycle,
    /// Every pair of distinct nodes connected.
    Complete,
    /// Node 0 connected to every other node.
    Star,
    /// Preferential attachment growth.
    BarabasiAlbert {
        /// Edges each new node forms.
        num_edges_to_attach: usize,
    },
}

impl GraphKind {
    /// Stable lowercase name of the generator.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random { .. } => "random",
            Self::Wheel => "wheel",
            Self::Cycle => "cycle",
            Self::Complete => "complete",
            Self::Star => "star",
            Self::BarabasiAlbert { .. } => "barabasi-albert",
        }
    }

    /// Returns `true` for kinds that consume randomness.
    #[must_use]
    pub const fn is_randomised(&self) -> bool {
        matches!(self, Self::Random { .. } | Self::BarabasiAlbert { .. })
    }
}

/// Configures and validates a generator run.
///
/// # Examples
/// ```
/// use topogen_core::{GraphKind, GraphRequest};
///
/// let generator = GraphRequest::new(5, GraphKind::Star).build()?;
/// let star = generator.generate()?;
/// assert_eq!(star.degree(0), 4);
/// # Ok::<(), topogen_core::GraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GraphRequest {
    num_nodes: usize,
    kind: GraphKind,
    seed: Option<u64>,
}

impl Default for GraphRequest {
    /// Sixteen nodes, uniform random with probability 0.5, no seed.
    fn default() -> Self {
        Self {
            num_nodes: DEFAULT_NUM_NODES,
            kind: GraphKind::Random {
                edge_probability: DEFAULT_EDGE_PROBABILITY,
            },
            seed: None,
        }
    }
}

impl GraphRequest {
    /// Creates a request for `num_nodes` nodes of the given kind.
    #[must_use]
    pub const fn new(num_nodes: usize, kind: GraphKind) -> Self {
        Self {
            num_nodes,
            kind,
            seed: None,
        }
    }

    /// Fixes the RNG seed so runs are reproducible.
    ///
    /// # Examples
    /// ```
    /// use topogen_core::{GraphKind, GraphRequest};
    ///
    /// let kind = GraphKind::Random { edge_probability: 0.4 };
    /// let first = GraphRequest::new(12, kind).with_seed(9).build()?.generate()?;
    /// let second = GraphRequest::new(12, kind).with_seed(9).build()?.generate()?;
    /// assert_eq!(first, second);
    /// # Ok::<(), topogen_core::GraphError>(())
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the node count.
    #[must_use]
    pub const fn with_num_nodes(mut self, num_nodes: usize) -> Self {
        self.num_nodes = num_nodes;
        self
    }

    /// Overrides the generator kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: GraphKind) -> Self {
        self.kind = kind;
        self
    }

    /// Configured node count.
    #[must_use]
    pub const fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Configured generator kind.
    #[must_use]
    pub const fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the request and returns a runnable [`Generator`].
    ///
    /// # Errors
    /// Returns the same [`GraphError`] the selected generator would report
    /// for these arguments.
    pub fn build(self) -> Result<Generator> {
        match self.kind {
            GraphKind::Random { edge_probability } => {
                validate_random(self.num_nodes, edge_probability)?;
            }
            GraphKind::BarabasiAlbert {
                num_edges_to_attach,
            } => validate_attachment(self.num_nodes, num_edges_to_attach)?,
            GraphKind::Wheel | GraphKind::Cycle | GraphKind::Complete | GraphKind::Star => {
                require_nodes(self.num_nodes)?;
            }
        }
        Ok(Generator { request: self })
    }
}

/// A validated [`GraphRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct Generator {
    request: GraphRequest,
}

impl Generator {
    /// The validated request.
    #[must_use]
    pub const fn request(&self) -> &GraphRequest {
        &self.request
    }

    /// Generates a matrix, seeding a [`SmallRng`] from the configured seed or
    /// from OS entropy when no seed is set.
    ///
    /// # Errors
    /// Returns [`GraphError`] when generation fails; preferential attachment
    /// can fail mid-growth (see [`generate_barabasi_albert_graph`]).
    pub fn generate(&self) -> Result<AdjacencyMatrix> {
        let mut rng = self.rng();
        self.generate_with(&mut rng)
    }

    /// Generates a matrix using a caller-supplied RNG.
    ///
    /// # Errors
    /// See [`Generator::generate`].
    #[instrument(
        name = "catalogue.generate",
        skip(self, rng),
        err,
        fields(kind = self.request.kind.name(), num_nodes = self.request.num_nodes),
    )]
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<AdjacencyMatrix> {
        let n = self.request.num_nodes;
        let matrix = match self.request.kind {
            GraphKind::Random { edge_probability } => {
                generate_random_graph(n, edge_probability, rng)?
            }
            GraphKind::Wheel => generate_wheel_graph(n)?,
            GraphKind::Cycle => generate_cycle_graph(n)?,
            GraphKind::Complete => generate_complete_graph(n)?,
            GraphKind::Star => generate_star_graph(n)?,
            GraphKind::BarabasiAlbert {
                num_edges_to_attach,
            } => {
                let mut sampler = RngSampler::new(rng);
                generate_barabasi_albert_graph(n, num_edges_to_attach, None, &mut sampler)?
            }
        };
        info!(edges = matrix.edge_count(), "graph generated");
        Ok(matrix)
    }

    /// Grows `existing` to the configured node count by preferential
    /// attachment.
    ///
    /// # Errors
    /// Returns [`GraphError::ExtensionUnsupported`] for closed-form and
    /// uniform random kinds, and any error
    /// [`generate_barabasi_albert_graph`] reports.
    ///
    /// # Examples
    /// ```
    /// use topogen_core::{GraphKind, GraphRequest};
    ///
    /// let kind = GraphKind::BarabasiAlbert { num_edges_to_attach: 1 };
    /// let small = GraphRequest::new(4, kind).with_seed(1).build()?.generate()?;
    /// let large = GraphRequest::new(9, kind).with_seed(2).build()?.extend(&small)?;
    /// assert_eq!(large.node_count(), 9);
    /// assert_eq!(large.edge_count(), small.edge_count() + 5);
    /// # Ok::<(), topogen_core::GraphError>(())
    /// ```
    #[instrument(
        name = "catalogue.extend",
        skip(self, existing),
        err,
        fields(
            kind = self.request.kind.name(),
            num_nodes = self.request.num_nodes,
            existing_size = existing.node_count(),
        ),
    )]
    pub fn extend(&self, existing: &AdjacencyMatrix) -> Result<AdjacencyMatrix> {
        let GraphKind::BarabasiAlbert {
            num_edges_to_attach,
        } = self.request.kind
        else {
            return Err(GraphError::ExtensionUnsupported {
                kind: self.request.kind.name(),
            });
        };
        let mut sampler = RngSampler::new(self.rng());
        let matrix = generate_barabasi_albert_graph(
            self.request.num_nodes,
            num_edges_to_attach,
            Some(existing),
            &mut sampler,
        )?;
        info!(edges = matrix.edge_count(), "graph extended");
        Ok(matrix)
    }

    fn rng(&self) -> SmallRng {
        self.request
            .seed
            .map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64)
    }
}
