//! Error types for the topogen core library.
//!
//! Every failure a generator can report is a precondition violation. They all
//! belong to the [`GraphErrorKind::InvalidArgument`] class and carry a stable
//! machine-readable code.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Broad classification of [`GraphError`] values.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum GraphErrorKind {
    /// A caller-supplied argument violated a generator precondition.
    InvalidArgument,
}

/// An error produced while validating generator input or building a matrix.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// The requested graph has no nodes.
    #[error("graphs need at least one node")]
    ZeroNodes,
    /// The generator needs more nodes than were requested.
    #[error("graph needs at least {minimum} nodes (got {got})")]
    TooFewNodes {
        /// Smallest node count the generator accepts.
        minimum: usize,
        /// Node count supplied by the caller.
        got: usize,
    },
    /// Edge probability was not a finite value in `[0, 1]`.
    #[error("edge probability must lie in [0, 1] (got {got})")]
    InvalidProbability {
        /// Probability supplied by the caller.
        got: f64,
    },
    /// Each new node would attach to more nodes than the graph holds.
    #[error(
        "number of edges to attach ({num_edges_to_attach}) must not exceed the number of nodes ({num_nodes})"
    )]
    AttachCountExceedsNodes {
        /// Edges each new node was asked to form.
        num_edges_to_attach: usize,
        /// Target node count.
        num_nodes: usize,
    },
    /// The graph to extend is already larger than the target size.
    #[error("existing graph has {existing} nodes but only {num_nodes} were requested")]
    ExistingGraphTooLarge {
        /// Node count of the supplied graph.
        existing: usize,
        /// Target node count.
        num_nodes: usize,
    },
    /// Every candidate had degree zero, so no attachment distribution exists.
    #[error("cannot attach node {node}: every earlier node has degree zero")]
    ZeroDegreeMass {
        /// Node that was being attached.
        node: usize,
    },
    /// Fewer connected candidates exist than edges were requested.
    #[error("cannot attach node {node}: {requested} targets requested but only {available} have non-zero degree")]
    InsufficientCandidates {
        /// Node that was being attached.
        node: usize,
        /// Candidates with non-zero degree.
        available: usize,
        /// Targets requested per new node.
        requested: usize,
    },
    /// A sampler returned the wrong number of targets, a repeated target, or
    /// a target that is not an earlier node.
    #[error(
        "sampler returned {returned:?} for node {node}; expected {requested} distinct nodes below {node}"
    )]
    InvalidSamplerOutput {
        /// Node that was being attached.
        node: usize,
        /// Targets requested per new node.
        requested: usize,
        /// Indices the sampler returned.
        returned: Vec<usize>,
    },
    /// A matrix row had the wrong number of entries.
    #[error("row {row} has {got} entries but the matrix has {expected} rows")]
    NotSquare {
        /// Offending row.
        row: usize,
        /// Required row length.
        expected: usize,
        /// Actual row length.
        got: usize,
    },
    /// A matrix entry was neither 0 nor 1.
    #[error("entry ({row}, {column}) is {value}; only 0 and 1 are allowed")]
    InvalidEntry {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        column: usize,
        /// Value found.
        value: u8,
    },
    /// A matrix had a non-zero diagonal entry.
    #[error("node {node} has a self-loop")]
    SelfLoop {
        /// Node whose diagonal entry was set.
        node: usize,
    },
    /// A matrix was not symmetric.
    #[error("entry ({row}, {column}) does not match its mirror ({column}, {row})")]
    Asymmetric {
        /// Row of the mismatched entry.
        row: usize,
        /// Column of the mismatched entry.
        column: usize,
    },
    /// Only preferential attachment can grow an existing graph.
    #[error("the `{kind}` generator cannot extend an existing graph")]
    ExtensionUnsupported {
        /// Name of the generator that was asked to extend.
        kind: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The requested graph has no nodes.
        ZeroNodes => ZeroNodes => "GRAPH_ZERO_NODES",
        /// The generator needs more nodes than were requested.
        TooFewNodes => TooFewNodes { .. } => "GRAPH_TOO_FEW_NODES",
        /// Edge probability was outside `[0, 1]`.
        InvalidProbability => InvalidProbability { .. } => "GRAPH_INVALID_PROBABILITY",
        /// Attach count exceeded the node count.
        AttachCountExceedsNodes => AttachCountExceedsNodes { .. } => "GRAPH_ATTACH_COUNT_EXCEEDS_NODES",
        /// Existing graph exceeded the target size.
        ExistingGraphTooLarge => ExistingGraphTooLarge { .. } => "GRAPH_EXISTING_TOO_LARGE",
        /// Attachment distribution had zero mass.
        ZeroDegreeMass => ZeroDegreeMass { .. } => "GRAPH_ZERO_DEGREE_MASS",
        /// Too few connected candidates for the attach count.
        InsufficientCandidates => InsufficientCandidates { .. } => "GRAPH_INSUFFICIENT_CANDIDATES",
        /// A sampler broke the distinct-earlier-targets contract.
        InvalidSamplerOutput => InvalidSamplerOutput { .. } => "GRAPH_INVALID_SAMPLER_OUTPUT",
        /// A matrix row had the wrong length.
        NotSquare => NotSquare { .. } => "GRAPH_NOT_SQUARE",
        /// A matrix entry was neither 0 nor 1.
        InvalidEntry => InvalidEntry { .. } => "GRAPH_INVALID_ENTRY",
        /// A matrix had a self-loop.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// A matrix was not symmetric.
        Asymmetric => Asymmetric { .. } => "GRAPH_ASYMMETRIC",
        /// Extension was requested from a closed-form generator.
        ExtensionUnsupported => ExtensionUnsupported { .. } => "GRAPH_EXTENSION_UNSUPPORTED",
    }
}

impl GraphError {
    /// Classifies the error. Every variant is an invalid argument.
    #[must_use]
    pub const fn kind(&self) -> GraphErrorKind {
        GraphErrorKind::InvalidArgument
    }
}

/// Failure reported by a [`crate::WeightedSampler`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SamplingError {
    /// All weights were zero.
    #[error("weights sum to zero")]
    ZeroTotalWeight,
    /// Not enough non-zero weights to draw the requested number of indices.
    #[error("{requested} distinct draws requested but only {available} candidates have weight")]
    InsufficientCandidates {
        /// Candidates with non-zero weight.
        available: usize,
        /// Requested draw count.
        requested: usize,
    },
}

/// Error produced when parsing an [`crate::AdjacencyMatrix`] from text.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MatrixParseError {
    /// The input contained no rows.
    #[error("matrix text contains no rows")]
    Empty,
    /// A token was not a small unsigned integer.
    #[error("line {line}, column {column}: `{token}` is not a matrix entry")]
    InvalidToken {
        /// One-based line number.
        line: usize,
        /// One-based token position within the line.
        column: usize,
        /// Offending token.
        token: String,
    },
    /// The rows parsed but do not describe a simple undirected graph.
    #[error(transparent)]
    Structure(#[from] GraphError),
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
