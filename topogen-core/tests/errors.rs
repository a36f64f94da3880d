use topogen_core::{GraphError, GraphErrorCode, GraphErrorKind};
use rstest::rstest;

#[rstest]
#[case(GraphError::ZeroNodes, GraphErrorCode::ZeroNodes, "GRAPH_ZERO_NODES")]
#[case(
    GraphError::TooFewNodes { minimum: 2, got: 1 },
    GraphErrorCode::TooFewNodes,
    "GRAPH_TOO_FEW_NODES",
)]
#[case(
    GraphError::InvalidProbability { got: 1.5 },
    GraphErrorCode::InvalidProbability,
    "GRAPH_INVALID_PROBABILITY",
)]
#[case(
    GraphError::AttachCountExceedsNodes { num_edges_to_attach: 4, num_nodes: 3 },
    GraphErrorCode::AttachCountExceedsNodes,
    "GRAPH_ATTACH_COUNT_EXCEEDS_NODES",
)]
#[case(
    GraphError::ExistingGraphTooLarge { existing: 5, num_nodes: 4 },
    GraphErrorCode::ExistingGraphTooLarge,
    "GRAPH_EXISTING_TOO_LARGE",
)]
#[case(
    GraphError::ZeroDegreeMass { node: 2 },
    GraphErrorCode::ZeroDegreeMass,
    "GRAPH_ZERO_DEGREE_MASS",
)]
#[case(
    GraphError::InsufficientCandidates { node: 2, available: 1, requested: 2 },
    GraphErrorCode::InsufficientCandidates,
    "GRAPH_INSUFFICIENT_CANDIDATES",
)]
#[case(
    GraphError::InvalidSamplerOutput { node: 3, requested: 2, returned: vec![0, 0] },
    GraphErrorCode::InvalidSamplerOutput,
    "GRAPH_INVALID_SAMPLER_OUTPUT",
)]
#[case(
    GraphError::NotSquare { row: 0, expected: 2, got: 1 },
    GraphErrorCode::NotSquare,
    "GRAPH_NOT_SQUARE",
)]
#[case(
    GraphError::InvalidEntry { row: 0, column: 1, value: 3 },
    GraphErrorCode::InvalidEntry,
    "GRAPH_INVALID_ENTRY",
)]
#[case(GraphError::SelfLoop { node: 0 }, GraphErrorCode::SelfLoop, "GRAPH_SELF_LOOP")]
#[case(
    GraphError::Asymmetric { row: 0, column: 1 },
    GraphErrorCode::Asymmetric,
    "GRAPH_ASYMMETRIC",
)]
#[case(
    GraphError::ExtensionUnsupported { kind: "star" },
    GraphErrorCode::ExtensionUnsupported,
    "GRAPH_EXTENSION_UNSUPPORTED",
)]
fn returns_expected_graph_code(
    #[case] error: GraphError,
    #[case] expected: GraphErrorCode,
    #[case] text: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), text);
    assert_eq!(error.code().to_string(), text);
    assert_eq!(error.kind(), GraphErrorKind::InvalidArgument);
}

#[rstest]
fn messages_name_the_offending_values() {
    let err = GraphError::AttachCountExceedsNodes {
        num_edges_to_attach: 7,
        num_nodes: 3,
    };
    assert_eq!(
        err.to_string(),
        "number of edges to attach (7) must not exceed the number of nodes (3)"
    );
    assert_eq!(
        GraphError::ExistingGraphTooLarge {
            existing: 8,
            num_nodes: 6
        }
        .to_string(),
        "existing graph has 8 nodes but only 6 were requested"
    );
    assert_eq!(
        GraphError::InvalidSamplerOutput {
            node: 4,
            requested: 1,
            returned: vec![4],
        }
        .to_string(),
        "sampler returned [4] for node 4; expected 1 distinct nodes below 4"
    );
}
