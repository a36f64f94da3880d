//! Behavioural tests for the public generator surface.

use rand::{SeedableRng, rngs::SmallRng};
use rstest::{fixture, rstest};
use topogen_core::{
    AdjacencyMatrix, GraphError, RngSampler, generate_barabasi_albert_graph,
    generate_complete_graph, generate_cycle_graph, generate_random_graph, generate_star_graph,
    generate_wheel_graph,
};

#[fixture]
fn rng() -> SmallRng {
    SmallRng::seed_from_u64(2024)
}

fn is_simple(matrix: &AdjacencyMatrix) -> bool {
    let n = matrix.node_count();
    (0..n).all(|a| {
        matrix.get(a, a) == Some(0)
            && (0..n).all(|b| matches!(matrix.get(a, b), Some(0 | 1)) && matrix.get(a, b) == matrix.get(b, a))
    })
}

#[rstest]
fn every_generator_returns_a_simple_square_matrix(mut rng: SmallRng) {
    let mut sampler = RngSampler::new(SmallRng::seed_from_u64(7));
    let graphs = [
        generate_random_graph(9, 0.4, &mut rng),
        generate_wheel_graph(9),
        generate_cycle_graph(9),
        generate_complete_graph(9),
        generate_star_graph(9),
        generate_barabasi_albert_graph(9, 2, None, &mut sampler),
    ];
    for graph in graphs {
        let graph = graph.expect("arguments are valid");
        assert_eq!(graph.node_count(), 9);
        assert_eq!(graph.rows().len(), 9);
        assert!(graph.rows().all(|row| row.len() == 9));
        assert!(is_simple(&graph), "not simple:\n{graph}");
    }
}

#[rstest]
fn random_with_certain_edges_is_complete(mut rng: SmallRng) {
    let graph = generate_random_graph(7, 1.0, &mut rng).expect("arguments are valid");
    assert_eq!(graph, generate_complete_graph(7).expect("seven nodes are valid"));
}

#[rstest]
fn random_with_impossible_edges_is_empty(mut rng: SmallRng) {
    let graph = generate_random_graph(7, 0.0, &mut rng).expect("arguments are valid");
    assert_eq!(graph, AdjacencyMatrix::zeros(7));
}

#[rstest]
fn cycle_of_four_matches_the_reference_matrix() {
    let expected = AdjacencyMatrix::from_rows(&[
        [0, 1, 0, 1],
        [1, 0, 1, 0],
        [0, 1, 0, 1],
        [1, 0, 1, 0],
    ])
    .expect("reference rows are valid");
    assert_eq!(generate_cycle_graph(4), Ok(expected));
}

#[rstest]
fn star_of_five_matches_the_reference_matrix() {
    let expected = AdjacencyMatrix::from_rows(&[
        [0, 1, 1, 1, 1],
        [1, 0, 0, 0, 0],
        [1, 0, 0, 0, 0],
        [1, 0, 0, 0, 0],
        [1, 0, 0, 0, 0],
    ])
    .expect("reference rows are valid");
    assert_eq!(generate_star_graph(5), Ok(expected));
}

#[rstest]
fn extension_reproduces_a_four_node_prefix() {
    let base = AdjacencyMatrix::from_rows(&[
        [0, 1, 1, 0],
        [1, 0, 0, 1],
        [1, 0, 0, 0],
        [0, 1, 0, 0],
    ])
    .expect("reference rows are valid");
    let mut sampler = RngSampler::new(SmallRng::seed_from_u64(99));
    let grown = generate_barabasi_albert_graph(6, 1, Some(&base), &mut sampler)
        .expect("arguments are valid");

    assert!(is_simple(&grown));
    for (row, prefix_row) in base.rows().enumerate() {
        let grown_row = grown.row(row).expect("row exists");
        assert_eq!(&grown_row[..4], prefix_row);
    }
    for node in 4..6 {
        let earlier = grown.neighbours(node).filter(|&other| other < node).count();
        assert_eq!(earlier, 1);
    }
}

#[rstest]
fn zero_nodes_fail_everywhere(mut rng: SmallRng) {
    let expected = GraphError::ZeroNodes;
    let mut sampler = RngSampler::new(SmallRng::seed_from_u64(1));
    assert_eq!(generate_random_graph(0, 0.5, &mut rng), Err(expected.clone()));
    assert_eq!(generate_wheel_graph(0), Err(expected.clone()));
    assert_eq!(generate_cycle_graph(0), Err(expected.clone()));
    assert_eq!(generate_complete_graph(0), Err(expected.clone()));
    assert_eq!(generate_star_graph(0), Err(expected.clone()));
    assert_eq!(
        generate_barabasi_albert_graph(0, 0, None, &mut sampler),
        Err(expected)
    );
}

#[rstest]
fn oversized_attachment_is_rejected() {
    let mut sampler = RngSampler::new(SmallRng::seed_from_u64(1));
    let err = generate_barabasi_albert_graph(3, 4, None, &mut sampler)
        .expect_err("attach count exceeds node count");
    assert_eq!(
        err,
        GraphError::AttachCountExceedsNodes {
            num_edges_to_attach: 4,
            num_nodes: 3
        }
    );
}

#[rstest]
fn oversized_prefix_is_rejected() {
    let mut sampler = RngSampler::new(SmallRng::seed_from_u64(1));
    let base = generate_complete_graph(5).expect("five nodes are valid");
    let err = generate_barabasi_albert_graph(4, 1, Some(&base), &mut sampler)
        .expect_err("prefix is larger than the target");
    assert_eq!(
        err,
        GraphError::ExistingGraphTooLarge {
            existing: 5,
            num_nodes: 4
        }
    );
}

#[rstest]
fn edgeless_prefix_reports_zero_degree_mass() {
    let mut sampler = RngSampler::new(SmallRng::seed_from_u64(1));
    let base = AdjacencyMatrix::zeros(3);
    let err = generate_barabasi_albert_graph(5, 1, Some(&base), &mut sampler)
        .expect_err("no node has degree");
    assert_eq!(err, GraphError::ZeroDegreeMass { node: 3 });
}
