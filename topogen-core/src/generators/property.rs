//! Property tests covering the simple-graph invariants of every generator.

use proptest::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};

use crate::{
    AdjacencyMatrix, RngSampler,
    test_utils::{simple_graph_violation, suite_proptest_config},
};

use super::{
    generate_barabasi_albert_graph, generate_complete_graph, generate_cycle_graph,
    generate_random_graph, generate_star_graph, generate_wheel_graph,
};

fn check_simple(matrix: &AdjacencyMatrix, expected_nodes: usize) -> Result<(), TestCaseError> {
    prop_assert_eq!(matrix.node_count(), expected_nodes);
    if let Some(violation) = simple_graph_violation(matrix) {
        return Err(TestCaseError::fail(violation));
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn closed_form_generators_are_simple(n in 1usize..40) {
        for matrix in [
            generate_wheel_graph(n),
            generate_cycle_graph(n),
            generate_complete_graph(n),
            generate_star_graph(n),
        ] {
            let matrix = matrix.map_err(|err| TestCaseError::fail(err.to_string()))?;
            check_simple(&matrix, n)?;
        }
        prop_assert_eq!(generate_complete_graph(n).map(|m| m.edge_count()), Ok(n * (n - 1) / 2));
        prop_assert_eq!(generate_star_graph(n).map(|m| m.edge_count()), Ok(n - 1));
    }

    #[test]
    fn random_graphs_are_simple(n in 2usize..40, p in 0.0f64..=1.0, seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let matrix = generate_random_graph(n, p, &mut rng)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        check_simple(&matrix, n)?;
    }

    #[test]
    fn preferential_growth_adds_exactly_m_edges_per_node(
        n in 2usize..60,
        m in 1usize..3,
        seed in any::<u64>(),
    ) {
        // Node 2 only has two candidates, so m is capped at two.
        let mut sampler = RngSampler::new(SmallRng::seed_from_u64(seed));
        let matrix = generate_barabasi_albert_graph(n, m, None, &mut sampler)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        check_simple(&matrix, n)?;
        prop_assert!(matrix.has_edge(0, 1));
        for node in 2..n {
            let earlier = matrix.neighbours(node).filter(|&other| other < node).count();
            prop_assert_eq!(earlier, m);
        }
        prop_assert_eq!(matrix.edge_count(), 1 + (n - 2) * m);
    }

    #[test]
    fn extension_keeps_the_prefix(
        base_nodes in 2usize..20,
        extra in 0usize..20,
        seed in any::<u64>(),
    ) {
        let mut sampler = RngSampler::new(SmallRng::seed_from_u64(seed));
        let base = generate_barabasi_albert_graph(base_nodes, 1, None, &mut sampler)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let grown = generate_barabasi_albert_graph(base_nodes + extra, 1, Some(&base), &mut sampler)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        check_simple(&grown, base_nodes + extra)?;
        for a in 0..base_nodes {
            for b in 0..base_nodes {
                prop_assert_eq!(grown.get(a, b), base.get(a, b));
            }
        }
        prop_assert_eq!(grown.edge_count(), base.edge_count() + extra);
    }
}
