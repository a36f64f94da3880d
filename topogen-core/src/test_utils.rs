//! Shared test utilities for `topogen-core`.

use proptest::test_runner::Config as ProptestConfig;
use topogen_test_support::profile::ProptestRunProfile;

use crate::{AdjacencyMatrix, SamplingError, WeightedSampler};

/// Builds a proptest configuration from the shared run profile so every
/// property suite honours `PROGTEST_CASES` and `TOPOGEN_PBT_FORK`.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Checks the simple-graph invariants: square, symmetric, 0/1, empty diagonal.
pub(crate) fn simple_graph_violation(matrix: &AdjacencyMatrix) -> Option<String> {
    let n = matrix.node_count();
    if matrix.rows().len() != n {
        return Some(format!("{} rows for {n} nodes", matrix.rows().len()));
    }
    for a in 0..n {
        if matrix.get(a, a) != Some(0) {
            return Some(format!("self-loop on node {a}"));
        }
        for b in 0..n {
            let forward = matrix.get(a, b);
            if !matches!(forward, Some(0 | 1)) {
                return Some(format!("entry ({a}, {b}) is {forward:?}"));
            }
            if forward != matrix.get(b, a) {
                return Some(format!("entry ({a}, {b}) differs from its mirror"));
            }
        }
    }
    None
}

/// Panics with a description of the first violated simple-graph invariant.
pub(crate) fn assert_simple(matrix: &AdjacencyMatrix) {
    if let Some(violation) = simple_graph_violation(matrix) {
        panic!("matrix is not a simple graph: {violation}\n{matrix}");
    }
}

/// [`WeightedSampler`] that replays pre-recorded draws and records the
/// weights it was offered.
pub(crate) struct ScriptedSampler {
    script: std::vec::IntoIter<Vec<usize>>,
    observed: Vec<Vec<usize>>,
}

impl ScriptedSampler {
    pub(crate) fn new(script: Vec<Vec<usize>>) -> Self {
        Self {
            script: script.into_iter(),
            observed: Vec::new(),
        }
    }

    pub(crate) fn observed(&self) -> &[Vec<usize>] {
        &self.observed
    }
}

impl WeightedSampler for ScriptedSampler {
    fn sample_distinct(
        &mut self,
        weights: &[usize],
        _count: usize,
    ) -> Result<Vec<usize>, SamplingError> {
        self.observed.push(weights.to_vec());
        let draw = self
            .script
            .next()
            .unwrap_or_else(|| panic!("script exhausted after {} draws", self.observed.len() - 1));
        Ok(draw)
    }
}
