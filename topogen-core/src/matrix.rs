//! Dense adjacency matrix for simple undirected graphs.
//!
//! Entries are stored row-major in a single buffer. Public constructors either
//! produce an edgeless graph or validate caller-supplied rows, so every
//! [`AdjacencyMatrix`] a caller holds is square, symmetric, 0/1-valued and free
//! of self-loops.

use std::{fmt, str::FromStr};

use crate::error::{GraphError, MatrixParseError};

/// Square 0/1 matrix describing which node pairs are connected.
///
/// # Examples
/// ```
/// use topogen_core::AdjacencyMatrix;
///
/// let matrix = AdjacencyMatrix::from_rows(&[[0, 1, 0], [1, 0, 1], [0, 1, 0]])?;
/// assert_eq!(matrix.node_count(), 3);
/// assert_eq!(matrix.edge_count(), 2);
/// assert_eq!(matrix.degree(1), 2);
/// # Ok::<(), topogen_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AdjacencyMatrix {
    node_count: usize,
    entries: Vec<u8>,
}

impl AdjacencyMatrix {
    /// Creates an edgeless graph with `node_count` nodes.
    ///
    /// # Panics
    /// Panics if `node_count²` bytes cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// use topogen_core::AdjacencyMatrix;
    ///
    /// let matrix = AdjacencyMatrix::zeros(4);
    /// assert_eq!(matrix.edge_count(), 0);
    /// ```
    #[must_use]
    pub fn zeros(node_count: usize) -> Self {
        Self {
            node_count,
            entries: vec![0; node_count.saturating_mul(node_count)],
        }
    }

    /// Builds a matrix from row slices, validating every invariant.
    ///
    /// # Errors
    /// Returns [`GraphError::NotSquare`] when a row length differs from the
    /// row count, [`GraphError::InvalidEntry`] for entries other than 0 or 1,
    /// [`GraphError::SelfLoop`] for a set diagonal entry, and
    /// [`GraphError::Asymmetric`] when `M[i][j] != M[j][i]`.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GraphError> {
        let node_count = rows.len();
        let mut entries = Vec::with_capacity(node_count.saturating_mul(node_count));
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != node_count {
                return Err(GraphError::NotSquare {
                    row,
                    expected: node_count,
                    got: values.len(),
                });
            }
            if let Some((column, &value)) = values.iter().enumerate().find(|(_, v)| **v > 1) {
                return Err(GraphError::InvalidEntry { row, column, value });
            }
            entries.extend_from_slice(values);
        }

        let matrix = Self {
            node_count,
            entries,
        };
        matrix.check_simple()?;
        Ok(matrix)
    }

    fn check_simple(&self) -> Result<(), GraphError> {
        for row in 0..self.node_count {
            if self.has_edge(row, row) {
                return Err(GraphError::SelfLoop { node: row });
            }
            for column in (row + 1)..self.node_count {
                if self.get(row, column) != self.get(column, row) {
                    return Err(GraphError::Asymmetric { row, column });
                }
            }
        }
        Ok(())
    }

    /// Number of nodes (rows).
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns `true` when the matrix has no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Entry at `(row, column)`, or `None` when either index is out of range.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        self.offset(row, column)
            .and_then(|offset| self.entries.get(offset).copied())
    }

    /// Returns `true` when `a` and `b` are connected.
    #[must_use]
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.get(a, b) == Some(1)
    }

    /// Row `node` as a slice, or `None` when out of range.
    #[must_use]
    pub fn row(&self, node: usize) -> Option<&[u8]> {
        let start = self.offset(node, 0)?;
        self.entries.get(start..start + self.node_count)
    }

    /// Iterates over the rows in node order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.entries.chunks_exact(self.node_count.max(1))
    }

    /// Copies the rows into nested vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }

    /// Number of edges incident to `node`; zero when out of range.
    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        self.row(node).map_or(0, row_sum)
    }

    /// Degree of every node in node order.
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        self.rows().map(row_sum).collect()
    }

    /// Total number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        row_sum(&self.entries) / 2
    }

    /// Iterates over edges as `(a, b)` pairs with `a < b`, in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.node_count).flat_map(move |a| {
            ((a + 1)..self.node_count)
                .filter(move |&b| self.has_edge(a, b))
                .map(move |b| (a, b))
        })
    }

    /// Iterates over the neighbours of `node` in ascending order.
    pub fn neighbours(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(node)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .filter(|(_, value)| **value == 1)
            .map(|(neighbour, _)| neighbour)
    }

    /// Sets both symmetric entries for the pair `(a, b)`.
    ///
    /// Callers guarantee `a != b` and both indices are in range.
    pub(crate) fn connect(&mut self, a: usize, b: usize) {
        debug_assert!(a != b, "self-loops are not allowed");
        for (row, column) in [(a, b), (b, a)] {
            if let Some(entry) = self
                .offset(row, column)
                .and_then(|offset| self.entries.get_mut(offset))
            {
                *entry = 1;
            }
        }
    }

    /// Copies `prefix` into the top-left block.
    ///
    /// Callers guarantee `prefix` is no larger than `self`.
    pub(crate) fn copy_prefix(&mut self, prefix: &Self) {
        debug_assert!(prefix.node_count <= self.node_count);
        for (node, source) in prefix.rows().enumerate() {
            let Some(start) = self.offset(node, 0) else {
                return;
            };
            if let Some(target) = self.entries.get_mut(start..start + source.len()) {
                target.copy_from_slice(source);
            }
        }
    }

    fn offset(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.node_count && column < self.node_count).then(|| row * self.node_count + column)
    }
}

fn row_sum(values: &[u8]) -> usize {
    values.iter().map(|&value| usize::from(value)).sum()
}

impl fmt::Display for AdjacencyMatrix {
    /// Writes one row per line with entries separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (column, value) in row.iter().enumerate() {
                if column > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for AdjacencyMatrix {
    type Err = MatrixParseError;

    /// Parses whitespace-separated rows, one per non-blank line, as produced by
    /// the [`fmt::Display`] implementation.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .enumerate()
                .map(|(column, token)| {
                    token
                        .parse::<u8>()
                        .map_err(|_| MatrixParseError::InvalidToken {
                            line: index + 1,
                            column: column + 1,
                            token: token.to_owned(),
                        })
                })
                .collect::<Result<Vec<u8>, _>>()?;
            rows.push(row);
        }
        if rows.is_empty() {
            return Err(MatrixParseError::Empty);
        }
        Self::from_rows(&rows).map_err(MatrixParseError::from)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AdjacencyMatrix {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let rows: Vec<&[u8]> = self.rows().collect();
        let mut state = serializer.serialize_struct("AdjacencyMatrix", 2)?;
        state.serialize_field("node_count", &self.node_count)?;
        state.serialize_field("rows", &rows)?;
        state.end()
    }
}
