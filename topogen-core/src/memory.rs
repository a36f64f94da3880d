//! Pre-flight size estimate for dense matrices.
//!
//! A matrix with `n` nodes stores `n²` one-byte entries, so callers can reject
//! oversized requests before anything is allocated.

/// Bytes needed for the entries of an `node_count × node_count` matrix,
/// saturating at `u64::MAX`.
///
/// # Examples
///
/// ```
/// use topogen_core::estimate_matrix_bytes;
///
/// assert_eq!(estimate_matrix_bytes(0), 0);
/// assert_eq!(estimate_matrix_bytes(3_000), 9_000_000);
/// ```
#[must_use]
pub fn estimate_matrix_bytes(node_count: usize) -> u64 {
    let n = u64::try_from(node_count).unwrap_or(u64::MAX);
    n.saturating_mul(n)
}
