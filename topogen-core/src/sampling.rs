//! Weighted sampling without replacement.
//!
//! Preferential attachment draws its targets through [`WeightedSampler`] so the
//! growth loop can run against a seeded RNG in production and a scripted
//! sampler in tests.

use rand::Rng;

use crate::error::SamplingError;

/// Draws distinct indices with probability proportional to integer weights.
pub trait WeightedSampler {
    /// Returns `count` distinct indices into `weights`.
    ///
    /// Each draw picks among the not-yet-chosen indices with probability
    /// `weights[i] / sum(remaining weights)`. Zero-weight indices are never
    /// chosen.
    ///
    /// # Errors
    /// Returns [`SamplingError::ZeroTotalWeight`] when `count > 0` and every
    /// weight is zero, and [`SamplingError::InsufficientCandidates`] when fewer
    /// than `count` weights are non-zero.
    fn sample_distinct(
        &mut self,
        weights: &[usize],
        count: usize,
    ) -> Result<Vec<usize>, SamplingError>;
}

impl<S: WeightedSampler + ?Sized> WeightedSampler for &mut S {
    fn sample_distinct(
        &mut self,
        weights: &[usize],
        count: usize,
    ) -> Result<Vec<usize>, SamplingError> {
        (**self).sample_distinct(weights, count)
    }
}

/// [`WeightedSampler`] backed by any [`rand::Rng`].
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use topogen_core::{RngSampler, WeightedSampler};
///
/// let mut sampler = RngSampler::new(SmallRng::seed_from_u64(7));
/// let picks = sampler.sample_distinct(&[0, 3, 1, 5], 2)?;
/// assert_eq!(picks.len(), 2);
/// assert!(!picks.contains(&0));
/// # Ok::<(), topogen_core::SamplingError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RngSampler<R> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    /// Wraps `rng`.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> WeightedSampler for RngSampler<R> {
    fn sample_distinct(
        &mut self,
        weights: &[usize],
        count: usize,
    ) -> Result<Vec<usize>, SamplingError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let mut remaining_total: usize = weights.iter().sum();
        if remaining_total == 0 {
            return Err(SamplingError::ZeroTotalWeight);
        }
        let available = weights.iter().filter(|&&weight| weight > 0).count();
        if available < count {
            return Err(SamplingError::InsufficientCandidates {
                available,
                requested: count,
            });
        }

        // Chosen indices have their weight zeroed so later draws renormalise
        // over the remaining candidates.
        let mut remaining = weights.to_vec();
        let mut chosen = Vec::with_capacity(count);
        for _ in 0..count {
            let threshold = self.rng.gen_range(0..remaining_total);
            let index = select_by_threshold(&remaining, threshold)
                .ok_or(SamplingError::ZeroTotalWeight)?;
            if let Some(weight) = remaining.get_mut(index) {
                remaining_total -= *weight;
                *weight = 0;
            }
            chosen.push(index);
        }
        Ok(chosen)
    }
}

/// Index of the first weight whose cumulative sum exceeds `threshold`.
fn select_by_threshold(weights: &[usize], threshold: usize) -> Option<usize> {
    let mut cumulative = 0usize;
    weights.iter().position(|&weight| {
        cumulative += weight;
        cumulative > threshold
    })
}
