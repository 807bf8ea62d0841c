// SPDX-License-Identifier: MPL-2.0
//! Random identifier sampling.
//!
//! Draws a set of distinct identifiers from `[1, universe_size]`. Sparse
//! requests use rejection sampling with a bounded number of attempts; dense
//! requests, and sparse ones that run out of attempts, fill the remainder by
//! index sampling over the identifiers not drawn yet. Either way the call
//! terminates with exactly the requested count.

use crate::domain::error::SampleError;
use crate::domain::record::RecordId;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Rejection attempts allowed per requested identifier before falling back.
const MAX_ATTEMPTS_PER_ID: usize = 32;

/// Draws unique random identifiers using an injected generator.
#[derive(Debug, Clone)]
pub struct IdentifierSampler<R = ChaCha8Rng> {
    rng: R,
}

impl IdentifierSampler<ChaCha8Rng> {
    /// Creates a reproducible sampler.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a sampler seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> IdentifierSampler<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns `count` distinct identifiers in `[1, universe_size]`, in draw order.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidArgument`] when `count > universe_size`.
    pub fn sample(&mut self, count: usize, universe_size: u32) -> Result<Vec<RecordId>, SampleError> {
        let universe = universe_size as usize;
        if count > universe {
            return Err(SampleError::InvalidArgument {
                count,
                universe_size,
            });
        }

        let mut seen = HashSet::with_capacity(count);
        let mut drawn = Vec::with_capacity(count);

        let dense = count.saturating_mul(2) > universe;
        if !dense {
            let max_attempts = count.saturating_mul(MAX_ATTEMPTS_PER_ID);
            let mut attempts = 0;
            while drawn.len() < count && attempts < max_attempts {
                attempts += 1;
                let candidate = self.rng.gen_range(1..=universe_size);
                if seen.insert(candidate) {
                    drawn.push(candidate);
                }
            }
        }

        if drawn.len() < count {
            let remaining: Vec<u32> = (1..=universe_size)
                .filter(|candidate| !seen.contains(candidate))
                .collect();
            let needed = count - drawn.len();
            drawn.extend(
                index::sample(&mut self.rng, remaining.len(), needed)
                    .into_iter()
                    .map(|i| remaining[i]),
            );
        }

        Ok(drawn.into_iter().filter_map(RecordId::new).collect())
    }
}
