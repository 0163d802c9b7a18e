//! Interaction-index generation.
//!
//! The sampler's cost Hamiltonian couples consecutive spins through
//! 2-body and 4-body terms. For a length-N sequence the index groupings
//! are fixed and fully determined by N:
//!
//! - pairs   (i, i+1)            for i in 0..N-1   (count N-1)
//! - windows (i, i+1, i+2, i+3)  for i in 0..N-3   (count N-3)

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Precomputed interaction index sets for a fixed sequence length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interactions {
    n: usize,
    pairs: Vec<[usize; 2]>,
    quads: Vec<[usize; 4]>,
}

impl Interactions {
    /// Minimum sequence length for which 4-body terms exist.
    pub const MIN_LENGTH: usize = 4;

    /// Generate the interaction sets for sequences of length `n`.
    ///
    /// Fails with [`CoreError::TooShort`] for `n` below
    /// [`Self::MIN_LENGTH`]: shorter lengths have no 4-body windows.
    pub fn for_length(n: usize) -> CoreResult<Self> {
        if n < Self::MIN_LENGTH {
            return Err(CoreError::TooShort {
                n,
                min: Self::MIN_LENGTH,
            });
        }
        let pairs = (0..n - 1).map(|i| [i, i + 1]).collect();
        let quads = (0..n - 3).map(|i| [i, i + 1, i + 2, i + 3]).collect();
        Ok(Self { n, pairs, quads })
    }

    /// The sequence length these interactions were generated for.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false: `for_length` requires n ≥ 4.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// 2-body index pairs, ordered by leading index.
    pub fn pairs(&self) -> &[[usize; 2]] {
        &self.pairs
    }

    /// 4-body index windows, ordered by leading index.
    pub fn quads(&self) -> &[[usize; 4]] {
        &self.quads
    }
}
