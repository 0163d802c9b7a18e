//! ±1 spin sequences.
//!
//! A [`Sequence`] is an ordered, fixed-length list of spins drawn from
//! {-1, +1}. It is the candidate-solution type of the whole workspace:
//! the energy kernel scores it, the sampler produces it from measurement
//! outcomes, and the search mutates it. Transforms never modify in place;
//! they return fresh sequences.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// An ordered sequence of ±1 spins.
///
/// Ordering and hashing are lexicographic over the spins, which gives
/// deterministic iteration when sequences key a `BTreeMap`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Sequence {
    spins: Vec<i8>,
}

impl Sequence {
    /// Construct a sequence from raw spin values.
    ///
    /// Rejects empty input and any value outside {-1, +1}; malformed
    /// input is never coerced.
    pub fn from_spins(spins: Vec<i8>) -> CoreResult<Self> {
        if spins.is_empty() {
            return Err(CoreError::Empty);
        }
        for (pos, &value) in spins.iter().enumerate() {
            if value != 1 && value != -1 {
                return Err(CoreError::InvalidSpin { pos, value });
            }
        }
        Ok(Self { spins })
    }

    /// Draw a sequence uniformly at random over {-1, +1}^n.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> CoreResult<Self> {
        if n == 0 {
            return Err(CoreError::Empty);
        }
        let spins = (0..n)
            .map(|_| if rng.gen_bool(0.5) { 1 } else { -1 })
            .collect();
        Ok(Self { spins })
    }

    /// Decode a computational-basis measurement outcome.
    ///
    /// Bit `i` of `index` is qubit `i` (little-endian); a measured 0 maps
    /// to spin +1 and a measured 1 to spin -1.
    pub fn from_basis_index(index: usize, n: usize) -> CoreResult<Self> {
        if n == 0 {
            return Err(CoreError::Empty);
        }
        let spins = (0..n)
            .map(|i| if index >> i & 1 == 0 { 1 } else { -1 })
            .collect();
        Ok(Self { spins })
    }

    /// Number of spins.
    pub fn len(&self) -> usize {
        self.spins.len()
    }

    /// Always false: construction rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        self.spins.is_empty()
    }

    /// The spin values.
    pub fn spins(&self) -> &[i8] {
        &self.spins
    }

    /// The spin at position `i`, if in bounds.
    pub fn get(&self, i: usize) -> Option<i8> {
        self.spins.get(i).copied()
    }

    /// A copy with the spin at `i` flipped.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn flipped(&self, i: usize) -> Self {
        let mut spins = self.spins.clone();
        spins[i] = -spins[i];
        Self { spins }
    }

    /// A copy with every spin negated (global sign flip).
    #[must_use]
    pub fn negated(&self) -> Self {
        Self {
            spins: self.spins.iter().map(|&s| -s).collect(),
        }
    }

    /// A copy with the spin order reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut spins = self.spins.clone();
        spins.reverse();
        Self { spins }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &s in &self.spins {
            f.write_str(if s == 1 { "+" } else { "-" })?;
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        if s.is_empty() {
            return Err(CoreError::Empty);
        }
        let spins = s
            .chars()
            .enumerate()
            .map(|(pos, c)| match c {
                '+' => Ok(1),
                '-' => Ok(-1),
                found => Err(CoreError::InvalidChar { pos, found }),
            })
            .collect::<CoreResult<Vec<i8>>>()?;
        Ok(Self { spins })
    }
}

impl From<Sequence> for String {
    fn from(seq: Sequence) -> Self {
        seq.to_string()
    }
}

impl TryFrom<String> for Sequence {
    type Error = CoreError;

    fn try_from(s: String) -> CoreResult<Self> {
        s.parse()
    }
}
