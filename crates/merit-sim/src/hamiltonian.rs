//! LABS cost Hamiltonian.
//!
//! The evolution only ever exponentiates products of Pauli-Z operators,
//! so terms are plain Z-strings:
//!
//!   H = Σ_k  c_k · Z_{i₁} Z_{i₂} … Z_{i_m}
//!
//! [`Hamiltonian::labs`] assembles the fixed LABS structure (one 2-body
//! term per consecutive pair, one 4-body term per consecutive window of
//! four) from the interaction generator in `merit-core`.

use serde::{Deserialize, Serialize};

use merit_core::Interactions;

use crate::error::SimResult;

/// A weighted product of Pauli-Z operators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZTerm {
    /// Real coefficient.
    coeff: f64,
    /// Qubit indices carrying a Z factor, sorted ascending, no repeats.
    qubits: Vec<u32>,
}

impl ZTerm {
    /// Create a term from a coefficient and qubit indices.
    ///
    /// Indices are sorted; a repeated index cancels (Z² = I) and both
    /// copies are dropped.
    pub fn new(coeff: f64, qubits: impl IntoIterator<Item = u32>) -> Self {
        let mut qs: Vec<u32> = qubits.into_iter().collect();
        qs.sort_unstable();
        // Remove cancelling pairs.
        let mut reduced = Vec::with_capacity(qs.len());
        for q in qs {
            if reduced.last() == Some(&q) {
                reduced.pop();
            } else {
                reduced.push(q);
            }
        }
        Self {
            coeff,
            qubits: reduced,
        }
    }

    /// The coefficient c.
    pub fn coeff(&self) -> f64 {
        self.coeff
    }

    /// The qubits carrying a Z factor, sorted ascending.
    pub fn qubits(&self) -> &[u32] {
        &self.qubits
    }

    /// True if all Z factors cancelled (pure global phase).
    pub fn is_identity(&self) -> bool {
        self.qubits.is_empty()
    }

    /// The highest qubit index referenced, or `None` for identity.
    pub fn max_qubit(&self) -> Option<u32> {
        self.qubits.last().copied()
    }
}

/// A sum of weighted Z-strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hamiltonian {
    terms: Vec<ZTerm>,
}

impl Hamiltonian {
    /// Create from a list of terms.
    pub fn from_terms(terms: Vec<ZTerm>) -> Self {
        Self { terms }
    }

    /// The LABS cost Hamiltonian for sequences of length `n`.
    ///
    /// One unit-coefficient ZZ term per consecutive pair and one unit
    /// ZZZZ term per consecutive window of four; fails for `n < 4`.
    pub fn labs(n: usize) -> SimResult<Self> {
        let interactions = Interactions::for_length(n)?;
        let mut terms =
            Vec::with_capacity(interactions.pairs().len() + interactions.quads().len());
        for &[i, j] in interactions.pairs() {
            terms.push(ZTerm::new(1.0, [i as u32, j as u32]));
        }
        for &[a, b, c, d] in interactions.quads() {
            terms.push(ZTerm::new(1.0, [a as u32, b as u32, c as u32, d as u32]));
        }
        Ok(Self { terms })
    }

    /// All terms.
    pub fn terms(&self) -> &[ZTerm] {
        &self.terms
    }

    /// Number of terms.
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// The minimum number of qubits required to represent this
    /// Hamiltonian. Returns 0 for an empty or purely-identity sum.
    pub fn min_qubits(&self) -> u32 {
        self.terms
            .iter()
            .filter_map(ZTerm::max_qubit)
            .max()
            .map_or(0, |q| q + 1)
    }
}

impl FromIterator<ZTerm> for Hamiltonian {
    fn from_iter<T: IntoIterator<Item = ZTerm>>(iter: T) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}
