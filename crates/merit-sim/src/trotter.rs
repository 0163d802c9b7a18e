//! Trotterized LABS evolution circuits.
//!
//! Approximates the annealing-style evolution by `n_steps` slices. Each
//! slice applies every cost term exactly, then a transverse-field mixing
//! layer:
//!
//!   |ψ⟩ = [ Rx-layer · ∏_k exp(-i c_k Z…Z dt) ]^n  H^⊗N |0…0⟩
//!
//! with dt = t / n_steps. A Z-string exponential uses the identity
//!
//!   exp(-i θ/2 · Z⊗…⊗Z) = CNOT-ladder · Rz(θ) · CNOT-ladder†
//!
//! which needs no basis changes since every cost term is diagonal.

use tracing::debug;

use crate::circuit::Circuit;
use crate::error::{SimError, SimResult};
use crate::hamiltonian::{Hamiltonian, ZTerm};

/// Builder for the Trotterized evolution circuit.
pub struct TrotterCircuit {
    hamiltonian: Hamiltonian,
    /// Total evolution time t.
    t: f64,
    /// Number of Trotter slices.
    n_steps: usize,
}

impl TrotterCircuit {
    /// Construct a synthesiser for `exp(-i H t)` split into `n_steps`
    /// slices.
    pub fn new(hamiltonian: Hamiltonian, t: f64, n_steps: usize) -> Self {
        Self {
            hamiltonian,
            t,
            n_steps,
        }
    }

    /// Synthesise the full state-preparation circuit.
    pub fn build(&self) -> SimResult<Circuit> {
        if self.hamiltonian.n_terms() == 0 {
            return Err(SimError::EmptyHamiltonian);
        }
        if self.n_steps == 0 {
            return Err(SimError::InvalidSteps(0));
        }

        let n_qubits = self.hamiltonian.min_qubits();
        let dt = self.t / self.n_steps as f64;
        let mut circuit = Circuit::new(n_qubits);

        debug!(
            n_terms = self.hamiltonian.n_terms(),
            n_steps = self.n_steps,
            n_qubits,
            "synthesising Trotterized evolution circuit"
        );

        // Uniform superposition over all basis states.
        for q in 0..n_qubits {
            circuit.h(q)?;
        }

        for _ in 0..self.n_steps {
            for term in self.hamiltonian.terms() {
                append_exp_z(&mut circuit, term, dt)?;
            }
            // Transverse-field mixing layer.
            for q in 0..n_qubits {
                circuit.rx(2.0 * dt, q)?;
            }
        }

        Ok(circuit)
    }
}

/// Append the circuit for `exp(-i · coeff · dt · Z…Z)`.
///
/// A no-op for identity terms (pure global phase).
fn append_exp_z(circuit: &mut Circuit, term: &ZTerm, dt: f64) -> SimResult<()> {
    let qubits = term.qubits();
    if qubits.is_empty() {
        return Ok(());
    }

    // θ = 2 · coeff · dt  (Rz(θ) implements exp(-i θ/2 Z))
    let theta = 2.0 * term.coeff() * dt;

    if let [only] = qubits {
        circuit.rz(theta, *only)?;
        return Ok(());
    }

    // Parity-encode onto the last qubit, rotate, decode.
    for window in qubits.windows(2) {
        circuit.cx(window[0], window[1])?;
    }
    circuit.rz(theta, *qubits.last().expect("non-empty checked above"))?;
    for window in qubits.windows(2).rev() {
        circuit.cx(window[0], window[1])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hamiltonian_rejected() {
        let h = Hamiltonian::from_terms(vec![]);
        assert!(matches!(
            TrotterCircuit::new(h, 1.0, 1).build(),
            Err(SimError::EmptyHamiltonian)
        ));
    }

    #[test]
    fn zero_steps_rejected() {
        let h = Hamiltonian::labs(4).unwrap();
        assert!(matches!(
            TrotterCircuit::new(h, 1.0, 0).build(),
            Err(SimError::InvalidSteps(0))
        ));
    }

    #[test]
    fn circuit_opens_with_hadamard_layer() {
        let h = Hamiltonian::labs(5).unwrap();
        let circuit = TrotterCircuit::new(h, 0.8, 2).build().unwrap();
        assert_eq!(circuit.num_qubits(), 5);
        for (q, gate) in circuit.gates().iter().take(5).enumerate() {
            assert_eq!(*gate, crate::circuit::Gate::H { qubit: q as u32 });
        }
    }

    #[test]
    fn gate_count_matches_structure() {
        // n = 4: 3 pair terms (3 gates each), 1 quad term (7 gates),
        // 4 mixer rotations per slice, plus the 4-gate H layer.
        let h = Hamiltonian::labs(4).unwrap();
        let per_step = 3 * 3 + 7 + 4;
        for steps in [1usize, 2, 3] {
            let circuit = TrotterCircuit::new(h.clone(), 1.0, steps).build().unwrap();
            assert_eq!(circuit.len(), 4 + steps * per_step);
        }
    }

    #[test]
    fn more_steps_produce_deeper_circuits() {
        let h = Hamiltonian::labs(6).unwrap();
        let c1 = TrotterCircuit::new(h.clone(), 1.0, 1).build().unwrap();
        let c4 = TrotterCircuit::new(h, 1.0, 4).build().unwrap();
        assert!(c4.depth() > c1.depth());
    }

    #[test]
    fn single_qubit_term_becomes_bare_rz() {
        let h = Hamiltonian::from_terms(vec![ZTerm::new(1.0, [0])]);
        let circuit = TrotterCircuit::new(h, 1.0, 1).build().unwrap();
        // H, Rz, Rx; no ladder.
        assert_eq!(circuit.len(), 3);
    }
}
