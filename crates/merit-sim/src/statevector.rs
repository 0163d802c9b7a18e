//! Dense statevector engine.
//!
//! Holds all 2^n complex amplitudes and applies gates with bit-mask
//! sweeps. Only the gates the Trotter synthesis emits are implemented.

use num_complex::Complex64;
use rand::Rng;
use rustc_hash::FxHashMap;

use crate::circuit::{Circuit, Gate};
use crate::error::{SimError, SimResult};

/// Hard width cap: 2^26 amplitudes ≈ 1 GiB.
pub const MAX_QUBITS: usize = 26;

/// A dense quantum state over `num_qubits` qubits.
pub struct Statevector {
    /// The 2^n amplitudes.
    amplitudes: Vec<Complex64>,
    num_qubits: usize,
}

impl Statevector {
    /// Create a statevector initialised to |0…0⟩.
    pub fn new(num_qubits: usize) -> SimResult<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(SimError::TooManyQubits {
                n: num_qubits,
                max: MAX_QUBITS,
            });
        }
        let size = 1usize << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// The number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Apply every gate of `circuit` in order.
    pub fn run(&mut self, circuit: &Circuit) -> SimResult<()> {
        if circuit.num_qubits() as usize != self.num_qubits {
            return Err(SimError::WidthMismatch {
                circuit: circuit.num_qubits(),
                state: self.num_qubits as u32,
            });
        }
        for gate in circuit.gates() {
            match *gate {
                Gate::H { qubit } => self.apply_h(qubit as usize),
                Gate::Rx { qubit, theta } => self.apply_rx(qubit as usize, theta),
                Gate::Rz { qubit, theta } => self.apply_rz(qubit as usize, theta),
                Gate::Cx { control, target } => {
                    self.apply_cx(control as usize, target as usize);
                }
            }
        }
        Ok(())
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_rx(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let neg_i_s = Complex64::new(0.0, -(theta / 2.0).sin());
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a + neg_i_s * b;
                self.amplitudes[j] = neg_i_s * a + c * b;
            }
        }
    }

    fn apply_rz(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            *amp *= if i & mask == 0 { phase_0 } else { phase_1 };
        }
    }

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    /// Measurement probability of every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Draw `shots` measurement outcomes.
    ///
    /// Deterministic in the supplied RNG: the same generator state gives
    /// the same counts.
    pub fn sample_counts<R: Rng + ?Sized>(&self, shots: u64, rng: &mut R) -> FxHashMap<usize, u64> {
        let probs = self.probabilities();
        let mut counts = FxHashMap::default();
        for _ in 0..shots {
            let r: f64 = rng.gen_range(0.0..1.0);
            let mut cumulative = 0.0;
            let mut outcome = probs.len() - 1;
            for (i, p) in probs.iter().enumerate() {
                cumulative += p;
                if r < cumulative {
                    outcome = i;
                    break;
                }
            }
            *counts.entry(outcome).or_insert(0) += 1;
        }
        counts
    }
}
