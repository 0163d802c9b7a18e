//! Minimal gate-list circuit representation.
//!
//! The Trotterized LABS evolution only emits four gate kinds, so the
//! representation is a flat instruction list rather than a DAG. Builder
//! methods bounds-check qubit indices at append time.

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// A single gate instruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// Hadamard.
    H {
        /// Target qubit.
        qubit: u32,
    },
    /// X-rotation by `theta`.
    Rx {
        /// Target qubit.
        qubit: u32,
        /// Rotation angle in radians.
        theta: f64,
    },
    /// Z-rotation by `theta`.
    Rz {
        /// Target qubit.
        qubit: u32,
        /// Rotation angle in radians.
        theta: f64,
    },
    /// Controlled-X.
    Cx {
        /// Control qubit.
        control: u32,
        /// Target qubit.
        target: u32,
    },
}

impl Gate {
    /// The qubits this gate acts on (1 or 2 entries).
    pub fn qubits(&self) -> [Option<u32>; 2] {
        match *self {
            Gate::H { qubit } | Gate::Rx { qubit, .. } | Gate::Rz { qubit, .. } => {
                [Some(qubit), None]
            }
            Gate::Cx { control, target } => [Some(control), Some(target)],
        }
    }
}

/// An ordered list of gates over a fixed number of qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    n_qubits: u32,
    gates: Vec<Gate>,
}

impl Circuit {
    /// Create an empty circuit of the given width.
    pub fn new(n_qubits: u32) -> Self {
        Self {
            n_qubits,
            gates: Vec::new(),
        }
    }

    fn check(&self, qubit: u32) -> SimResult<()> {
        if qubit >= self.n_qubits {
            return Err(SimError::QubitOutOfRange {
                qubit,
                n_qubits: self.n_qubits,
            });
        }
        Ok(())
    }

    /// Append a Hadamard gate.
    pub fn h(&mut self, qubit: u32) -> SimResult<&mut Self> {
        self.check(qubit)?;
        self.gates.push(Gate::H { qubit });
        Ok(self)
    }

    /// Append an Rx rotation.
    pub fn rx(&mut self, theta: f64, qubit: u32) -> SimResult<&mut Self> {
        self.check(qubit)?;
        self.gates.push(Gate::Rx { qubit, theta });
        Ok(self)
    }

    /// Append an Rz rotation.
    pub fn rz(&mut self, theta: f64, qubit: u32) -> SimResult<&mut Self> {
        self.check(qubit)?;
        self.gates.push(Gate::Rz { qubit, theta });
        Ok(self)
    }

    /// Append a CX gate.
    pub fn cx(&mut self, control: u32, target: u32) -> SimResult<&mut Self> {
        self.check(control)?;
        self.check(target)?;
        if control == target {
            return Err(SimError::ControlIsTarget(control));
        }
        self.gates.push(Gate::Cx { control, target });
        Ok(self)
    }

    /// Circuit width.
    pub fn num_qubits(&self) -> u32 {
        self.n_qubits
    }

    /// The gate list, in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Number of gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// True if no gates have been appended.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Circuit depth: longest chain of gates sharing a wire.
    pub fn depth(&self) -> usize {
        let mut wire_depth = vec![0usize; self.n_qubits as usize];
        for gate in &self.gates {
            let involved: Vec<usize> = gate
                .qubits()
                .into_iter()
                .flatten()
                .map(|q| q as usize)
                .collect();
            let layer = 1 + involved
                .iter()
                .map(|&q| wire_depth[q])
                .max()
                .unwrap_or(0);
            for &q in &involved {
                wire_depth[q] = layer;
            }
        }
        wire_depth.into_iter().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_rejected() {
        let mut c = Circuit::new(2);
        assert!(matches!(
            c.h(2),
            Err(SimError::QubitOutOfRange { qubit: 2, n_qubits: 2 })
        ));
        assert!(matches!(c.cx(0, 5), Err(SimError::QubitOutOfRange { .. })));
    }

    #[test]
    fn cx_needs_distinct_qubits() {
        let mut c = Circuit::new(3);
        assert!(matches!(c.cx(1, 1), Err(SimError::ControlIsTarget(1))));
    }

    #[test]
    fn depth_counts_wire_chains() {
        let mut c = Circuit::new(3);
        c.h(0).unwrap();
        c.h(1).unwrap();
        c.cx(0, 1).unwrap();
        c.rz(0.5, 1).unwrap();
        c.h(2).unwrap();
        // wire 1: H, CX, Rz → depth 3; wire 2: H → depth 1
        assert_eq!(c.depth(), 3);
        assert_eq!(c.len(), 5);
    }

    #[test]
    fn empty_circuit() {
        let c = Circuit::new(4);
        assert!(c.is_empty());
        assert_eq!(c.depth(), 0);
    }
}
