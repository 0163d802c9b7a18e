//! The Trotter-evolution sampler backend.
//!
//! Implements the [`Sampler`] capability from `merit-core`: build the
//! LABS cost Hamiltonian, synthesise the Trotterized state-preparation
//! circuit, simulate it on the dense statevector engine, and draw
//! seeded measurement shots.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info};

use merit_core::{SampleDistribution, SampleRequest, Sampler, SamplerError, Sequence};

use crate::hamiltonian::Hamiltonian;
use crate::statevector::Statevector;
use crate::trotter::TrotterCircuit;

/// A sampler backed by the local statevector simulator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrotterSampler;

impl TrotterSampler {
    /// Create a sampler. Stateless; all parameters travel in the
    /// request.
    pub fn new() -> Self {
        Self
    }

    fn validate(request: &SampleRequest) -> Result<(), SamplerError> {
        if request.shots == 0 {
            return Err(SamplerError::Malformed("shots must be positive".into()));
        }
        if request.trotter_steps == 0 {
            return Err(SamplerError::Malformed(
                "trotter_steps must be positive".into(),
            ));
        }
        if !request.evolution_time.is_finite() {
            return Err(SamplerError::Malformed(format!(
                "evolution_time must be finite, got {}",
                request.evolution_time
            )));
        }
        Ok(())
    }
}

impl Sampler for TrotterSampler {
    fn sample(&self, request: &SampleRequest) -> Result<SampleDistribution, SamplerError> {
        Self::validate(request)?;

        let hamiltonian =
            Hamiltonian::labs(request.n).map_err(|e| SamplerError::Malformed(e.to_string()))?;
        let circuit = TrotterCircuit::new(hamiltonian, request.evolution_time, request.trotter_steps)
            .build()
            .map_err(|e| SamplerError::Backend(e.to_string()))?;

        debug!(
            n = request.n,
            gates = circuit.len(),
            depth = circuit.depth(),
            "running sampler circuit"
        );

        let mut state =
            Statevector::new(request.n).map_err(|e| SamplerError::Backend(e.to_string()))?;
        state
            .run(&circuit)
            .map_err(|e| SamplerError::Backend(e.to_string()))?;

        let mut rng = SmallRng::seed_from_u64(request.seed);
        let counts = state.sample_counts(request.shots, &mut rng);

        let mut distribution = SampleDistribution::new();
        for (outcome, count) in counts {
            let seq = Sequence::from_basis_index(outcome, request.n)
                .map_err(|e| SamplerError::Backend(e.to_string()))?;
            distribution.record(seq, count);
        }

        info!(
            n = request.n,
            shots = request.shots,
            distinct = distribution.len(),
            "sampler produced seed distribution"
        );
        Ok(distribution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(n: usize) -> SampleRequest {
        SampleRequest {
            n,
            trotter_steps: 3,
            evolution_time: 0.9,
            shots: 256,
            seed: 42,
        }
    }

    #[test]
    fn counts_sum_to_shots_and_lengths_match() {
        let dist = TrotterSampler::new().sample(&request(6)).unwrap();
        assert_eq!(dist.total(), 256);
        assert!(dist.iter().all(|(seq, _)| seq.len() == 6));
    }

    #[test]
    fn identical_requests_give_identical_distributions() {
        let sampler = TrotterSampler::new();
        let a = sampler.sample(&request(5)).unwrap();
        let b = sampler.sample(&request(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_requests_are_rejected_before_simulation() {
        let sampler = TrotterSampler::new();
        assert!(matches!(
            sampler.sample(&SampleRequest { shots: 0, ..request(5) }),
            Err(SamplerError::Malformed(_))
        ));
        assert!(matches!(
            sampler.sample(&SampleRequest { trotter_steps: 0, ..request(5) }),
            Err(SamplerError::Malformed(_))
        ));
        assert!(matches!(
            sampler.sample(&SampleRequest { evolution_time: f64::NAN, ..request(5) }),
            Err(SamplerError::Malformed(_))
        ));
        // 4-body terms need n >= 4.
        assert!(matches!(
            sampler.sample(&request(3)),
            Err(SamplerError::Malformed(_))
        ));
    }
}
