//! Variation operators.
//!
//! Both operators preserve sequence length and the ±1 alphabet by
//! construction; crossover additionally demands equal parent lengths.

use rand::Rng;

use merit_core::{CoreError, CoreResult, Sequence};

/// One-point crossover.
///
/// Copies `a`'s spins up to a random point in 1..N and `b`'s from the
/// point on. The child has the parents' length and alphabet.
pub fn crossover<R: Rng + ?Sized>(
    a: &Sequence,
    b: &Sequence,
    rng: &mut R,
) -> CoreResult<Sequence> {
    if a.len() != b.len() {
        return Err(CoreError::LengthMismatch {
            expected: a.len(),
            got: b.len(),
        });
    }
    let point = rng.gen_range(1..a.len());
    let mut spins = Vec::with_capacity(a.len());
    spins.extend_from_slice(&a.spins()[..point]);
    spins.extend_from_slice(&b.spins()[point..]);
    Sequence::from_spins(spins)
}

/// Independent per-bit mutation.
///
/// Each spin flips with probability `rate`; `rate` must already be
/// validated to lie in [0, 1].
pub fn mutate<R: Rng + ?Sized>(seq: &Sequence, rate: f64, rng: &mut R) -> Sequence {
    let mut out = seq.clone();
    for i in 0..seq.len() {
        if rng.gen_bool(rate) {
            out = out.flipped(i);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn crossover_child_is_prefix_plus_suffix() {
        let a: Sequence = "++++++".parse().unwrap();
        let b: Sequence = "------".parse().unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..20 {
            let child = crossover(&a, &b, &mut rng).unwrap();
            assert_eq!(child.len(), 6);
            let spins = child.spins();
            // A single sign change: +…+ then -…-
            let boundary = spins.iter().position(|&s| s == -1).unwrap();
            assert!(boundary >= 1);
            assert!(spins[..boundary].iter().all(|&s| s == 1));
            assert!(spins[boundary..].iter().all(|&s| s == -1));
        }
    }

    #[test]
    fn crossover_rejects_mismatched_lengths() {
        let a: Sequence = "++++".parse().unwrap();
        let b: Sequence = "---".parse().unwrap();
        let mut rng = SmallRng::seed_from_u64(2);
        assert!(matches!(
            crossover(&a, &b, &mut rng),
            Err(CoreError::LengthMismatch { expected: 4, got: 3 })
        ));
    }

    #[test]
    fn mutation_rate_extremes() {
        let seq: Sequence = "+-+-+-".parse().unwrap();
        let mut rng = SmallRng::seed_from_u64(3);
        assert_eq!(mutate(&seq, 0.0, &mut rng), seq);
        assert_eq!(mutate(&seq, 1.0, &mut rng), seq.negated());
    }
}
