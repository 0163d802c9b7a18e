//! Property-based tests for the variation operators.
//!
//! Every combination/mutation output must keep the parent length and
//! the ±1 alphabet, for all parents and rates, not just the fixtures
//! in the unit tests.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use merit_core::Sequence;
use merit_mts::operators::{crossover, mutate};

fn arb_spins(n: usize) -> impl Strategy<Value = Vec<i8>> {
    prop::collection::vec(prop_oneof![Just(1i8), Just(-1i8)], n..=n)
}

proptest! {
    #[test]
    fn crossover_preserves_length_and_alphabet(
        n in 2usize..=24,
        seed in any::<u64>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let a = Sequence::random(n, &mut rng).unwrap();
        let b = Sequence::random(n, &mut rng).unwrap();
        let child = crossover(&a, &b, &mut rng).unwrap();
        prop_assert_eq!(child.len(), n);
        prop_assert!(child.spins().iter().all(|&s| s == 1 || s == -1));
    }

    #[test]
    fn crossover_child_agrees_with_a_parent_at_every_position(
        spins_a in arb_spins(12),
        spins_b in arb_spins(12),
        seed in any::<u64>(),
    ) {
        let a = Sequence::from_spins(spins_a).unwrap();
        let b = Sequence::from_spins(spins_b).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);
        let child = crossover(&a, &b, &mut rng).unwrap();
        for i in 0..child.len() {
            let c = child.get(i).unwrap();
            prop_assert!(c == a.get(i).unwrap() || c == b.get(i).unwrap());
        }
    }

    #[test]
    fn mutation_preserves_length_and_alphabet(
        n in 1usize..=24,
        rate in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let seq = Sequence::random(n, &mut rng).unwrap();
        let mutated = mutate(&seq, rate, &mut rng);
        prop_assert_eq!(mutated.len(), n);
        prop_assert!(mutated.spins().iter().all(|&s| s == 1 || s == -1));
    }
}
