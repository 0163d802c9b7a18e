//! Energy-kernel benchmark.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use merit_core::{Sequence, energy};

fn bench_energy(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0xC0FFEE);
    let mut group = c.benchmark_group("labs_energy");
    for n in [16usize, 32, 64, 128] {
        let seq = Sequence::random(n, &mut rng).unwrap();
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| energy(black_box(&seq)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_energy);
criterion_main!(benches);
