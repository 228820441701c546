//! Criterion benchmarks for the sequencing rules.
//!
//! Uses seeded random setup matrices to measure traversal and
//! enumeration cost independent of any real product data.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_sequence::models::SetupMatrix;
use u_sequence::sequencing::{Sequencer, SequencingConfig};

fn random_matrix(n: usize, seed: u64) -> SetupMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|_| (0..n).map(|_| rng.random_range(1.0..100.0)).collect())
        .collect();
    SetupMatrix::from_setup_times(rows).expect("square by construction")
}

fn bench_first_rule(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_rule");
    for n in [10, 50, 200] {
        let matrix = random_matrix(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &matrix, |b, m| {
            b.iter(|| Sequencer::first_rule_from(black_box(m), 0))
        });
    }
    group.finish();
}

fn bench_second_rule(c: &mut Criterion) {
    let mut group = c.benchmark_group("second_rule");
    group.sample_size(20);
    for n in [10, 30] {
        let matrix = random_matrix(n, 7);
        for parallel in [false, true] {
            let config = SequencingConfig::default().with_parallel(parallel);
            let id = BenchmarkId::new(if parallel { "parallel" } else { "sequential" }, n);
            group.bench_with_input(id, &matrix, |b, m| {
                b.iter(|| Sequencer::second_rule(black_box(m), &config))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_first_rule, bench_second_rule);
criterion_main!(benches);
