//! Combinations and Variations enumeration benchmark.
//!
//! Both delegate to a marker permutation (or run an odometer), so these
//! numbers are best read next to `permutations_bench`.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lexicomb::GenerateOption;
use lexicomb::generation::{Combinations, Variations};
use std::hint::black_box;

const CASES: [(usize, usize); 3] = [(10, 3), (16, 4), (20, 5)];

fn benchmark_combinations(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("combinations");

    for (upper, lower) in CASES {
        let label = format!("{upper}C{lower}");
        for option in [GenerateOption::WithoutRepetition, GenerateOption::WithRepetition] {
            let combinations = Combinations::with_option(0..upper, lower, option).unwrap();
            group.bench_with_input(
                BenchmarkId::new(option.to_string(), &label),
                &label,
                |bencher, _| {
                    bencher.iter(|| black_box(combinations.iter().count()));
                },
            );
        }
    }

    group.finish();
}

fn benchmark_variations(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("variations");

    for (upper, lower) in CASES {
        let label = format!("{upper}P{lower}");
        for option in [GenerateOption::WithoutRepetition, GenerateOption::WithRepetition] {
            let variations = Variations::with_option(0..upper, lower, option).unwrap();
            group.bench_with_input(
                BenchmarkId::new(option.to_string(), &label),
                &label,
                |bencher, _| {
                    bencher.iter(|| black_box(variations.iter().count()));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_combinations, benchmark_variations);
criterion_main!(benches);
