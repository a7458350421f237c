use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use planar::{BitSliceMatrix, BitVec, BitwiseMut};
use rand::prelude::*;

const COLUMN_COUNT: usize = 15;

struct Parameters((f64, usize));

pub fn increment_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("BitSliceMatrix::increment_rows");
    for density in [0.5, 0.01] {
        for rows in [1000usize, 100_000usize, 1_000_000usize] {
            group.sample_size(10);
            let parameters = Parameters((density, rows));
            group.bench_with_input(
                BenchmarkId::from_parameter(&parameters),
                &parameters,
                |bencher, parameters| {
                    let (density, rows) = parameters.0;
                    bencher.iter_batched(
                        || {
                            let matrix = BitSliceMatrix::zeros(rows, COLUMN_COUNT)
                                .expect("nonzero shape");
                            (matrix, random_mask(rows, density))
                        },
                        |(mut matrix, mask)| matrix.increment_rows(&mask),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
    group.finish();
}

pub fn checked_increment_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("BitSliceMatrix::increment_rows_checked");
    for density in [0.5, 0.01] {
        for rows in [1000usize, 100_000usize, 1_000_000usize] {
            group.sample_size(10);
            let parameters = Parameters((density, rows));
            group.bench_with_input(
                BenchmarkId::from_parameter(&parameters),
                &parameters,
                |bencher, parameters| {
                    let (density, rows) = parameters.0;
                    bencher.iter_batched(
                        || {
                            let matrix = BitSliceMatrix::ones(rows, COLUMN_COUNT)
                                .expect("nonzero shape");
                            (matrix, random_mask(rows, density))
                        },
                        |(mut matrix, mask)| matrix.increment_rows_checked(&mask),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
    group.finish();
}

impl std::fmt::Display for Parameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (density, rows) = self.0;
        write!(f, "(density={density}, rows={rows})")?;
        Ok(())
    }
}

criterion_group!(benches, increment_benchmark, checked_increment_benchmark);
criterion_main!(benches);

fn random_mask(length: usize, density: f64) -> BitVec {
    let mut mask = BitVec::zeros(length).expect("nonzero length");
    let mut bits = std::iter::from_fn(move || Some(thread_rng().gen_bool(density)));
    for index in 0..length {
        mask.assign_index(index, bits.next().expect("boom"));
    }
    mask
}
