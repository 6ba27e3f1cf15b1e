use bsmat::{Engine, EngineConfig, SparseMatrix};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZE: usize = 256;

fn random_values(seed: u64, cells: usize, density: u32) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..cells)
        .map(|_| (rng.gen_range(0..1000) < density) as u8)
        .collect()
}

fn swap_rows_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap_rows");
    let values = random_values(1, SIZE * SIZE, 20);

    for engine in Engine::ALL {
        let mut m = EngineConfig::new(engine)
            .matrix_from_values(SIZE, SIZE, &values)
            .unwrap();
        group.bench_function(BenchmarkId::from_parameter(engine), |b| {
            let mut i = 0;
            b.iter(|| {
                m.swap_rows(black_box(i % SIZE), black_box((i * 7 + 3) % SIZE))
                    .unwrap();
                i += 1;
            });
        });
    }

    group.finish();
}

fn add_rows_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_rows");
    let values = random_values(2, SIZE * SIZE, 20);

    for engine in Engine::ALL {
        let mut m = EngineConfig::new(engine)
            .matrix_from_values(SIZE, SIZE, &values)
            .unwrap();
        group.bench_function(BenchmarkId::from_parameter(engine), |b| {
            let mut i = 0;
            b.iter(|| {
                m.add_rows(black_box(i % SIZE), black_box((i + 1) % SIZE), i % SIZE)
                    .unwrap();
                i += 1;
            });
        });
    }

    group.finish();
}

fn mul_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");
    group.sample_size(10);
    let n = 64;
    let a_values = random_values(3, n * n, 50);
    let b_values = random_values(4, n * n, 50);

    for engine in Engine::ALL {
        let config = EngineConfig::new(engine);
        let a = config.matrix_from_values(n, n, &a_values).unwrap();
        let b = config.matrix_from_values(n, n, &b_values).unwrap();
        let mut out = config.new_matrix(n, n);
        group.bench_function(BenchmarkId::from_parameter(engine), |bench| {
            bench.iter(|| out.mul(black_box(&a), black_box(&b)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    swap_rows_benchmark,
    add_rows_benchmark,
    mul_benchmark
);
criterion_main!(benches);
