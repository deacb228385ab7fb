use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use strassen::{Strassen, StrassenConfig, matmul_blocked, matmul_naive_ijk};

fn bench_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    group.sample_size(10);

    let config = StrassenConfig::default();
    let engine = Strassen::new(config).expect("worker pool");

    for size in [128usize, 256, 512] {
        let a: Vec<i64> = (0..size * size).map(|i| (i % 100) as i64).collect();
        let b: Vec<i64> = (0..size * size).map(|i| (i % 97) as i64).collect();
        let mut out = vec![0i64; size * size];

        group.bench_with_input(BenchmarkId::new("naive", size), &size, |bench, &n| {
            bench.iter(|| matmul_naive_ijk(black_box(&a), black_box(&b), &mut out, n))
        });
        group.bench_with_input(BenchmarkId::new("blocked", size), &size, |bench, &n| {
            bench.iter(|| matmul_blocked(black_box(&a), black_box(&b), &mut out, n, config.block_size))
        });
        group.bench_with_input(BenchmarkId::new("strassen", size), &size, |bench, &n| {
            bench.iter(|| engine.multiply(black_box(&a), black_box(&b), &mut out, n))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_paths);
criterion_main!(benches);
