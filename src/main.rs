//! Benchmark runner for the three multiplication paths.

use std::time::Instant;
use strassen::{Strassen, StrassenConfig, matmul_blocked, matmul_naive_ijk};

fn main() {
    println!("=== Strassen Multiplication Benchmark ===\n");

    let sizes = [256, 512, 1024];
    let iterations = 3;
    let config = StrassenConfig::default();

    let engine = match Strassen::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("failed to start engine: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "Cutoffs: block={}, recursion={}, tile={}\n",
        config.block_cutoff, config.recursion_cutoff, config.block_size
    );

    for &size in &sizes {
        println!("Matrix: {}×{}", size, size);
        println!("{}", "-".repeat(50));

        let a: Vec<i64> = (0..size * size).map(|i| (i % 100) as i64).collect();
        let b: Vec<i64> = (0..size * size).map(|i| (i % 100) as i64).collect();

        let results = [
            (
                "Naive (i-j-k)",
                bench_fn(&a, &b, size, iterations, matmul_naive_ijk::<i64>),
            ),
            (
                "Blocked",
                bench_fn(&a, &b, size, iterations, |a, b, c, n| {
                    matmul_blocked(a, b, c, n, config.block_size)
                }),
            ),
            (
                "Strassen",
                bench_fn(&a, &b, size, iterations, |a, b, c, n| {
                    if let Err(e) = engine.multiply(a, b, c, n) {
                        eprintln!("strassen failed: {e}");
                    }
                }),
            ),
        ];

        let baseline_time = results[0].1;
        for (i, (name, time_ms)) in results.iter().enumerate() {
            println!(
                "{}. {:16} {:10.2} ms  ({:.1}×)",
                i + 1,
                name,
                time_ms,
                baseline_time / time_ms
            );
        }
        println!();
    }
}

/// Average wall time in milliseconds, after one warmup run.
fn bench_fn<F>(a: &[i64], b: &[i64], size: usize, iterations: usize, f: F) -> f64
where
    F: Fn(&[i64], &[i64], &mut [i64], usize),
{
    let mut c = vec![0; size * size];
    f(a, b, &mut c, size);

    let mut total = 0.0;
    for _ in 0..iterations {
        let mut c = vec![0; size * size];
        let start = Instant::now();
        f(a, b, &mut c, size);
        total += start.elapsed().as_secs_f64();
    }

    total / iterations as f64 * 1000.0
}
