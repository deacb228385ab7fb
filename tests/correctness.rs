use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strassen::matrix::aligned::AlignedBuf;
use strassen::matrix::ops::{add, subtract};
use strassen::matrix::reorder::{reorder, write_quadrant};
use strassen::threaded::fork_join::fork_join;
use strassen::{
    Strassen, StrassenConfig, StrassenError, Tier, matmul_blocked, matmul_naive_ijk, multiply,
    multiply_with_config,
};

fn assert_matrices_equal<T: PartialEq + std::fmt::Debug>(expected: &[T], actual: &[T], name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for i in 0..expected.len() {
        assert!(
            expected[i] == actual[i],
            "{}: mismatch at index {}: expected {:?}, got {:?}",
            name,
            i,
            expected[i],
            actual[i]
        );
    }
}

fn random_matrix(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size * size).map(|_| rng.gen_range(-100..100)).collect()
}

fn identity(size: usize) -> Vec<i64> {
    let mut m = vec![0; size * size];
    for i in 0..size {
        m[i * size + i] = 1;
    }
    m
}

fn naive(a: &[i64], b: &[i64], size: usize) -> Vec<i64> {
    let mut c = vec![0; size * size];
    matmul_naive_ijk(a, b, &mut c, size);
    c
}

/// Forces every level above order 2 through the recursive step.
fn forced_recursion() -> StrassenConfig {
    StrassenConfig::default()
        .with_block_cutoff(2)
        .with_recursion_cutoff(2)
}

// ============================================================
// Small matrix tests
// ============================================================

#[test]
fn test_1x1_multiply() {
    let mut c = vec![0i64];
    multiply(&[5i64], &[3], &mut c, 1).unwrap();
    assert_eq!(c, vec![15]);
}

#[test]
fn test_2x2_multiply() {
    let a = vec![1i64, 2, 3, 4];
    let b = vec![5i64, 6, 7, 8];
    let mut c = vec![0; 4];

    multiply(&a, &b, &mut c, 2).unwrap();

    assert_eq!(c, vec![19, 22, 43, 50]);
}

#[test]
fn test_identity_4x4_returns_b() {
    let b: Vec<i64> = (1..=16).collect();
    let mut c = vec![0; 16];

    multiply_with_config(&identity(4), &b, &mut c, 4, &forced_recursion()).unwrap();

    assert_matrices_equal(&b, &c, "identity_4x4");
}

// ============================================================
// Identity law across all tiers
// ============================================================

#[test]
fn test_identity_law() {
    let test_sizes = [1, 4, 16, 32, 64, 128, 256, 512];

    for size in test_sizes {
        let a = random_matrix(size, size as u64);
        let unit = identity(size);

        let mut left = vec![0; size * size];
        let mut right = vec![0; size * size];

        multiply(&unit, &a, &mut left, size).unwrap();
        multiply(&a, &unit, &mut right, size).unwrap();

        assert_matrices_equal(&a, &left, &format!("I*A_size_{}", size));
        assert_matrices_equal(&a, &right, &format!("A*I_size_{}", size));
    }
}

// ============================================================
// Path agreement (naive / blocked / recursive)
// ============================================================

#[test]
fn test_forced_recursion_8x8() {
    let size = 8;
    let a = random_matrix(size, 1);
    let b = random_matrix(size, 2);

    let mut c = vec![0; size * size];
    multiply_with_config(&a, &b, &mut c, size, &forced_recursion()).unwrap();

    assert_matrices_equal(&naive(&a, &b, size), &c, "forced_recursion_8x8");
}

#[test]
fn test_all_paths_agree() {
    let configs = [
        ("naive_only", StrassenConfig::default().with_block_cutoff(usize::MAX)),
        (
            "blocked_only",
            StrassenConfig::default()
                .with_block_cutoff(0)
                .with_recursion_cutoff(usize::MAX)
                .with_block_size(8),
        ),
        ("recursive", forced_recursion()),
        (
            "mixed_uneven_tiles",
            StrassenConfig::default()
                .with_block_cutoff(4)
                .with_recursion_cutoff(8)
                .with_block_size(3),
        ),
    ];

    for size in [4, 8, 16, 32, 64] {
        let a = random_matrix(size, 10 + size as u64);
        let b = random_matrix(size, 20 + size as u64);
        let expected = naive(&a, &b, size);

        for (name, config) in &configs {
            let mut c = vec![0; size * size];
            multiply_with_config(&a, &b, &mut c, size, config).unwrap();
            assert_matrices_equal(&expected, &c, &format!("{}_size_{}", name, size));
        }
    }
}

#[test]
fn test_512_default_cutoffs() {
    let size = 512;
    let config = StrassenConfig::default();
    assert_eq!(config.tier_for(size), Tier::Recursive);
    assert_eq!(config.tier_for(size / 4), Tier::Blocked);

    let a = random_matrix(size, 512);
    let b = random_matrix(size, 1024);

    let mut c = vec![0; size * size];
    multiply(&a, &b, &mut c, size).unwrap();

    assert_matrices_equal(&naive(&a, &b, size), &c, "default_512");
}

// ============================================================
// Base-case multipliers
// ============================================================

#[test]
fn test_blocked_tile_remainder() {
    let test_cases = [(5, 4), (7, 4), (33, 32), (64, 32), (17, 1), (10, 64)];

    for (size, block_size) in test_cases {
        let a = random_matrix(size, 3);
        let b = random_matrix(size, 4);

        let mut c = vec![0; size * size];
        matmul_blocked(&a, &b, &mut c, size, block_size);

        assert_matrices_equal(
            &naive(&a, &b, size),
            &c,
            &format!("blocked_{}_tile_{}", size, block_size),
        );
    }
}

#[test]
fn test_output_overwritten_not_accumulated() {
    let size = 32;
    let a = random_matrix(size, 5);
    let b = random_matrix(size, 6);
    let expected = naive(&a, &b, size);

    let mut c_naive = vec![7; size * size];
    let mut c_blocked = vec![7; size * size];
    let mut c_strassen = vec![7; size * size];

    matmul_naive_ijk(&a, &b, &mut c_naive, size);
    matmul_blocked(&a, &b, &mut c_blocked, size, 8);
    multiply_with_config(&a, &b, &mut c_strassen, size, &forced_recursion()).unwrap();

    assert_matrices_equal(&expected, &c_naive, "overwrite_naive");
    assert_matrices_equal(&expected, &c_blocked, "overwrite_blocked");
    assert_matrices_equal(&expected, &c_strassen, "overwrite_strassen");
}

// ============================================================
// Element types and wrapping arithmetic
// ============================================================

#[test]
fn test_wrapping_overflow_matches_naive() {
    let size = 16;
    let mut rng = StdRng::seed_from_u64(99);
    let a: Vec<i8> = (0..size * size).map(|_| rng.gen_range(-128..=127)).collect();
    let b: Vec<i8> = (0..size * size).map(|_| rng.gen_range(-128..=127)).collect();

    let mut c_naive = vec![0i8; size * size];
    let mut c_strassen = vec![0i8; size * size];

    matmul_naive_ijk(&a, &b, &mut c_naive, size);
    multiply_with_config(&a, &b, &mut c_strassen, size, &forced_recursion()).unwrap();

    assert_matrices_equal(&c_naive, &c_strassen, "wrapping_i8");
}

#[test]
fn test_other_element_types() {
    let size = 16;

    let a32: Vec<i32> = (0..size * size).map(|i| (i % 13) as i32 - 6).collect();
    let b32: Vec<i32> = (0..size * size).map(|i| (i % 7) as i32 - 3).collect();
    let mut expected32 = vec![0; size * size];
    let mut c32 = vec![0; size * size];
    matmul_naive_ijk(&a32, &b32, &mut expected32, size);
    multiply_with_config(&a32, &b32, &mut c32, size, &forced_recursion()).unwrap();
    assert_matrices_equal(&expected32, &c32, "i32");

    let a16: Vec<u16> = (0..size * size).map(|i| (i % 11) as u16).collect();
    let b16: Vec<u16> = (0..size * size).map(|i| (i % 5) as u16).collect();
    let mut expected16 = vec![0; size * size];
    let mut c16 = vec![0; size * size];
    matmul_naive_ijk(&a16, &b16, &mut expected16, size);
    multiply_with_config(&a16, &b16, &mut c16, size, &forced_recursion()).unwrap();
    assert_matrices_equal(&expected16, &c16, "u16");
}

#[test]
fn test_add_subtract_wrap() {
    let a = [i8::MAX, -5, i8::MIN];
    let b = [1i8, 3, 1];
    let mut out = [0i8; 3];

    add(&a, &b, &mut out);
    assert_eq!(out, [i8::MIN, -2, -127]);

    subtract(&a, &b, &mut out);
    assert_eq!(out, [126, -8, i8::MAX]);
}

// ============================================================
// Reorder transform
// ============================================================

#[test]
fn test_reorder_4x4_layout() {
    let src: Vec<i64> = (0..16).collect();
    let mut dst = vec![0; 16];

    reorder(&src, &mut dst, 4);

    assert_eq!(dst, vec![0, 1, 4, 5, 2, 3, 6, 7, 8, 9, 12, 13, 10, 11, 14, 15]);
}

#[test]
fn test_reorder_quadrants_contiguous() {
    for size in [4, 8, 16, 64] {
        let half = size / 2;
        let src = random_matrix(size, 7);
        let mut dst = vec![0; size * size];

        reorder(&src, &mut dst, size);

        let corners = [(0, 0), (0, half), (half, 0), (half, half)];
        for (q, (row0, col0)) in corners.into_iter().enumerate() {
            let expected: Vec<i64> = (0..half)
                .flat_map(|r| {
                    let start = (row0 + r) * size + col0;
                    src[start..start + half].to_vec()
                })
                .collect();
            let block = &dst[q * half * half..(q + 1) * half * half];

            assert_matrices_equal(&expected, block, &format!("quadrant_{}_size_{}", q, size));
        }
    }
}

#[test]
fn test_reorder_is_bijection() {
    for size in [4, 8, 32] {
        let src: Vec<i64> = (0..(size * size) as i64).collect();
        let mut dst = vec![0; size * size];

        reorder(&src, &mut dst, size);
        dst.sort_unstable();

        assert_eq!(src, dst, "reorder not a permutation at order {}", size);
    }
}

#[test]
fn test_write_quadrants_restore_layout() {
    let size = 16;
    let quad = size * size / 4;
    let src = random_matrix(size, 8);
    let mut reordered = vec![0; size * size];
    let mut restored = vec![0; size * size];

    reorder(&src, &mut reordered, size);
    let half = size / 2;
    for (q, (row0, col0)) in [(0, 0), (0, half), (half, 0), (half, half)].into_iter().enumerate() {
        write_quadrant(&mut restored, &reordered[q * quad..(q + 1) * quad], size, row0, col0);
    }

    assert_matrices_equal(&src, &restored, "write_quadrant");
}

#[test]
#[should_panic(expected = "power of two >= 4")]
fn test_reorder_rejects_order_2() {
    let src = [1i64, 2, 3, 4];
    let mut dst = [0i64; 4];
    reorder(&src, &mut dst, 2);
}

// ============================================================
// Parallel execution
// ============================================================

#[test]
fn test_engine_matches_naive() {
    let engine = Strassen::new(
        StrassenConfig::default()
            .with_block_cutoff(8)
            .with_recursion_cutoff(16)
            .with_num_threads(3),
    )
    .unwrap();
    assert_eq!(engine.config().recursion_cutoff, 16);

    for size in [1, 2, 16, 32, 128] {
        let a = random_matrix(size, 30);
        let b = random_matrix(size, 31);

        let mut c = vec![0; size * size];
        engine.multiply(&a, &b, &mut c, size).unwrap();

        assert_matrices_equal(&naive(&a, &b, size), &c, &format!("engine_size_{}", size));
    }
}

#[test]
fn test_repeated_multiply_is_identical() {
    let engine = Strassen::new(forced_recursion().with_num_threads(4)).unwrap();
    let size = 64;
    let a = random_matrix(size, 40);
    let b = random_matrix(size, 41);

    let mut first = vec![0; size * size];
    let mut second = vec![0; size * size];
    engine.multiply(&a, &b, &mut first, size).unwrap();
    engine.multiply(&a, &b, &mut second, size).unwrap();

    assert_matrices_equal(&first, &second, "repeat");
}

#[test]
fn test_single_worker_pool() {
    let engine = Strassen::new(forced_recursion().with_num_threads(1)).unwrap();
    let size = 32;
    let a = random_matrix(size, 50);
    let b = random_matrix(size, 51);

    let mut c = vec![0; size * size];
    engine.multiply(&a, &b, &mut c, size).unwrap();

    assert_matrices_equal(&naive(&a, &b, size), &c, "single_worker");
}

#[test]
fn test_fork_join_fills_every_slot() {
    let lhs: Vec<i64> = (1..=7).collect();
    let rhs: Vec<i64> = (10..17).collect();
    let mut out: Vec<AlignedBuf<i64>> = (0..7).map(|_| AlignedBuf::zeroed(4)).collect();

    fork_join(&lhs, &rhs, &mut out, |l, r, o| o.fill(l * r));

    for (i, buf) in out.iter().enumerate() {
        let expected = lhs[i] * rhs[i];
        assert!(buf.iter().all(|&x| x == expected), "slot {} not written", i);
    }
}

#[test]
#[should_panic(expected = "task failed")]
fn test_fork_join_propagates_panic() {
    let inputs = [0u8; 7];
    let mut out = [0u8; 7];

    fork_join(&inputs, &inputs, &mut out, |_, _, o| {
        if *o == 0 {
            panic!("task failed");
        }
    });
}

// ============================================================
// Precondition errors
// ============================================================

#[test]
fn test_invalid_sizes_rejected() {
    for size in [0usize, 3, 6, 12, 100] {
        let a = vec![1i64; size * size];
        let b = vec![1i64; size * size];
        let mut c = vec![0i64; size * size];

        let err = multiply(&a, &b, &mut c, size).unwrap_err();
        assert!(
            matches!(err, StrassenError::InvalidSize(s) if s == size),
            "size {}: unexpected error {:?}",
            size,
            err
        );
    }
}

#[test]
fn test_dimension_mismatch_rejected() {
    let a = vec![1i64; 16];
    let b = vec![1i64; 15];
    let mut c = vec![0i64; 16];

    let err = multiply(&a, &b, &mut c, 4).unwrap_err();
    match err {
        StrassenError::DimensionMismatch {
            name,
            expected,
            actual,
            ..
        } => {
            assert_eq!(name, "B");
            assert_eq!(expected, 16);
            assert_eq!(actual, 15);
        }
        other => panic!("unexpected error {:?}", other),
    }

    let mut short_c = vec![0i64; 8];
    assert!(matches!(
        multiply(&a, &a, &mut short_c, 4),
        Err(StrassenError::DimensionMismatch { name: "C", .. })
    ));
}

#[test]
fn test_invalid_config_rejected() {
    assert!(matches!(
        Strassen::new(StrassenConfig::default().with_block_size(0)),
        Err(StrassenError::InvalidConfig(_))
    ));

    let a = vec![1i64; 16];
    let mut c = vec![0i64; 16];
    let config = StrassenConfig::default().with_recursion_cutoff(1);
    assert!(matches!(
        multiply_with_config(&a, &a, &mut c, 4, &config),
        Err(StrassenError::InvalidConfig(_))
    ));
}
