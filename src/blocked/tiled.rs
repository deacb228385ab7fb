//! Cache-blocked integer GEMM.

use crate::element::Element;

/// Cache-blocked matrix multiplication: C = A * B.
///
/// The shared (k) and column (j) dimensions are cut into `block_size`
/// tiles. For each tile pair, every row of A's k-strip is multiplied
/// against the B tile and the partial sums are folded into the matching
/// strip of C before moving on. That keeps one B tile hot in cache instead
/// of walking whole columns of B per output cell.
///
/// Tiles are clipped at the matrix edge, so orders that are not a multiple
/// of `block_size` still get their trailing rows and columns computed.
///
/// # Panics
///
/// Panics if `block_size` is zero.
pub fn matmul_blocked<T: Element>(a: &[T], b: &[T], c: &mut [T], size: usize, block_size: usize) {
    assert!(block_size > 0, "block_size must be at least 1");

    c.fill(T::zero());

    for k0 in (0..size).step_by(block_size) {
        let k_end = (k0 + block_size).min(size);

        for j0 in (0..size).step_by(block_size) {
            let j_end = (j0 + block_size).min(size);

            for i in 0..size {
                let a_strip = &a[i * size + k0..i * size + k_end];
                let c_row = &mut c[i * size..(i + 1) * size];

                for j in j0..j_end {
                    let mut sum = c_row[j];
                    for (p, x) in a_strip.iter().enumerate() {
                        sum = sum.wrapping_add(&x.wrapping_mul(&b[(k0 + p) * size + j]));
                    }
                    c_row[j] = sum;
                }
            }
        }
    }
}
