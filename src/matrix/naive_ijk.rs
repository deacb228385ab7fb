use crate::element::Element;

/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple-loop implementation. The innermost loop
/// walks B with stride `size`, so it only pays off while both operands
/// fit in cache. The engine uses it below the block cutoff, and the tests
/// use it as the reference result.
///
/// C is overwritten (C = A * B), not accumulated into.
///
/// # Arguments
///
/// * `a` - Matrix A (size × size), row-major
/// * `b` - Matrix B (size × size), row-major
/// * `c` - Matrix C (size × size), row-major
/// * `size` - Order of all three matrices
pub fn matmul_naive_ijk<T: Element>(a: &[T], b: &[T], c: &mut [T], size: usize) {
    for i in 0..size {
        let a_row = &a[i * size..(i + 1) * size];
        for j in 0..size {
            let mut sum = T::zero();
            for (p, x) in a_row.iter().enumerate() {
                sum = sum.wrapping_add(&x.wrapping_mul(&b[p * size + j]));
            }
            c[i * size + j] = sum;
        }
    }
}
