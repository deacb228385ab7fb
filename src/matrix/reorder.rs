//! Quadrant-contiguous layout transform.
//!
//! Before splitting, each recursion level rewrites its operands so that the
//! four quadrants land in four contiguous runs of `size * size / 4`
//! elements, in the order top-left, top-right, bottom-left, bottom-right:
//!
//! ```text
//!    original              reordered
//!    0  1  2  3      --->  0  1  4  5
//!    4  5  6  7            2  3  6  7
//!    8  9  10 11           8  9  12 13
//!    12 13 14 15           10 11 14 15
//! ```
//!
//! The top-left quadrant `(0 1 / 4 5)` now occupies positions 0..4, so the
//! recursive step can hand quadrants around as plain slices.

use crate::element::Element;

/// Rewrite `src` into `dst` with each quadrant stored contiguously.
///
/// # Panics
///
/// Panics if `size` is not a power of two of at least 4, if a slice is not
/// `size * size` long, or if a remapped index leaves the matrix.
///
/// # Example
///
/// ```
/// use strassen::matrix::reorder::reorder;
///
/// let src: Vec<i32> = (0..16).collect();
/// let mut dst = vec![0; 16];
///
/// reorder(&src, &mut dst, 4);
///
/// assert_eq!(dst, vec![0, 1, 4, 5,
///                      2, 3, 6, 7,
///                      8, 9, 12, 13,
///                      10, 11, 14, 15]);
/// ```
pub fn reorder<T: Element>(src: &[T], dst: &mut [T], size: usize) {
    assert!(
        size >= 4 && size.is_power_of_two(),
        "reorder: order must be a power of two >= 4, got {size}"
    );
    assert_eq!(src.len(), size * size, "reorder: source length");
    assert_eq!(dst.len(), size * size, "reorder: destination length");

    let half = size / 2;
    let quarter = size / 4;

    for i in 0..size {
        for j in 0..size {
            let si = (i / half) * half + (i % quarter) * 2 + j / half;
            let sj = j % half + half * ((i / quarter) % 2);
            assert!(
                si < size && sj < size,
                "reorder: remapped index ({si}, {sj}) out of range for order {size}"
            );
            dst[i * size + j] = src[si * size + sj];
        }
    }
}

/// Copy a contiguous `size/2 × size/2` quadrant into row-major `dst`,
/// with its top-left corner at (`row0`, `col0`).
pub fn write_quadrant<T: Element>(dst: &mut [T], quad: &[T], size: usize, row0: usize, col0: usize) {
    let half = size / 2;
    debug_assert_eq!(quad.len(), half * half);

    for (r, src_row) in quad.chunks_exact(half).enumerate() {
        let start = (row0 + r) * size + col0;
        dst[start..start + half].copy_from_slice(src_row);
    }
}
