//! Elementwise combinators over flat matrices.

use crate::element::Element;

/// out = a + b, wrapping on overflow.
///
/// All three slices must have the same length.
pub fn add<T: Element>(a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());

    for ((o, x), y) in out.iter_mut().zip(a).zip(b) {
        *o = x.wrapping_add(y);
    }
}

/// out = a - b, wrapping on overflow.
pub fn subtract<T: Element>(a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());

    for ((o, x), y) in out.iter_mut().zip(a).zip(b) {
        *o = x.wrapping_sub(y);
    }
}
