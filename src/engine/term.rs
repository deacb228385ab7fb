//! Operands of the seven sub-products.

use crate::element::Element;
use crate::matrix::aligned::AlignedBuf;
use crate::matrix::ops::{add, subtract};
use std::ops::Deref;

/// One A-term or B-term of a recursion frame.
///
/// Four of the fourteen terms are plain quadrants and stay borrowed views
/// into the reordered operand; the rest are sums or differences owned by
/// the frame and freed when it returns.
pub(crate) enum Term<'a, T: Element> {
    Borrowed(&'a [T]),
    Owned(AlignedBuf<T>),
}

impl<T: Element> Term<'_, T> {
    pub(crate) fn sum(x: &[T], y: &[T]) -> Self {
        let mut buf = AlignedBuf::zeroed(x.len());
        add(x, y, &mut buf);
        Term::Owned(buf)
    }

    pub(crate) fn difference(x: &[T], y: &[T]) -> Self {
        let mut buf = AlignedBuf::zeroed(x.len());
        subtract(x, y, &mut buf);
        Term::Owned(buf)
    }
}

impl<T: Element> Deref for Term<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        match self {
            Term::Borrowed(view) => *view,
            Term::Owned(buf) => &buf[..],
        }
    }
}
