//! Cache-line aligned scratch buffers.

use crate::element::Element;
use std::alloc::{self, Layout};
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

/// Alignment of every scratch buffer, in bytes.
pub const CACHE_LINE: usize = 64;

/// Owned, zero-initialised buffer aligned to [`CACHE_LINE`].
///
/// Allocation failure is not reported: it goes through
/// [`std::alloc::handle_alloc_error`] and aborts, since the algorithm can't
/// make progress without its working memory.
pub struct AlignedBuf<T: Element> {
    ptr: NonNull<T>,
    len: usize,
}

// SAFETY: `AlignedBuf` uniquely owns its allocation, like `Vec<T>`.
unsafe impl<T: Element> Send for AlignedBuf<T> {}
// SAFETY: shared access only hands out `&[T]`.
unsafe impl<T: Element> Sync for AlignedBuf<T> {}

impl<T: Element> AlignedBuf<T> {
    /// Allocate `len` zeroed elements.
    pub fn zeroed(len: usize) -> Self {
        if len == 0 {
            return Self {
                ptr: NonNull::dangling(),
                len: 0,
            };
        }

        let layout = Self::layout(len);
        // SAFETY: `layout` has non-zero size because `len > 0` and
        // `Element` types are never zero-sized.
        let raw = unsafe { alloc::alloc_zeroed(layout) };
        let ptr = match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => ptr,
            None => alloc::handle_alloc_error(layout),
        };

        Self { ptr, len }
    }

    /// Allocate a copy of `src`.
    pub fn from_slice(src: &[T]) -> Self {
        let mut buf = Self::zeroed(src.len());
        buf.copy_from_slice(src);
        buf
    }

    fn layout(len: usize) -> Layout {
        Layout::array::<T>(len)
            .and_then(|layout| layout.align_to(CACHE_LINE))
            .unwrap_or_else(|_| panic!("scratch buffer of {len} elements overflows isize"))
    }
}

impl<T: Element> Deref for AlignedBuf<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        // SAFETY: `ptr` is valid for `len` initialised elements (or dangling
        // with `len == 0`).
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: Element> DerefMut for AlignedBuf<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        // SAFETY: as in `deref`, and `&mut self` guarantees exclusivity.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: Element> Drop for AlignedBuf<T> {
    fn drop(&mut self) {
        if self.len == 0 {
            return;
        }
        // SAFETY: allocated in `zeroed` with this exact layout.
        unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), Self::layout(self.len)) };
    }
}

impl<T: Element> std::fmt::Debug for AlignedBuf<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
