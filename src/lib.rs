//! Parallel Strassen matrix multiplication for integer matrices.
//!
//! Square power-of-two matrices are multiplied with a three-tier strategy
//! picked by size: the textbook triple loop for small orders, a
//! cache-blocked loop for mid-sized ones, and Strassen's seven-product
//! recursion above that. Each recursion level first reorders its operands
//! so every quadrant is contiguous in memory, then runs the seven
//! sub-products in parallel on a bounded rayon pool.
//!
//! ## Usage
//!
//! ```
//! use strassen::multiply;
//!
//! let a = vec![1i64; 256 * 256];
//! let b = vec![1i64; 256 * 256];
//! let mut c = vec![0i64; 256 * 256];
//!
//! multiply(&a, &b, &mut c, 256).unwrap();
//! assert!(c.iter().all(|&x| x == 256));
//! ```
//!
//! To tune the cutoffs or pin the worker count, build an engine:
//!
//! ```
//! use strassen::{Strassen, StrassenConfig};
//!
//! let config = StrassenConfig::default()
//!     .with_recursion_cutoff(32)
//!     .with_num_threads(4);
//! let engine = Strassen::new(config).unwrap();
//!
//! let a = vec![3i32; 128 * 128];
//! let b = vec![2i32; 128 * 128];
//! let mut c = vec![0i32; 128 * 128];
//!
//! engine.multiply(&a, &b, &mut c, 128).unwrap();
//! assert_eq!(c[0], 3 * 2 * 128);
//! ```
//!
//! ## What's inside
//!
//! - Naive ijk and cache-blocked base cases
//! - Quadrant-contiguous reorder transform
//! - 64-byte aligned scratch buffers
//! - 7-way fork-join per recursion level

pub mod blocked;
pub mod config;
pub mod element;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod threaded;

pub use blocked::tiled::matmul_blocked;
pub use config::{StrassenConfig, Tier};
pub use element::{DefaultElement, Element};
pub use engine::{Strassen, multiply_with_config};
pub use error::{Result, StrassenError};
pub use matrix::naive_ijk::matmul_naive_ijk;

/// Matrix multiply: C = A * B
///
/// Uses the default cutoffs and runs on the global rayon pool. Matrices are
/// row-major and square with order `size`, which must be a power of two.
///
/// # Errors
///
/// [`StrassenError::InvalidSize`] if `size` is zero or not a power of two,
/// [`StrassenError::DimensionMismatch`] if a slice isn't `size * size` long.
pub fn multiply<T: Element>(a: &[T], b: &[T], c: &mut [T], size: usize) -> Result<()> {
    multiply_with_config(a, b, c, size, &StrassenConfig::default())
}
