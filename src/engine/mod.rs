//! Size-adaptive Strassen engine.
//!
//! ```text
//!    (a b) * (e f) = (r s)
//!    (c d)   (g h)   (t u)
//! ```
//!
//! Above the recursion cutoff, both operands are reordered so their
//! quadrants are contiguous, seven half-size products are formed from sums
//! and differences of quadrants, multiplied in parallel, and recombined into
//! the four quadrants of C. Below it the naive or blocked multiply takes over.

mod term;

use crate::blocked::tiled::matmul_blocked;
use crate::config::{StrassenConfig, Tier};
use crate::element::Element;
use crate::error::{Result, StrassenError};
use crate::matrix::aligned::AlignedBuf;
use crate::matrix::naive_ijk::matmul_naive_ijk;
use crate::matrix::ops::{add, subtract};
use crate::matrix::reorder::{reorder, write_quadrant};
use crate::threaded::fork_join::fork_join;
use crate::threaded::pool::build_pool;
use rayon::ThreadPool;
use term::Term;

/// Strassen multiplier with its own bounded worker pool.
///
/// # Example
///
/// ```
/// use strassen::{Strassen, StrassenConfig};
///
/// let engine = Strassen::new(StrassenConfig::default().with_num_threads(2)).unwrap();
///
/// let a = vec![1i64; 256 * 256];
/// let b = vec![2i64; 256 * 256];
/// let mut c = vec![0i64; 256 * 256];
///
/// engine.multiply(&a, &b, &mut c, 256).unwrap();
/// assert!(c.iter().all(|&x| x == 512));
/// ```
pub struct Strassen {
    config: StrassenConfig,
    pool: ThreadPool,
}

impl Strassen {
    /// Validate `config` and start its worker pool.
    pub fn new(config: StrassenConfig) -> Result<Self> {
        config.validate()?;
        let pool = build_pool(config.num_threads)?;
        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &StrassenConfig {
        &self.config
    }

    /// C = A * B for square row-major matrices of order `size`.
    ///
    /// `size` must be a non-zero power of two and every slice must hold
    /// `size * size` elements; both are checked before any work starts.
    /// The contents of `c` are unspecified if this returns an error.
    pub fn multiply<T: Element>(&self, a: &[T], b: &[T], c: &mut [T], size: usize) -> Result<()> {
        check_operands(a, b, c, size)?;
        let config = &self.config;
        self.pool.install(|| run(config, a, b, c, size));
        Ok(())
    }
}

/// Same as [`Strassen::multiply`] with explicit tunables, scheduled on the
/// global rayon pool. `config.num_threads` is ignored here.
pub fn multiply_with_config<T: Element>(
    a: &[T],
    b: &[T],
    c: &mut [T],
    size: usize,
    config: &StrassenConfig,
) -> Result<()> {
    config.validate()?;
    check_operands(a, b, c, size)?;
    run(config, a, b, c, size);
    Ok(())
}

fn check_operands<T>(a: &[T], b: &[T], c: &[T], size: usize) -> Result<()> {
    if size == 0 || !size.is_power_of_two() {
        return Err(StrassenError::InvalidSize(size));
    }
    let expected = size
        .checked_mul(size)
        .ok_or(StrassenError::InvalidSize(size))?;

    for (name, actual) in [("A", a.len()), ("B", b.len()), ("C", c.len())] {
        if actual != expected {
            return Err(StrassenError::DimensionMismatch {
                name,
                size,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

fn run<T: Element>(config: &StrassenConfig, a: &[T], b: &[T], c: &mut [T], size: usize) {
    log::debug!(
        "multiplying order {} via {:?} path",
        size,
        config.tier_for(size)
    );
    multiply_recursive(config, a, b, c, size);
}

fn multiply_recursive<T: Element>(config: &StrassenConfig, a: &[T], b: &[T], c: &mut [T], size: usize) {
    match config.tier_for(size) {
        Tier::Naive => matmul_naive_ijk(a, b, c, size),
        Tier::Blocked => matmul_blocked(a, b, c, size, config.block_size),
        Tier::Recursive => strassen_step(config, a, b, c, size),
    }
}

/// Split a quadrant-contiguous matrix into its four quadrant views.
fn quadrants<T>(m: &[T], quad: usize) -> [&[T]; 4] {
    let (top, bottom) = m.split_at(2 * quad);
    let (tl, tr) = top.split_at(quad);
    let (bl, br) = bottom.split_at(quad);
    [tl, tr, bl, br]
}

fn strassen_step<T: Element>(config: &StrassenConfig, a: &[T], b: &[T], c: &mut [T], size: usize) {
    let half = size / 2;
    let quad = half * half;
    log::trace!("strassen frame: order {} -> 7 x order {}", size, half);

    let mut a_re = AlignedBuf::<T>::zeroed(size * size);
    let mut b_re = AlignedBuf::<T>::zeroed(size * size);
    reorder(a, &mut a_re, size);
    reorder(b, &mut b_re, size);

    let [qa, qb, qc, qd] = quadrants(&a_re, quad);
    let [qe, qf, qg, qh] = quadrants(&b_re, quad);

    let lhs = [
        Term::Borrowed(qa),
        Term::sum(qa, qb),
        Term::sum(qc, qd),
        Term::Borrowed(qd),
        Term::sum(qa, qd),
        Term::difference(qb, qd),
        Term::difference(qa, qc),
    ];
    let rhs = [
        Term::difference(qf, qh),
        Term::Borrowed(qh),
        Term::Borrowed(qe),
        Term::difference(qg, qe),
        Term::sum(qe, qh),
        Term::sum(qg, qh),
        Term::sum(qe, qf),
    ];
    let mut products: [AlignedBuf<T>; 7] = std::array::from_fn(|_| AlignedBuf::zeroed(quad));

    fork_join(&lhs, &rhs, &mut products, |l, r, p| {
        multiply_recursive::<T>(config, l, r, p, half)
    });

    let [p1, p2, p3, p4, p5, p6, p7] = &products;
    let mut t1 = AlignedBuf::<T>::zeroed(quad);
    let mut t2 = AlignedBuf::<T>::zeroed(quad);
    let mut r = AlignedBuf::<T>::zeroed(quad);
    let mut s = AlignedBuf::<T>::zeroed(quad);
    let mut t = AlignedBuf::<T>::zeroed(quad);
    let mut u = AlignedBuf::<T>::zeroed(quad);

    // r = p5 + p4 - p2 + p6
    add(p5, p4, &mut t1);
    subtract(&t1, p2, &mut t2);
    add(&t2, p6, &mut r);

    // s = p1 + p2
    add(p1, p2, &mut s);

    // t = p3 + p4
    add(p3, p4, &mut t);

    // u = p5 + p1 - p3 - p7
    add(p5, p1, &mut t1);
    subtract(&t1, p3, &mut t2);
    subtract(&t2, p7, &mut u);

    write_quadrant(c, &r, size, 0, 0);
    write_quadrant(c, &s, size, 0, half);
    write_quadrant(c, &t, size, half, 0);
    write_quadrant(c, &u, size, half, half);
}
