//! Cache-blocked GEMM.
//!
//! Middle tier of the dispatcher: used above the block cutoff, where the
//! naive loop starts missing cache, and at or below the recursion cutoff,
//! where Strassen's extra additions and allocations don't pay off yet.

pub mod tiled;
