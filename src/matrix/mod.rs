//! Flat matrix building blocks.
//!
//! Scratch allocation, elementwise combinators, the naive baseline and
//! the quadrant layout transform used by the recursive engine.

pub mod aligned;
pub mod naive_ijk;
pub mod ops;
pub mod reorder;
