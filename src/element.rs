//! Numeric element type accepted by the engine.

use num_traits::{PrimInt, WrappingAdd, WrappingMul, WrappingSub};
use std::fmt::Debug;

/// Fixed-width integer element.
///
/// Arithmetic wraps on overflow, so every multiplication path produces
/// bit-identical results. `Pod` lets scratch buffers start out as zeroed
/// memory.
pub trait Element:
    PrimInt + WrappingAdd + WrappingSub + WrappingMul + bytemuck::Pod + Send + Sync + Debug
{
}

impl<T> Element for T where
    T: PrimInt + WrappingAdd + WrappingSub + WrappingMul + bytemuck::Pod + Send + Sync + Debug
{
}

/// Element type used when callers don't pick one.
pub type DefaultElement = i64;
