//! Parallel execution for the recursive step.
//!
//! Each Strassen level fans out into seven independent sub-products and
//! joins on all of them before combining. Tasks run on a bounded rayon
//! pool instead of one thread per recursive call, so deep recursion trees
//! queue work rather than spawning 7^depth threads.

pub mod fork_join;
pub mod pool;
