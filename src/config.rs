//! Tunables for the size-adaptive dispatcher.

use crate::error::{Result, StrassenError};

/// Orders at or below this use the naive ijk multiply.
pub const DEFAULT_BLOCK_CUTOFF: usize = 64;
/// Orders at or below this (and above the block cutoff) use blocked multiply.
pub const DEFAULT_RECURSION_CUTOFF: usize = 128;
/// Tile edge for the blocked multiply.
pub const DEFAULT_BLOCK_SIZE: usize = 32;

/// Which algorithm handles a given matrix order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Naive,
    Blocked,
    Recursive,
}

/// Engine configuration.
///
/// The cutoffs have to be profiled per machine; the defaults were picked on
/// a processor with a 64-byte cache line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrassenConfig {
    pub block_cutoff: usize,
    pub recursion_cutoff: usize,
    pub block_size: usize,
    /// Worker count for a dedicated pool. `None` means one per CPU.
    pub num_threads: Option<usize>,
}

impl Default for StrassenConfig {
    fn default() -> Self {
        Self {
            block_cutoff: DEFAULT_BLOCK_CUTOFF,
            recursion_cutoff: DEFAULT_RECURSION_CUTOFF,
            block_size: DEFAULT_BLOCK_SIZE,
            num_threads: None,
        }
    }
}

impl StrassenConfig {
    pub fn with_block_cutoff(mut self, block_cutoff: usize) -> Self {
        self.block_cutoff = block_cutoff;
        self
    }

    pub fn with_recursion_cutoff(mut self, recursion_cutoff: usize) -> Self {
        self.recursion_cutoff = recursion_cutoff;
        self
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// Reject settings the engine can't run with.
    ///
    /// The recursion cutoff must be at least 2: a recursive step on an order-2
    /// matrix would ask the reorder transform for quarter rows of width zero.
    pub fn validate(&self) -> Result<()> {
        if self.block_size == 0 {
            return Err(StrassenError::InvalidConfig(
                "block_size must be at least 1".to_string(),
            ));
        }
        if self.recursion_cutoff < 2 {
            return Err(StrassenError::InvalidConfig(format!(
                "recursion_cutoff must be at least 2, got {}",
                self.recursion_cutoff
            )));
        }
        if self.num_threads == Some(0) {
            return Err(StrassenError::InvalidConfig(
                "num_threads must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Three-tier dispatch: naive, then blocked, then recursive.
    pub fn tier_for(&self, size: usize) -> Tier {
        if size <= self.block_cutoff {
            Tier::Naive
        } else if size <= self.recursion_cutoff {
            Tier::Blocked
        } else {
            Tier::Recursive
        }
    }
}
