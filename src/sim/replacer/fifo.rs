//! FIFO (First-In-First-Out) replacement policy.

use crate::common::{Error, FrameId, PageId, Result};
use crate::sim::replacer::Access;
use crate::sim::FrameStore;

/// Evicts pages in the order they were brought in.
///
/// Hits do not reorder anything. The store's slot order is the insertion
/// order: inserts append, and eviction removes slot 0 and appends the
/// newcomer. So slot 0 is always the oldest resident and no separate
/// queue is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct FifoReplacer;

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        FifoReplacer
    }

    /// Apply one reference.
    pub fn step(&mut self, frames: &mut FrameStore, page: PageId) -> Result<Access> {
        if frames.contains(page) {
            return Ok(Access::Hit);
        }

        if !frames.is_full() {
            frames.insert(page)?;
            return Ok(Access::Fault { evicted: None });
        }

        let victim = frames.get(FrameId::new(0)).ok_or(Error::CapacityExceeded {
            capacity: frames.capacity(),
        })?;
        frames.replace_by_value(victim, page)?;

        Ok(Access::Fault {
            evicted: Some(victim),
        })
    }
}
