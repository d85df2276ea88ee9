//! LRU (Least Recently Used) replacement policy.
//!
//! Recency is tracked per slot, not per page. On eviction the newcomer takes
//! over the victim's slot, so snapshots show pages in slot-position order
//! rather than recency order:
//!
//! ```text
//! frames  [4, 2, 3]      recency (LRU -> MRU)  [1, 2, 0]
//! ref 1 -> victim slot 1 -> frames [4, 1, 3]   recency [2, 0, 1]
//! ```

use std::collections::VecDeque;

use crate::common::{Error, FrameId, PageId, Result};
use crate::sim::replacer::Access;
use crate::sim::FrameStore;

/// Evicts the page in the least recently used slot.
#[derive(Debug, Clone, Default)]
pub struct LruReplacer {
    /// Occupied slots, least recently used at the front.
    recency: VecDeque<FrameId>,
}

impl LruReplacer {
    /// Create a new LRU replacer.
    pub fn new() -> Self {
        Self {
            recency: VecDeque::new(),
        }
    }

    /// Apply one reference.
    pub fn step(&mut self, frames: &mut FrameStore, page: PageId) -> Result<Access> {
        if let Some(slot) = frames.position(page) {
            self.touch(slot);
            return Ok(Access::Hit);
        }

        if !frames.is_full() {
            let slot = frames.insert(page)?;
            self.recency.push_back(slot);
            return Ok(Access::Fault { evicted: None });
        }

        let victim_slot = self.recency.pop_front().ok_or(Error::CapacityExceeded {
            capacity: frames.capacity(),
        })?;
        let evicted = frames.replace_at(victim_slot, page);
        self.recency.push_back(victim_slot);

        Ok(Access::Fault {
            evicted: Some(evicted),
        })
    }

    /// Mark `slot` as most recently used.
    fn touch(&mut self, slot: FrameId) {
        if let Some(idx) = self.recency.iter().position(|&s| s == slot) {
            self.recency.remove(idx);
        }
        self.recency.push_back(slot);
    }

    /// Slots from least to most recently used.
    pub fn recency_order(&self) -> impl Iterator<Item = FrameId> + '_ {
        self.recency.iter().copied()
    }
}
