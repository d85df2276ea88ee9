//! Optimal (Belady) replacement policy.
//!
//! On a fault with a full store, evicts the resident whose next use lies
//! farthest in the future. Needs the unconsumed suffix of the trace, so it
//! only works offline, which makes it the lower bound other policies are
//! measured against.

use crate::common::{Error, PageId, Result};
use crate::sim::replacer::Access;
use crate::sim::FrameStore;

/// Clairvoyant replacer. Keeps no state between steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalReplacer;

impl OptimalReplacer {
    /// Create a new optimal replacer.
    pub fn new() -> Self {
        OptimalReplacer
    }

    /// Apply one reference. `suffix` holds every reference after `page`.
    pub fn step(&mut self, frames: &mut FrameStore, page: PageId, suffix: &[PageId]) -> Result<Access> {
        if frames.contains(page) {
            return Ok(Access::Hit);
        }

        if !frames.is_full() {
            frames.insert(page)?;
            return Ok(Access::Fault { evicted: None });
        }

        let victim = Self::choose_victim(frames, suffix).ok_or(Error::CapacityExceeded {
            capacity: frames.capacity(),
        })?;
        frames.replace_by_value(victim, page)?;

        Ok(Access::Fault {
            evicted: Some(victim),
        })
    }

    /// Pick the resident to evict, scanning in slot order.
    ///
    /// The first resident that never appears in `suffix` wins outright and
    /// ends the scan. Otherwise the resident with the largest next-use
    /// index wins; ties go to the earlier slot. Returns `None` only for an
    /// empty store.
    pub fn choose_victim(frames: &FrameStore, suffix: &[PageId]) -> Option<PageId> {
        let mut victim = None;
        let mut farthest = None;

        for resident in frames.iter() {
            match suffix.iter().position(|&p| p == resident) {
                None => return Some(resident),
                Some(next_use) => {
                    if farthest.map_or(true, |f| next_use > f) {
                        farthest = Some(next_use);
                        victim = Some(resident);
                    }
                }
            }
        }

        victim
    }
}
