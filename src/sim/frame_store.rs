//! FrameStore - the simulated resident set.
//!
//! A [`FrameStore`] is a fixed-capacity, ordered list of resident pages.
//! Slot position carries meaning for FIFO (oldest first) and LRU (slot
//! identity is reused on eviction); Optimal ignores it.

use crate::common::{Error, FrameId, PageId, Result};

/// Fixed-capacity pool of resident pages.
///
/// # Invariants
/// - `len() <= capacity()` at all times
/// - no page is resident in more than one slot
///
/// # Example
/// ```
/// use pagesim::{FrameStore, PageId};
///
/// let mut frames = FrameStore::new(2);
/// frames.insert(PageId::new(1)).unwrap();
/// frames.insert(PageId::new(2)).unwrap();
/// assert!(frames.is_full());
/// assert!(frames.insert(PageId::new(3)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameStore {
    /// Residents in slot order.
    slots: Vec<PageId>,

    /// Number of frames (immutable after construction).
    capacity: usize,
}

impl FrameStore {
    /// Create an empty store with room for `capacity` pages.
    ///
    /// Capacity is validated by the runner before a store is built; a
    /// zero-capacity store rejects every insert.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// True iff `page` occupies a slot.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.slots.contains(&page)
    }

    /// Slot currently holding `page`, if resident.
    pub fn position(&self, page: PageId) -> Option<FrameId> {
        self.slots.iter().position(|&p| p == page).map(FrameId::new)
    }

    /// Page held in `slot`, if that slot is occupied.
    #[inline]
    pub fn get(&self, slot: FrameId) -> Option<PageId> {
        self.slots.get(slot.0).copied()
    }

    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no page is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maximum number of resident pages.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True when every frame is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Iterate residents in slot order.
    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.slots.iter().copied()
    }

    /// Current residents in slot order (not sorted).
    pub fn snapshot(&self) -> Vec<PageId> {
        self.slots.clone()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Append `page` as a new resident and return the slot it landed in.
    ///
    /// # Errors
    /// `Error::CapacityExceeded` if the store is already full. Policies
    /// only insert into a store with a free frame, so hitting this means
    /// a policy is broken.
    pub fn insert(&mut self, page: PageId) -> Result<FrameId> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        debug_assert!(!self.contains(page), "page {page} already resident");

        self.slots.push(page);
        Ok(FrameId::new(self.slots.len() - 1))
    }

    /// Overwrite the resident in `slot` with `page`, returning the evicted
    /// page. Size is unchanged.
    ///
    /// # Panics
    /// Panics if `slot` is not occupied.
    pub fn replace_at(&mut self, slot: FrameId, page: PageId) -> PageId {
        debug_assert!(!self.contains(page), "page {page} already resident");
        std::mem::replace(&mut self.slots[slot.0], page)
    }

    /// Remove the slot holding `old` and append `new` at the end.
    ///
    /// # Errors
    /// `Error::PageNotResident` if `old` is not resident; the store is
    /// left untouched.
    pub fn replace_by_value(&mut self, old: PageId, new: PageId) -> Result<()> {
        let idx = self
            .slots
            .iter()
            .position(|&p| p == old)
            .ok_or(Error::PageNotResident(old))?;
        debug_assert!(!self.contains(new), "page {new} already resident");

        self.slots.remove(idx);
        self.slots.push(new);
        Ok(())
    }
}
