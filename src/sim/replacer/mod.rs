//! Eviction policy implementations (replacers).
//!
//! Implements:
//! - [`FifoReplacer`] - evicts the earliest-inserted page
//! - [`LruReplacer`] - evicts the page in the least recently used slot
//! - [`OptimalReplacer`] - Belady's clairvoyant policy, looks ahead in the trace
//!
//! The set of policies is closed, so dispatch goes through the [`Replacer`]
//! enum rather than a trait object. Every variant exposes the same
//! [`Replacer::step`] operation.

mod fifo;
mod lru;
mod optimal;

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::common::{Error, PageId, Result};
use crate::sim::FrameStore;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

/// Names one of the supported replacement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// First-in-first-out.
    Fifo,
    /// Least recently used.
    Lru,
    /// Belady's optimal (clairvoyant) policy.
    Optimal,
}

impl PolicyKind {
    /// All policies, in comparison order.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Optimal];

    /// Display name used as the comparison table key.
    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Optimal => "Optimal",
        }
    }

    /// Build fresh, empty policy state for one run.
    pub fn replacer(self) -> Replacer {
        match self {
            PolicyKind::Fifo => Replacer::Fifo(FifoReplacer::new()),
            PolicyKind::Lru => Replacer::Lru(LruReplacer::new()),
            PolicyKind::Optimal => Replacer::Optimal(OptimalReplacer::new()),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    /// Case-insensitive match on the policy name.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownPolicy(name.to_string()))
    }
}

/// Outcome of simulating one reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page was already resident.
    Hit,
    /// The page was not resident and has been installed.
    ///
    /// `evicted` is the page it displaced, or `None` if a free frame was used.
    Fault { evicted: Option<PageId> },
}

impl Access {
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Access::Hit)
    }

    #[inline]
    pub fn is_fault(&self) -> bool {
        !self.is_hit()
    }

    /// Page displaced by this access, if any.
    #[inline]
    pub fn evicted(&self) -> Option<PageId> {
        match self {
            Access::Fault { evicted } => *evicted,
            Access::Hit => None,
        }
    }
}

/// Per-run policy state, one variant per policy.
///
/// A `Replacer` belongs to exactly one run and is dropped when the run ends.
#[derive(Debug, Clone)]
pub enum Replacer {
    Fifo(FifoReplacer),
    Lru(LruReplacer),
    Optimal(OptimalReplacer),
}

impl Replacer {
    /// Which policy this state belongs to.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Replacer::Fifo(_) => PolicyKind::Fifo,
            Replacer::Lru(_) => PolicyKind::Lru,
            Replacer::Optimal(_) => PolicyKind::Optimal,
        }
    }

    /// Apply one reference to `frames`.
    ///
    /// `suffix` is the part of the trace strictly after `page`. Only the
    /// optimal policy reads it.
    ///
    /// # Errors
    /// `Error::CapacityExceeded` if the policy tries to insert into a full
    /// store, or finds no victim in one. `Error::PageNotResident` if the
    /// chosen victim is missing from `frames`.
    pub fn step(&mut self, frames: &mut FrameStore, page: PageId, suffix: &[PageId]) -> Result<Access> {
        let access = match self {
            Replacer::Fifo(r) => r.step(frames, page)?,
            Replacer::Lru(r) => r.step(frames, page)?,
            Replacer::Optimal(r) => r.step(frames, page, suffix)?,
        };

        if let Some(victim) = access.evicted() {
            trace!(policy = %self.kind(), %page, %victim, "evicted");
        }
        Ok(access)
    }
}
