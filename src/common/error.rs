//! Error types for pagesim.

use thiserror::Error;

use crate::common::PageId;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Run preconditions (`InvalidFrameSize`, `EmptyTrace`) are checked once,
/// before the first reference is simulated. A failed run never yields
/// partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Frame pool size is below the minimum of one frame.
    #[error("Invalid frame size {0}: must be at least 1")]
    InvalidFrameSize(usize),

    /// The reference trace has no references.
    ///
    /// Hit and fault ratios are undefined for an empty trace.
    #[error("Reference trace is empty")]
    EmptyTrace,

    /// `FrameStore::insert` was called on a full store.
    ///
    /// This indicates a bug in a replacement policy, not bad input.
    #[error("Frame store is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// A policy tried to evict a page that is not resident.
    ///
    /// Like `CapacityExceeded`, this means a policy bug.
    #[error("Page {0} is not resident")]
    PageNotResident(PageId),

    /// A token in a textual trace is not an integer page number.
    #[error("Invalid page number: {0:?}")]
    InvalidPageToken(String),

    /// A policy name that is not FIFO, LRU or Optimal.
    #[error("Unknown replacement policy: {0:?}")]
    UnknownPolicy(String),
}
