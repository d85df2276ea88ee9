//! Frame identifier type.

/// Identifies a slot position in a [`FrameStore`](crate::sim::FrameStore).
///
/// Slots are numbered in the order they were first filled. LRU tracks
/// recency by slot rather than by page, and an evicted page's slot is
/// reused by the page that replaces it.
///
/// # Example
/// ```
/// use pagesim::FrameId;
///
/// let frame_id = FrameId::new(2);
/// assert_eq!(frame_id.0, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_id_new() {
        let fid = FrameId::new(10);
        assert_eq!(fid.0, 10);
    }

    #[test]
    fn test_frame_id_equality() {
        assert_eq!(FrameId::new(5), FrameId::new(5));
        assert_ne!(FrameId::new(5), FrameId::new(6));
    }
}
