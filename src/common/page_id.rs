//! Page identifier type.

use std::fmt;
use std::str::FromStr;

use crate::common::Error;

/// Identifies a page in a reference trace.
///
/// Page numbers come straight from user input, so any `i64` is accepted,
/// negatives included. Only equality matters to the replacement policies;
/// the derived ordering exists so pages can live in ordered collections.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// assert_eq!(page_id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub i64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageId(id)
    }
}

impl From<i64> for PageId {
    #[inline]
    fn from(id: i64) -> Self {
        PageId(id)
    }
}

impl FromStr for PageId {
    type Err = Error;

    /// Parse a single page number, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        token
            .parse::<i64>()
            .map(PageId)
            .map_err(|_| Error::InvalidPageToken(token.to_string()))
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
