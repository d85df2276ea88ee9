//! Reference traces.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::common::config::TRACE_SEPARATOR;
use crate::common::{Error, PageId, Result};

/// An ordered, non-empty sequence of page references.
///
/// The simulation only ever reads a trace front to back, plus the
/// look-ahead the optimal policy takes into the unconsumed suffix.
///
/// # Example
/// ```
/// use pagesim::{PageId, ReferenceTrace};
///
/// let trace: ReferenceTrace = "7, 0, 1, 2, 0".parse().unwrap();
/// assert_eq!(trace.len(), 5);
/// assert_eq!(trace.suffix_after(2), &[PageId::new(2), PageId::new(0)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTrace {
    pages: Vec<PageId>,
}

impl ReferenceTrace {
    /// Wrap a sequence of references.
    ///
    /// # Errors
    /// `Error::EmptyTrace` if `pages` is empty.
    pub fn new(pages: Vec<PageId>) -> Result<Self> {
        if pages.is_empty() {
            return Err(Error::EmptyTrace);
        }
        Ok(Self { pages })
    }

    /// References as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[PageId] {
        &self.pages
    }

    /// Every reference strictly after `index`.
    ///
    /// Empty when `index` is the last position or beyond.
    pub fn suffix_after(&self, index: usize) -> &[PageId] {
        index
            .checked_add(1)
            .and_then(|start| self.pages.get(start..))
            .unwrap_or(&[])
    }
}

impl Deref for ReferenceTrace {
    type Target = [PageId];

    fn deref(&self) -> &[PageId] {
        &self.pages
    }
}

impl AsRef<[PageId]> for ReferenceTrace {
    fn as_ref(&self) -> &[PageId] {
        &self.pages
    }
}

impl TryFrom<Vec<i64>> for ReferenceTrace {
    type Error = Error;

    fn try_from(ids: Vec<i64>) -> Result<Self> {
        Self::new(ids.into_iter().map(PageId::new).collect())
    }
}

impl FromStr for ReferenceTrace {
    type Err = Error;

    /// Parse comma-separated page numbers, e.g. `"1, 2, 3"`.
    ///
    /// Input that is blank or holds only separators is an empty trace.
    /// Otherwise any blank or non-integer token is rejected.
    fn from_str(s: &str) -> Result<Self> {
        if s.split(TRACE_SEPARATOR).all(|token| token.trim().is_empty()) {
            return Err(Error::EmptyTrace);
        }
        let pages = s
            .split(TRACE_SEPARATOR)
            .map(str::parse::<PageId>)
            .collect::<Result<Vec<_>>>()?;
        Self::new(pages)
    }
}

impl fmt::Display for ReferenceTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", TRACE_SEPARATOR)?;
            }
            write!(f, "{}", page)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(ReferenceTrace::new(vec![]), Err(Error::EmptyTrace));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let trace: ReferenceTrace = " 1,2 , 3 ".parse().unwrap();
        assert_eq!(trace.as_slice(), &[PageId(1), PageId(2), PageId(3)]);
    }

    #[test]
    fn test_parse_blank_is_empty_trace() {
        assert_eq!("".parse::<ReferenceTrace>(), Err(Error::EmptyTrace));
        assert_eq!("   ".parse::<ReferenceTrace>(), Err(Error::EmptyTrace));
    }

    #[test]
    fn test_parse_only_separators_is_empty_trace() {
        assert_eq!(",".parse::<ReferenceTrace>(), Err(Error::EmptyTrace));
        assert_eq!(",,".parse::<ReferenceTrace>(), Err(Error::EmptyTrace));
        assert_eq!(" , , ".parse::<ReferenceTrace>(), Err(Error::EmptyTrace));
    }

    #[test]
    fn test_parse_bad_token() {
        assert_eq!(
            "1,two,3".parse::<ReferenceTrace>(),
            Err(Error::InvalidPageToken("two".to_string()))
        );
        assert_eq!(
            "1,,3".parse::<ReferenceTrace>(),
            Err(Error::InvalidPageToken(String::new()))
        );
    }

    #[test]
    fn test_suffix_after() {
        let trace = ReferenceTrace::try_from(vec![1i64, 2, 3]).unwrap();
        assert_eq!(trace.suffix_after(0), &[PageId(2), PageId(3)]);
        assert!(trace.suffix_after(2).is_empty());
        assert!(trace.suffix_after(10).is_empty());
        assert!(trace.suffix_after(usize::MAX).is_empty());
    }

    #[test]
    fn test_display_roundtrip() {
        let trace = ReferenceTrace::try_from(vec![4i64, -1, 9]).unwrap();
        assert_eq!(trace.to_string(), "4,-1,9");
        assert_eq!(trace.to_string().parse::<ReferenceTrace>().unwrap(), trace);
    }
}
