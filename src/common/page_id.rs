//! Page identifier type.

use std::fmt;

use serde::Serialize;

use crate::common::{Error, Result};

/// Identifies a page requested by the simulation.
///
/// Identifiers are arbitrary user-supplied labels (`"P1"`, `"A"`, `"42"`),
/// stored trimmed. A `PageId` is never blank.
///
/// # Example
/// ```
/// use fifosim::PageId;
///
/// let pid = PageId::new("  P1 ").unwrap();
/// assert_eq!(pid.as_str(), "P1");
/// assert!(PageId::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    /// Create a PageId from a label, trimming surrounding whitespace.
    ///
    /// # Errors
    /// `Error::EmptyIdentifier` if nothing remains after trimming.
    pub fn new(label: &str) -> Result<Self> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyIdentifier);
        }
        Ok(PageId(trimmed.to_string()))
    }

    /// The identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
