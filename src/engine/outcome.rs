//! Result of a single page access.

use std::fmt;

use serde::Serialize;

use crate::common::PageId;

/// What happened when a page was accessed.
///
/// Exactly one variant is produced per successful
/// [`EvictionEngine::access`](crate::EvictionEngine::access).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    /// The page was already resident.
    Hit { page: PageId },

    /// Page fault with a free frame available.
    Loaded { page: PageId },

    /// Page fault with a full table; the oldest page was evicted.
    Replaced { page: PageId, evicted: PageId },
}

impl Outcome {
    /// The page that was requested.
    pub fn page(&self) -> &PageId {
        match self {
            Outcome::Hit { page } | Outcome::Loaded { page } | Outcome::Replaced { page, .. } => {
                page
            }
        }
    }

    /// The evicted page, for a replacement.
    pub fn evicted(&self) -> Option<&PageId> {
        match self {
            Outcome::Replaced { evicted, .. } => Some(evicted),
            _ => None,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::Hit { .. })
    }

    /// Loaded and Replaced are both page faults.
    pub fn is_fault(&self) -> bool {
        !self.is_hit()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Hit { page } => write!(f, "Page {} found in memory", page),
            Outcome::Loaded { page } => write!(f, "Page {} loaded into memory", page),
            Outcome::Replaced { page, evicted } => {
                write!(f, "Page {} replaces {} (FIFO)", page, evicted)
            }
        }
    }
}
