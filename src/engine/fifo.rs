//! FIFO (First-In-First-Out) frame table.

use std::collections::{HashSet, VecDeque};

use crate::common::PageId;

/// The resident pages, in arrival order.
///
/// Front of the queue is the oldest arrival and the next eviction victim.
/// Re-accessing a resident page never reorders it.
#[derive(Debug, Clone, Default)]
pub struct FifoQueue {
    /// Page IDs in insertion order (front = oldest).
    queue: VecDeque<PageId>,

    /// Set for O(1) membership check.
    resident: HashSet<PageId>,
}

impl FifoQueue {
    /// Create an empty frame table.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            resident: HashSet::new(),
        }
    }

    /// Whether `page_id` is currently resident.
    pub fn contains(&self, page_id: &PageId) -> bool {
        self.resident.contains(page_id)
    }

    /// Append a page at the tail.
    ///
    /// Returns `false` and leaves the table untouched if the page is
    /// already resident.
    pub fn push_back(&mut self, page_id: PageId) -> bool {
        if !self.resident.insert(page_id.clone()) {
            return false;
        }
        self.queue.push_back(page_id);
        true
    }

    /// Remove and return the oldest page.
    pub fn pop_front(&mut self) -> Option<PageId> {
        let page_id = self.queue.pop_front()?;
        self.resident.remove(&page_id);
        Some(page_id)
    }

    /// Drop pages from the front until at most `len` remain.
    ///
    /// Returns the removed pages, oldest first.
    pub fn truncate_front(&mut self, len: usize) -> Vec<PageId> {
        let excess = self.queue.len().saturating_sub(len);
        let removed: Vec<PageId> = self.queue.drain(..excess).collect();
        for page_id in &removed {
            self.resident.remove(page_id);
        }
        removed
    }

    /// The oldest resident page, if any.
    pub fn front(&self) -> Option<&PageId> {
        self.queue.front()
    }

    /// Iterate resident pages from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &PageId> {
        self.queue.iter()
    }

    /// Number of resident pages.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.resident.clear();
    }
}
