//! Eviction Engine - the FIFO page-replacement state machine.
//!
//! The [`EvictionEngine`] provides:
//! - Hit / fault classification of page accesses
//! - Strict FIFO eviction when the frame table is full
//! - Runtime capacity changes with oldest-first reconciliation
//! - Counters and an unbounded access log for reporting

use serde::Serialize;

use crate::common::{EngineConfig, PageId, Result};
use crate::engine::{FifoQueue, Outcome, StatsSnapshot};

/// Owns all simulation state.
///
/// # Architecture
/// ```text
/// ┌─────────────────────────────────────────────────────────────┐
/// │                       EvictionEngine                        │
/// │  ┌──────────────────────────────┐  ┌────────────────────┐   │
/// │  │   frames: FifoQueue          │  │ history: Vec<Pid>  │   │
/// │  │ [oldest] [..] [..] [newest]  │  │  append-only log   │   │
/// │  └──────────────────────────────┘  └────────────────────┘   │
/// │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐   │
/// │  │   capacity   │  │ hits/faults  │  │  last: Outcome   │   │
/// │  └──────────────┘  └──────────────┘  └──────────────────┘   │
/// └─────────────────────────────────────────────────────────────┘
/// ```
///
/// Only `history` and the counters grow without bound; `frames` never
/// holds more than `capacity` pages and never holds duplicates.
///
/// # Usage
/// ```
/// use fifosim::{EngineConfig, EvictionEngine, PageId};
///
/// let mut engine = EvictionEngine::with_config(EngineConfig::with_capacity(2)).unwrap();
/// engine.access("A").unwrap();
/// engine.access("B").unwrap();
/// let outcome = engine.access("C").unwrap();
///
/// assert_eq!(outcome.evicted(), Some(&PageId::new("A").unwrap()));
/// assert_eq!(engine.frame_labels(), vec!["B", "C"]);
/// ```
#[derive(Debug, Clone)]
pub struct EvictionEngine {
    /// Resident pages in arrival order.
    frames: FifoQueue,

    /// Every requested page, in request order.
    history: Vec<PageId>,

    hits: u64,
    faults: u64,
    evictions: u64,

    /// Most recent access outcome; `None` after construction or reset.
    last: Option<Outcome>,

    /// Current frame capacity. Always within `config`'s bounds.
    capacity: usize,

    config: EngineConfig,
}

impl EvictionEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::from_valid_config(EngineConfig::default())
    }

    /// Create an engine from a config.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` / `Error::Config` if the config is out of bounds
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: EngineConfig) -> Self {
        Self {
            frames: FifoQueue::new(),
            history: Vec::new(),
            hits: 0,
            faults: 0,
            evictions: 0,
            last: None,
            capacity: config.capacity,
            config,
        }
    }

    // ========================================================================
    // Public API: Operations
    // ========================================================================

    /// Request a page.
    ///
    /// A hit leaves the frame table order untouched. A fault appends the
    /// page at the tail, evicting the head first if the table is full.
    ///
    /// # Errors
    /// - `Error::EmptyIdentifier` if `label` is blank (no state changes)
    pub fn access(&mut self, label: &str) -> Result<Outcome> {
        let page_id = PageId::new(label)?;
        Ok(self.access_page(page_id))
    }

    /// Request an already validated page.
    pub fn access_page(&mut self, page_id: PageId) -> Outcome {
        self.history.push(page_id.clone());

        let outcome = if self.frames.contains(&page_id) {
            self.hits += 1;
            Outcome::Hit { page: page_id }
        } else {
            self.faults += 1;
            let victim = if self.frames.len() >= self.capacity {
                self.frames.pop_front()
            } else {
                None
            };
            self.frames.push_back(page_id.clone());

            match victim {
                Some(evicted) => {
                    self.evictions += 1;
                    Outcome::Replaced {
                        page: page_id,
                        evicted,
                    }
                }
                None => Outcome::Loaded { page: page_id },
            }
        };

        self.last = Some(outcome.clone());
        outcome
    }

    /// Change the number of frames.
    ///
    /// Shrinking below the resident count drops the oldest pages. Those
    /// removals do not touch the counters or the last outcome.
    ///
    /// Returns the pages dropped, oldest first.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0 or above the configured
    ///   maximum (no state changes)
    pub fn resize(&mut self, capacity: usize) -> Result<Vec<PageId>> {
        self.config.check_capacity(capacity)?;
        self.capacity = capacity;
        Ok(self.frames.truncate_front(capacity))
    }

    /// Clear frames, history, counters and the last outcome.
    ///
    /// Capacity is kept.
    pub fn reset(&mut self) {
        self.frames.clear();
        self.history.clear();
        self.hits = 0;
        self.faults = 0;
        self.evictions = 0;
        self.last = None;
    }

    // ========================================================================
    // Public API: Accessors
    // ========================================================================

    /// Resident pages, oldest first.
    pub fn frames(&self) -> impl Iterator<Item = &PageId> {
        self.frames.iter()
    }

    /// Resident page labels, oldest first.
    pub fn frame_labels(&self) -> Vec<&str> {
        self.frames.iter().map(PageId::as_str).collect()
    }

    /// Whether a page is currently resident.
    pub fn is_resident(&self, label: &str) -> bool {
        PageId::new(label)
            .map(|pid| self.frames.contains(&pid))
            .unwrap_or(false)
    }

    /// The page that the next eviction would remove.
    pub fn next_victim(&self) -> Option<&PageId> {
        self.frames.front()
    }

    pub fn resident_count(&self) -> usize {
        self.frames.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn max_capacity(&self) -> usize {
        self.config.max_capacity
    }

    /// Every requested page in request order.
    pub fn history(&self) -> &[PageId] {
        &self.history
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn faults(&self) -> u64 {
        self.faults
    }

    /// `hits / max(1, hits + faults)`.
    pub fn hit_rate(&self) -> f64 {
        self.stats().hit_rate()
    }

    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last.as_ref()
    }

    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot {
            accesses: self.history.len() as u64,
            hits: self.hits,
            faults: self.faults,
            evictions: self.evictions,
        }
    }

    /// Owned copy of everything a presentation layer needs.
    pub fn state(&self) -> EngineState {
        EngineState {
            capacity: self.capacity,
            frames: self.frames.iter().cloned().collect(),
            history: self.history.clone(),
            stats: self.stats(),
            last: self.last.clone(),
        }
    }
}

impl Default for EvictionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// A consistent copy of the engine's observable state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineState {
    pub capacity: usize,

    /// Resident pages, oldest first.
    pub frames: Vec<PageId>,

    pub history: Vec<PageId>,
    pub stats: StatsSnapshot,
    pub last: Option<Outcome>,
}

impl EngineState {
    pub fn hit_rate(&self) -> f64 {
        self.stats.hit_rate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    fn engine(capacity: usize) -> EvictionEngine {
        EvictionEngine::with_config(EngineConfig::with_capacity(capacity)).unwrap()
    }

    fn pid(s: &str) -> PageId {
        PageId::new(s).unwrap()
    }

    #[test]
    fn test_new_engine_is_empty() {
        let engine = EvictionEngine::new();
        assert_eq!(engine.capacity(), 4);
        assert_eq!(engine.resident_count(), 0);
        assert!(engine.history().is_empty());
        assert_eq!(engine.hits(), 0);
        assert_eq!(engine.faults(), 0);
        assert_eq!(engine.hit_rate(), 0.0);
        assert!(engine.last_outcome().is_none());
    }

    #[test]
    fn test_with_config_rejects_bad_capacity() {
        let err = EvictionEngine::with_config(EngineConfig::with_capacity(0)).unwrap_err();
        assert!(matches!(err, Error::InvalidCapacity { requested: 0, .. }));
    }

    #[test]
    fn test_load_then_hit() {
        let mut engine = engine(2);

        assert_eq!(engine.access("A").unwrap(), Outcome::Loaded { page: pid("A") });
        assert_eq!(engine.access("B").unwrap(), Outcome::Loaded { page: pid("B") });
        assert_eq!(engine.access("A").unwrap(), Outcome::Hit { page: pid("A") });

        assert_eq!(engine.frame_labels(), vec!["A", "B"]);
        assert_eq!(engine.hits(), 1);
        assert_eq!(engine.faults(), 2);
        assert_eq!(engine.last_outcome(), Some(&Outcome::Hit { page: pid("A") }));
    }

    #[test]
    fn test_replace_evicts_oldest() {
        let mut engine = engine(2);
        engine.access("A").unwrap();
        engine.access("B").unwrap();

        let outcome = engine.access("C").unwrap();
        assert_eq!(
            outcome,
            Outcome::Replaced {
                page: pid("C"),
                evicted: pid("A")
            }
        );
        assert_eq!(engine.frame_labels(), vec!["B", "C"]);
        assert_eq!(engine.stats().evictions, 1);
    }

    #[test]
    fn test_hit_does_not_promote() {
        let mut engine = engine(2);
        engine.access("A").unwrap();
        engine.access("B").unwrap();
        engine.access("A").unwrap(); // hit, A stays at the head

        let outcome = engine.access("C").unwrap();
        assert_eq!(outcome.evicted(), Some(&pid("A")));
    }

    #[test]
    fn test_access_trims_identifier() {
        let mut engine = engine(2);
        engine.access(" A ").unwrap();
        assert!(engine.access("A").unwrap().is_hit());
        assert_eq!(engine.history(), &[pid("A"), pid("A")]);
    }

    #[test]
    fn test_empty_identifier_leaves_state_unchanged() {
        let mut engine = engine(2);
        engine.access("A").unwrap();
        let before = engine.state();

        assert!(matches!(engine.access("   "), Err(Error::EmptyIdentifier)));
        assert_eq!(engine.state(), before);
    }

    #[test]
    fn test_resize_down_drops_oldest() {
        let mut engine = engine(4);
        for s in ["A", "B", "C", "D"] {
            engine.access(s).unwrap();
        }
        let last = engine.last_outcome().cloned();
        let stats = engine.stats();

        let dropped = engine.resize(2).unwrap();
        assert_eq!(dropped, vec![pid("A"), pid("B")]);
        assert_eq!(engine.frame_labels(), vec!["C", "D"]);
        assert_eq!(engine.capacity(), 2);

        // Not an access outcome
        assert_eq!(engine.stats(), stats);
        assert_eq!(engine.last_outcome().cloned(), last);
        assert_eq!(engine.history().len(), 4);
    }

    #[test]
    fn test_resize_up_keeps_frames() {
        let mut engine = engine(2);
        engine.access("A").unwrap();
        engine.access("B").unwrap();

        assert!(engine.resize(3).unwrap().is_empty());
        assert!(engine.access("C").unwrap().evicted().is_none());
        assert_eq!(engine.frame_labels(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_resize_rejects_out_of_range() {
        let mut engine = engine(3);
        engine.access("A").unwrap();
        let before = engine.state();

        assert!(matches!(
            engine.resize(0),
            Err(Error::InvalidCapacity { requested: 0, min: 1, max: 8 })
        ));
        assert!(engine.resize(9).is_err());
        assert_eq!(engine.state(), before);
    }

    #[test]
    fn test_reset_keeps_capacity() {
        let mut engine = engine(3);
        engine.access("A").unwrap();
        engine.access("A").unwrap();
        engine.resize(2).unwrap();

        engine.reset();

        assert_eq!(engine.capacity(), 2);
        assert_eq!(engine.resident_count(), 0);
        assert!(engine.history().is_empty());
        assert_eq!(engine.stats(), StatsSnapshot::default());
        assert!(engine.last_outcome().is_none());
    }

    #[test]
    fn test_is_resident_and_next_victim() {
        let mut engine = engine(2);
        assert!(engine.next_victim().is_none());

        engine.access("A").unwrap();
        engine.access("B").unwrap();

        assert!(engine.is_resident("A"));
        assert!(!engine.is_resident("C"));
        assert!(!engine.is_resident(""));
        assert_eq!(engine.next_victim(), Some(&pid("A")));
    }

    #[test]
    fn test_state_serializes() {
        let mut engine = engine(2);
        engine.access("A").unwrap();

        let json = serde_json::to_value(engine.state()).unwrap();
        assert_eq!(json["capacity"], 2);
        assert_eq!(json["frames"], serde_json::json!(["A"]));
        assert_eq!(json["stats"]["faults"], 1);
        assert_eq!(json["last"]["type"], "loaded");
    }
}
