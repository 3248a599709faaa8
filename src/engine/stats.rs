//! Simulation statistics.

use std::fmt;

use serde::Serialize;

/// A point-in-time snapshot of the engine's counters.
///
/// `hits + faults == accesses` always holds for snapshots taken from an
/// [`EvictionEngine`](crate::EvictionEngine).
///
/// # Example
/// ```
/// use fifosim::EvictionEngine;
///
/// let mut engine = EvictionEngine::new();
/// engine.access("A").unwrap();
/// engine.access("A").unwrap();
/// let stats = engine.stats();
/// assert_eq!(stats.hits, 1);
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    /// Length of the access log.
    pub accesses: u64,
    pub hits: u64,
    pub faults: u64,

    /// Faults that had to evict a resident page. Resizes do not count.
    pub evictions: u64,
}

impl StatsSnapshot {
    /// Hit rate (0.0 to 1.0); 0.0 before any access.
    pub fn hit_rate(&self) -> f64 {
        self.hits as f64 / (self.hits + self.faults).max(1) as f64
    }

    /// Fault rate (0.0 to 1.0); 0.0 before any access.
    pub fn fault_rate(&self) -> f64 {
        self.faults as f64 / (self.hits + self.faults).max(1) as f64
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ accesses: {}, hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.accesses,
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
