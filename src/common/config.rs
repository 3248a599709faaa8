//! Configuration constants and engine configuration for fifosim.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::common::{Error, Result};

/// Smallest capacity an engine accepts.
pub const MIN_CAPACITY: usize = 1;

/// Largest capacity the simulator allows by default.
///
/// Small on purpose: with more than a handful of frames most short
/// access sequences never evict anything.
pub const MAX_CAPACITY: usize = 8;

/// Capacity of a freshly constructed engine.
pub const DEFAULT_CAPACITY: usize = 4;

/// Quick-access page identifiers offered to the user.
pub const SAMPLE_PAGES: [&str; 9] = ["P1", "P2", "P3", "P4", "P5", "P6", "A", "B", "C"];

/// Access sequence that shows FIFO evicting pages regardless of reuse.
pub const DEMO_SEQUENCE: [&str; 8] = ["P1", "P2", "P3", "P4", "P5", "P1", "P2", "P6"];

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_max_capacity() -> usize {
    MAX_CAPACITY
}

/// Settings for constructing an [`EvictionEngine`](crate::EvictionEngine).
///
/// Missing fields in a JSON document fall back to the defaults above.
///
/// # Example
/// ```
/// use fifosim::EngineConfig;
///
/// let config = EngineConfig::from_reader(r#"{ "capacity": 3 }"#.as_bytes()).unwrap();
/// assert_eq!(config.capacity, 3);
/// assert_eq!(config.max_capacity, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Initial number of frames.
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Upper bound enforced by `resize`.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: usize,
}

impl EngineConfig {
    /// Config with the given initial capacity and the default bound.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Parse a JSON config and validate it.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let config: EngineConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that `capacity` lies within `MIN_CAPACITY..=max_capacity`.
    pub fn validate(&self) -> Result<()> {
        if self.max_capacity < MIN_CAPACITY {
            return Err(Error::Config(format!(
                "max_capacity must be at least {}",
                MIN_CAPACITY
            )));
        }
        self.check_capacity(self.capacity)
    }

    /// Check a capacity against this config's bounds.
    pub fn check_capacity(&self, capacity: usize) -> Result<()> {
        if (MIN_CAPACITY..=self.max_capacity).contains(&capacity) {
            Ok(())
        } else {
            Err(Error::InvalidCapacity {
                requested: capacity,
                min: MIN_CAPACITY,
                max: self.max_capacity,
            })
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_capacity: MAX_CAPACITY,
        }
    }
}
