//! FIFO page replacement.
//!
//! # Components
//! - [`EvictionEngine`] - The simulation state machine
//! - [`FifoQueue`] - The frame table, in arrival order
//! - [`Outcome`] - Result of one access (hit, load, replacement)
//! - [`StatsSnapshot`] - Hit / fault counters
//! - [`SharedEngine`] - The engine behind a single lock

mod eviction_engine;
mod fifo;
mod outcome;
mod shared;
mod stats;

pub use eviction_engine::{EngineState, EvictionEngine};
pub use fifo::FifoQueue;
pub use outcome::Outcome;
pub use shared::SharedEngine;
pub use stats::StatsSnapshot;
