//! fifosim - A FIFO page-replacement simulator for teaching memory management.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            fifosim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Front end (main.rs, script, render)               │   │
//! │  │     CLI args → Script commands → text / JSON output      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Eviction Engine (engine/)                   │   │
//! │  │   access(id) → Hit | Loaded | Replaced     resize(n)     │   │
//! │  │   FifoQueue + access log + StatsSnapshot                 │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Common (common/)                            │   │
//! │  │         PageId + EngineConfig + Error                    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config)
//! - [`engine`] - The FIFO eviction engine
//! - [`script`] - Access scripts
//! - [`render`] - Text rendering of engine state
//!
//! # Quick Start
//! ```
//! use fifosim::{EngineConfig, EvictionEngine};
//!
//! let mut engine = EvictionEngine::with_config(EngineConfig::with_capacity(3)).unwrap();
//! for page in ["P1", "P2", "P3", "P4"] {
//!     engine.access(page).unwrap();
//! }
//! assert_eq!(engine.frame_labels(), vec!["P2", "P3", "P4"]);
//! assert_eq!(engine.faults(), 4);
//! ```

pub mod common;
pub mod engine;
pub mod render;
pub mod script;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_CAPACITY, MAX_CAPACITY, MIN_CAPACITY};
pub use common::{EngineConfig, Error, PageId, Result};

pub use engine::{EngineState, EvictionEngine, FifoQueue, Outcome, SharedEngine, StatsSnapshot};
pub use script::{Command, Script, Step};
