//! Common types and utilities shared across fifosim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and [`EngineConfig`]
//! - Error types
//! - The page identifier ([`PageId`])

pub mod config;
pub mod error;
mod page_id;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use page_id::PageId;
