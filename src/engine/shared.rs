//! Thread-safe handle to a single engine.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::common::{PageId, Result};
use crate::engine::{EngineState, EvictionEngine, Outcome};

/// An [`EvictionEngine`] behind one mutex.
///
/// # Thread Safety
/// `access` and `resize` both read then write the frame table and
/// counters, so every operation (reads included) takes the same lock.
/// Cloning the handle shares the engine.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<EvictionEngine>>,
}

impl SharedEngine {
    pub fn new(engine: EvictionEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn access(&self, label: &str) -> Result<Outcome> {
        self.inner.lock().access(label)
    }

    pub fn resize(&self, capacity: usize) -> Result<Vec<PageId>> {
        self.inner.lock().resize(capacity)
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Consistent snapshot taken under the lock.
    pub fn state(&self) -> EngineState {
        self.inner.lock().state()
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut EvictionEngine) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl From<EvictionEngine> for SharedEngine {
    fn from(engine: EvictionEngine) -> Self {
        Self::new(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_engine() {
        let a = SharedEngine::default();
        let b = a.clone();

        a.access("P1").unwrap();
        assert_eq!(b.state().frames.len(), 1);

        b.reset();
        assert!(a.state().history.is_empty());
    }

    #[test]
    fn test_with_gives_exclusive_access() {
        let shared = SharedEngine::default();
        let outcomes = shared.with(|engine| {
            vec![engine.access("A").unwrap(), engine.access("A").unwrap()]
        });
        assert!(outcomes[1].is_hit());
        assert_eq!(shared.state().stats.hits, 1);
    }
}
