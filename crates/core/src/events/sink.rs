//! List event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::ListEvent;

/// Trait for receiving list events.
///
/// Implementations translate events into platform-specific actions.
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no network calls, no writes)
/// - Implementations should queue events for async processing
/// - Failure to emit must not affect list operations (best-effort)
pub trait ListEventSink: Send + Sync {
    /// Emit a single list event.
    fn emit(&self, event: ListEvent);
}

/// No-op implementation for tests or contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpListEventSink;

impl ListEventSink for NoOpListEventSink {
    fn emit(&self, _event: ListEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockListEventSink {
    events: Arc<Mutex<Vec<ListEvent>>>,
}

impl MockListEventSink {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<ListEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl ListEventSink for MockListEventSink {
    fn emit(&self, event: ListEvent) {
        self.events.lock().unwrap().push(event);
    }
}
