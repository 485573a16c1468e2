//! Store event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::StoreEvent;

/// Receives store events.
///
/// `emit()` must be fast and non-blocking. Failure to deliver an event never
/// affects the store mutation that produced it.
pub trait StoreEventSink: Send + Sync {
    fn emit(&self, event: StoreEvent);

    fn emit_batch(&self, events: Vec<StoreEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// Discards every event.
#[derive(Clone, Default)]
pub struct NoOpStoreEventSink;

impl StoreEventSink for NoOpStoreEventSink {
    fn emit(&self, _event: StoreEvent) {}
}

/// Collects emitted events, for tests.
#[derive(Clone, Default)]
pub struct MockStoreEventSink {
    events: Arc<Mutex<Vec<StoreEvent>>>,
}

impl MockStoreEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<StoreEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StoreEventSink for MockStoreEventSink {
    fn emit(&self, event: StoreEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
