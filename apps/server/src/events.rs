use dealdesk_core::events::{StoreEvent, StoreEventSink};
use serde_json::Value;
use tokio::sync::broadcast;

/// Serializable envelope that carries event names and optional payloads.
#[derive(Clone, Debug)]
pub struct ServerEvent {
    pub name: &'static str,
    pub payload: Option<Value>,
}

impl ServerEvent {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            payload: None,
        }
    }

    pub fn with_payload(name: &'static str, payload: Value) -> Self {
        Self {
            name,
            payload: Some(payload),
        }
    }
}

impl From<StoreEvent> for ServerEvent {
    fn from(event: StoreEvent) -> Self {
        let name = event.name();
        match serde_json::to_value(&event) {
            Ok(payload) => ServerEvent::with_payload(name, payload),
            Err(err) => {
                tracing::error!("Failed to serialize store event {}: {}", name, err);
                ServerEvent::new(name)
            }
        }
    }
}

/// Lightweight broadcast bus that fans out store events to any connected
/// clients.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ServerEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ServerEvent) {
        // Lagging listeners are ignored to avoid blocking producers.
        let _ = self.sender.send(event);
    }
}

impl StoreEventSink for EventBus {
    fn emit(&self, event: StoreEvent) {
        self.publish(event.into());
    }
}
