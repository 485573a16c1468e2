use std::sync::{Arc, RwLock};

use log::debug;

use crate::errors::{Error, Result};
use crate::events::{StoreEvent, StoreEventSink};

use super::alerts_model::{Alert, AlertRetention, AlertState};
use super::alerts_traits::AlertServiceTrait;

pub struct AlertService {
    retention: AlertRetention,
    state: RwLock<AlertState>,
    event_sink: Arc<dyn StoreEventSink>,
}

impl AlertService {
    pub fn new(retention: AlertRetention, event_sink: Arc<dyn StoreEventSink>) -> Self {
        Self {
            retention,
            state: RwLock::new(AlertState::default()),
            event_sink,
        }
    }
}

impl AlertServiceTrait for AlertService {
    fn add_alert(&self, alert: Alert) -> Result<AlertState> {
        let snapshot = {
            let mut guard = self
                .state
                .write()
                .map_err(|e| Error::Unexpected(e.to_string()))?;
            guard.alerts.push(alert);
            if let Some(limit) = self.retention.limit() {
                let excess = guard.alerts.len().saturating_sub(limit);
                if excess > 0 {
                    guard.alerts.drain(..excess);
                    debug!("Evicted {} alerts", excess);
                }
            }
            guard.alert_count = guard.alerts.len();
            guard.clone()
        };

        self.event_sink.emit(StoreEvent::AlertAdded {
            alert_count: snapshot.alert_count,
        });
        Ok(snapshot)
    }

    fn state(&self) -> Result<AlertState> {
        self.state
            .read()
            .map(|s| s.clone())
            .map_err(|e| Error::Unexpected(e.to_string()))
    }

    fn alert_count(&self) -> Result<usize> {
        Ok(self.state()?.alert_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::NewAlert;
    use crate::events::{MockStoreEventSink, NoOpStoreEventSink};

    fn alert(message: &str) -> Alert {
        Alert {
            message: message.to_string(),
            time: "09:00".to_string(),
        }
    }

    #[test]
    fn add_alert_increments_count_and_keeps_order() {
        let service = AlertService::new(AlertRetention::Unbounded, Arc::new(NoOpStoreEventSink));
        assert_eq!(service.alert_count().unwrap(), 0);

        for (i, message) in ["IC memo due", "Covenant breach", "IC memo due"]
            .iter()
            .enumerate()
        {
            let state = service.add_alert(alert(message)).unwrap();
            assert_eq!(state.alert_count, i + 1);
        }

        let state = service.state().unwrap();
        let messages: Vec<&str> = state.alerts.iter().map(|a| a.message.as_str()).collect();
        assert_eq!(messages, vec!["IC memo due", "Covenant breach", "IC memo due"]);
        assert_eq!(state.alert_count, 3);
    }

    #[test]
    fn keep_latest_evicts_oldest() {
        let service =
            AlertService::new(AlertRetention::KeepLatest(2), Arc::new(NoOpStoreEventSink));
        for message in ["a", "b", "c", "d"] {
            service.add_alert(alert(message)).unwrap();
        }
        let state = service.state().unwrap();
        assert_eq!(state.alert_count, 2);
        assert_eq!(state.alerts, vec![alert("c"), alert("d")]);
    }

    #[test]
    fn zero_limit_keeps_every_alert() {
        let service =
            AlertService::new(AlertRetention::KeepLatest(0), Arc::new(NoOpStoreEventSink));
        for (i, message) in ["a", "b", "c"].iter().enumerate() {
            let state = service.add_alert(alert(message)).unwrap();
            assert_eq!(state.alert_count, i + 1);
        }
        assert_eq!(service.state().unwrap().alerts.len(), 3);
    }

    #[test]
    fn emits_count_after_each_append() {
        let sink = MockStoreEventSink::new();
        let service = AlertService::new(AlertRetention::Unbounded, Arc::new(sink.clone()));
        service.add_alert(alert("x")).unwrap();
        service.add_alert(alert("y")).unwrap();
        assert_eq!(
            sink.events(),
            vec![
                StoreEvent::AlertAdded { alert_count: 1 },
                StoreEvent::AlertAdded { alert_count: 2 },
            ]
        );
    }

    #[test]
    fn new_alert_defaults_time() {
        let alert: Alert = NewAlert {
            message: "Fund II capital call".to_string(),
            time: None,
        }
        .into();
        assert!(!alert.time.is_empty());
        assert!(chrono::DateTime::parse_from_rfc3339(&alert.time).is_ok());
    }
}
