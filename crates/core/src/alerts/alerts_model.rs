use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub message: String,
    pub time: String,
}

/// Input model for appending an alert; `time` defaults to now.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAlert {
    pub message: String,
    #[serde(default)]
    pub time: Option<String>,
}

impl From<NewAlert> for Alert {
    fn from(new_alert: NewAlert) -> Self {
        Alert {
            message: new_alert.message,
            time: new_alert.time.unwrap_or_else(|| Utc::now().to_rfc3339()),
        }
    }
}

/// How many alerts the store keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", content = "limit", rename_all = "camelCase")]
pub enum AlertRetention {
    /// Keep everything for the lifetime of the process.
    #[default]
    Unbounded,
    /// Keep the newest `n`, evicting the oldest first. Zero keeps everything.
    KeepLatest(usize),
}

impl AlertRetention {
    /// Effective cap, `None` when nothing is ever evicted.
    pub fn limit(self) -> Option<usize> {
        match self {
            AlertRetention::KeepLatest(limit) if limit > 0 => Some(limit),
            _ => None,
        }
    }
}

/// Snapshot of the alert store. `alert_count` always equals `alerts.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertState {
    pub alerts: Vec<Alert>,
    pub alert_count: usize,
}
