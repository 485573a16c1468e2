use crate::alerts::alerts_model::{Alert, AlertState};
use crate::errors::Result;

/// Trait for alert store operations
pub trait AlertServiceTrait: Send + Sync {
    /// Appends in insertion order. No deduplication.
    fn add_alert(&self, alert: Alert) -> Result<AlertState>;
    fn state(&self) -> Result<AlertState>;
    fn alert_count(&self) -> Result<usize>;
}
