//! Alerts module - the append-only alert feed shown in the alert drawer.

mod alerts_model;
mod alerts_service;
mod alerts_traits;

pub use alerts_model::{Alert, AlertRetention, AlertState, NewAlert};
pub use alerts_service::AlertService;
pub use alerts_traits::AlertServiceTrait;
