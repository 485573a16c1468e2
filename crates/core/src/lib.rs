//! Deal Desk Core - domain models, stores and the mock API contract.
//!
//! Each store owns its state behind a lock, exposes read snapshots and
//! mutators, and reports every change through a [`events::StoreEventSink`].
//! Nothing here starts background work on its own: the KPI feed only runs
//! once [`portfolio::KpiTicker::start`] is called.

pub mod alerts;
pub mod client;
pub mod constants;
pub mod deals;
pub mod errors;
pub mod events;
pub mod portfolio;
pub mod session;
pub mod utils;
pub mod valuation;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
