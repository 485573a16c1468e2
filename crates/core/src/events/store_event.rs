//! Store event types.

use serde::{Deserialize, Serialize};

use crate::deals::DealFilters;
use crate::session::Role;

/// Facts about store state changes, emitted after the change is visible to
/// readers of the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// Login or logout changed the session.
    SessionChanged { role: Role, is_authenticated: bool },

    /// A deal search set the loading flag.
    DealSearchStarted,

    /// A deal search replaced the result list and cleared the loading flag.
    DealsUpdated { count: usize, filters: DealFilters },

    /// The selected portfolio company changed. The id is not validated.
    CompanySelected { id: String },

    /// The live KPI feed perturbed every company.
    KpisTicked { companies: usize },

    /// The company list was replaced from a portfolio source.
    PortfolioLoaded { count: usize },

    /// An alert was appended.
    AlertAdded { alert_count: usize },
}

impl StoreEvent {
    /// Stable wire name, `<store>:<change>`.
    pub fn name(&self) -> &'static str {
        match self {
            StoreEvent::SessionChanged { .. } => "session:changed",
            StoreEvent::DealSearchStarted => "deals:search-start",
            StoreEvent::DealsUpdated { .. } => "deals:updated",
            StoreEvent::CompanySelected { .. } => "portfolio:selected",
            StoreEvent::KpisTicked { .. } => "portfolio:kpis-ticked",
            StoreEvent::PortfolioLoaded { .. } => "portfolio:loaded",
            StoreEvent::AlertAdded { .. } => "alerts:added",
        }
    }
}
