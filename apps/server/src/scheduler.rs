//! Background jobs owned by the server process.

use std::sync::Arc;
use std::time::Duration;

use dealdesk_core::portfolio::{KpiTicker, KpiTickerHandle};

use crate::main_lib::AppState;

/// Starts the simulated live KPI feed for the server's portfolio store.
///
/// The returned handle must be kept alive; stop it on shutdown.
pub fn start_kpi_feed(state: &Arc<AppState>, period: Duration) -> KpiTickerHandle {
    tracing::info!("Starting KPI feed ({:?} interval)", period);
    KpiTicker::start(state.portfolio_service.clone(), period)
}
