use std::sync::Arc;
use std::time::Duration;

use crate::{config::Config, events::EventBus};
use dealdesk_core::{
    alerts::{AlertService, AlertServiceTrait},
    deals::SeedDealSource,
    events::StoreEventSink,
    portfolio::{PortfolioService, PortfolioServiceTrait},
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    /// Deals served by `GET /api/deals`.
    pub deal_source: Arc<SeedDealSource>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait>,
    pub alert_service: Arc<dyn AlertServiceTrait>,
    pub event_bus: EventBus,
    pub api_delay: Duration,
}

impl AppState {
    /// Stand-in for the network round trip of the mock API.
    pub async fn simulate_latency(&self) {
        if !self.api_delay.is_zero() {
            tokio::time::sleep(self.api_delay).await;
        }
    }
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let event_bus = EventBus::new(256);
    let sink: Arc<dyn StoreEventSink> = Arc::new(event_bus.clone());

    let portfolio_service = Arc::new(PortfolioService::with_seed(sink.clone()));
    let alert_service = Arc::new(AlertService::new(config.alert_retention, sink));

    tracing::info!(
        "Mock API ready: delay={:?}, kpi period={:?}, alert retention={:?}",
        config.api_delay,
        config.kpi_tick_period,
        config.alert_retention
    );

    Ok(Arc::new(AppState {
        deal_source: Arc::new(SeedDealSource::mock_api()),
        portfolio_service,
        alert_service,
        event_bus,
        api_delay: config.api_delay,
    }))
}
