use std::time::Duration;

/// Latency of the in-process deal search.
pub const DEAL_SEARCH_LATENCY: Duration = Duration::from_millis(1200);

/// Latency of every mock API endpoint.
pub const MOCK_API_LATENCY: Duration = Duration::from_millis(800);

/// Period of the simulated live KPI feed.
pub const KPI_TICK_PERIOD: Duration = Duration::from_secs(10);

/// Number of monthly KPI samples per company.
pub const KPI_HISTORY_MONTHS: usize = 6;

/// Fixed equity share of enterprise value in the toy valuation model.
pub const EQUITY_SHARE_OF_EV: f64 = 0.8;

/// Base URL of the mock API as seen by the dashboard.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000/api";
