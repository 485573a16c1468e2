use std::{net::SocketAddr, time::Duration};

use dealdesk_core::alerts::AlertRetention;
use dealdesk_core::constants::{KPI_TICK_PERIOD, MOCK_API_LATENCY};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Artificial latency added to every mock endpoint.
    pub api_delay: Duration,
    pub kpi_tick_period: Duration,
    pub alert_retention: AlertRetention,
}

fn env_u64(key: &str) -> Option<u64> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("DD_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:4000".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid DD_LISTEN_ADDR: {e}"))?;
        let cors_allow = std::env::var("DD_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms = env_u64("DD_REQUEST_TIMEOUT_MS").unwrap_or(30000);
        let api_delay = env_u64("DD_API_DELAY_MS")
            .map(Duration::from_millis)
            .unwrap_or(MOCK_API_LATENCY);
        let kpi_tick_period = env_u64("DD_KPI_TICK_SECS")
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(KPI_TICK_PERIOD);
        let alert_retention = env_u64("DD_ALERT_RETENTION")
            .filter(|limit| *limit > 0)
            .map(|limit| AlertRetention::KeepLatest(limit as usize))
            .unwrap_or_default();
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            api_delay,
            kpi_tick_period,
            alert_retention,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 4000)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_secs(30),
            api_delay: MOCK_API_LATENCY,
            kpi_tick_period: KPI_TICK_PERIOD,
            alert_retention: AlertRetention::Unbounded,
        }
    }
}
