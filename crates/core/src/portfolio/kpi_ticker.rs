//! Simulated live KPI feed.
//!
//! The feed is an explicit task with a start/stop lifecycle; nothing runs
//! until [`KpiTicker::start`] is called.

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::portfolio_traits::PortfolioServiceTrait;

pub struct KpiTicker;

impl KpiTicker {
    /// Spawns the feed. The first tick happens one `period` after start.
    ///
    /// Must be called from within a tokio runtime. `period` must be non-zero.
    pub fn start(service: Arc<dyn PortfolioServiceTrait>, period: Duration) -> KpiTickerHandle {
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            info!("KPI ticker started ({:?} period)", period);
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = ticks.tick() => {
                        if let Err(e) = service.tick() {
                            warn!("KPI tick failed: {}", e);
                        }
                    }
                }
            }
            info!("KPI ticker stopped");
        });

        KpiTickerHandle {
            shutdown: Some(shutdown_tx),
            task,
        }
    }
}

/// Owns a running feed. Dropping the handle also stops the feed.
pub struct KpiTickerHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl KpiTickerHandle {
    /// Signals the feed to stop and waits until it has.
    pub async fn stop(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Err(e) = (&mut self.task).await {
            warn!("KPI ticker task ended abnormally: {}", e);
        }
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}
