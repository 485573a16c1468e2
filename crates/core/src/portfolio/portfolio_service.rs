use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::{Error, Result};
use crate::events::{StoreEvent, StoreEventSink};

use super::portfolio_model::{PortfolioCompany, PortfolioState};
use super::portfolio_seed::seed_companies;
use super::portfolio_traits::{PortfolioServiceTrait, PortfolioSourceTrait};

/// Portfolio store. Owns the company list; the KPI ticker is its only
/// background writer.
pub struct PortfolioService {
    state: RwLock<PortfolioState>,
    rng: Mutex<StdRng>,
    event_sink: Arc<dyn StoreEventSink>,
}

impl PortfolioService {
    pub fn new(companies: Vec<PortfolioCompany>, event_sink: Arc<dyn StoreEventSink>) -> Self {
        Self::with_rng(companies, StdRng::from_entropy(), event_sink)
    }

    pub fn with_rng(
        companies: Vec<PortfolioCompany>,
        rng: StdRng,
        event_sink: Arc<dyn StoreEventSink>,
    ) -> Self {
        Self {
            state: RwLock::new(PortfolioState {
                companies,
                selected_company: None,
            }),
            rng: Mutex::new(rng),
            event_sink,
        }
    }

    /// Store over the sample companies, KPI history ending this month.
    pub fn with_seed(event_sink: Arc<dyn StoreEventSink>) -> Self {
        Self::new(seed_companies(Utc::now().date_naive()), event_sink)
    }

    /// One feed step driven by the caller's random source.
    pub fn tick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<()> {
        let companies = {
            let mut guard = self.write()?;
            for company in &mut guard.companies {
                company.perturb(rng);
            }
            guard.companies.len()
        };
        debug!("KPI tick applied to {} companies", companies);
        self.event_sink.emit(StoreEvent::KpisTicked { companies });
        Ok(())
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, PortfolioState>> {
        self.state
            .write()
            .map_err(|e| Error::Unexpected(e.to_string()))
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    fn state(&self) -> Result<PortfolioState> {
        self.state
            .read()
            .map(|s| s.clone())
            .map_err(|e| Error::Unexpected(e.to_string()))
    }

    fn companies(&self) -> Result<Vec<PortfolioCompany>> {
        Ok(self.state()?.companies)
    }

    fn select_company(&self, id: &str) -> Result<()> {
        self.write()?.selected_company = Some(id.to_string());
        self.event_sink.emit(StoreEvent::CompanySelected { id: id.to_string() });
        Ok(())
    }

    fn selected_company(&self) -> Result<Option<PortfolioCompany>> {
        Ok(self.state()?.selected().cloned())
    }

    fn tick(&self) -> Result<()> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| Error::Unexpected(e.to_string()))?;
        self.tick_with(&mut *rng)
    }

    async fn load_from(&self, source: &dyn PortfolioSourceTrait) -> Result<usize> {
        let companies = source.fetch_portfolio().await?;
        let count = companies.len();
        self.write()?.companies = companies;
        info!("Loaded {} portfolio companies", count);
        self.event_sink.emit(StoreEvent::PortfolioLoaded { count });
        Ok(count)
    }
}
