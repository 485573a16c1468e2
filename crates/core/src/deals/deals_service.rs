use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};

use crate::constants::DEAL_SEARCH_LATENCY;
use crate::errors::{Error, Result};
use crate::events::{StoreEvent, StoreEventSink};

use super::deals_model::{Deal, DealCriteria, DealSearchState};
use super::deals_source::SeedDealSource;
use super::deals_traits::{DealSearchServiceTrait, DealSourceTrait};

/// Deal-search store: result list, last applied filters and a loading flag.
pub struct DealSearchService {
    source: Arc<dyn DealSourceTrait>,
    latency: Duration,
    state: RwLock<DealSearchState>,
    event_sink: Arc<dyn StoreEventSink>,
}

impl DealSearchService {
    pub fn new(
        source: Arc<dyn DealSourceTrait>,
        initial_leads: Vec<Deal>,
        latency: Duration,
        event_sink: Arc<dyn StoreEventSink>,
    ) -> Self {
        Self {
            source,
            latency,
            state: RwLock::new(DealSearchState {
                leads: initial_leads,
                ..DealSearchState::default()
            }),
            event_sink,
        }
    }

    /// Store over the pipeline seed, listing every lead before the first
    /// search.
    pub fn with_pipeline_seed(event_sink: Arc<dyn StoreEventSink>) -> Self {
        let source = SeedDealSource::pipeline();
        let leads = source.deals().to_vec();
        Self::new(Arc::new(source), leads, DEAL_SEARCH_LATENCY, event_sink)
    }

    fn update<F>(&self, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut DealSearchState),
    {
        let mut guard = self
            .state
            .write()
            .map_err(|e| Error::Unexpected(e.to_string()))?;
        mutate(&mut guard);
        Ok(())
    }
}

#[async_trait]
impl DealSearchServiceTrait for DealSearchService {
    async fn search_deals(&self, criteria: DealCriteria) -> Result<Vec<Deal>> {
        self.update(|s| s.loading = true)?;
        self.event_sink.emit(StoreEvent::DealSearchStarted);

        tokio::time::sleep(self.latency).await;

        let leads = match self.source.fetch_deals(&criteria).await {
            Ok(leads) => leads,
            Err(e) => {
                warn!("Deal search failed: {}", e);
                self.update(|s| s.loading = false)?;
                return Err(e);
            }
        };

        let filters = criteria.normalized();
        debug!("Deal search matched {} leads ({:?})", leads.len(), filters);
        self.update(|s| {
            s.leads = leads.clone();
            s.filters = filters.clone();
            s.loading = false;
        })?;
        self.event_sink.emit(StoreEvent::DealsUpdated {
            count: leads.len(),
            filters,
        });
        Ok(leads)
    }

    fn state(&self) -> Result<DealSearchState> {
        self.state
            .read()
            .map(|s| s.clone())
            .map_err(|e| Error::Unexpected(e.to_string()))
    }

    fn leads(&self) -> Result<Vec<Deal>> {
        Ok(self.state()?.leads)
    }

    fn is_loading(&self) -> Result<bool> {
        Ok(self.state()?.loading)
    }
}
