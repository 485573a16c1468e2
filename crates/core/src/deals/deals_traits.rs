use async_trait::async_trait;

use crate::deals::deals_model::{Deal, DealCriteria, DealSearchState};
use crate::errors::Result;

/// Where search results come from: the in-memory seed or the mock API.
#[async_trait]
pub trait DealSourceTrait: Send + Sync {
    async fn fetch_deals(&self, criteria: &DealCriteria) -> Result<Vec<Deal>>;
}

/// Trait for deal-search store operations
#[async_trait]
pub trait DealSearchServiceTrait: Send + Sync {
    /// Runs a search and replaces the result list with its outcome.
    ///
    /// Overlapping calls are not cancelled; whichever finishes last wins.
    async fn search_deals(&self, criteria: DealCriteria) -> Result<Vec<Deal>>;
    fn state(&self) -> Result<DealSearchState>;
    fn leads(&self) -> Result<Vec<Deal>>;
    fn is_loading(&self) -> Result<bool>;
}
