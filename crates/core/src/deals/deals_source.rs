use async_trait::async_trait;

use crate::errors::Result;

use super::deals_model::{Deal, DealCriteria, RevenueBound};
use super::deals_seed::{mock_api_deals, pipeline_leads};
use super::deals_traits::DealSourceTrait;

/// Filters a fixed in-memory collection.
#[derive(Debug, Clone)]
pub struct SeedDealSource {
    deals: Vec<Deal>,
    revenue_bound: RevenueBound,
}

impl SeedDealSource {
    pub fn new(deals: Vec<Deal>) -> Self {
        Self {
            deals,
            revenue_bound: RevenueBound::Lenient,
        }
    }

    pub fn with_revenue_bound(mut self, revenue_bound: RevenueBound) -> Self {
        self.revenue_bound = revenue_bound;
        self
    }

    pub fn pipeline() -> Self {
        Self::new(pipeline_leads())
    }

    /// The catalogue behind `GET /api/deals`, with the API's strict revenue rule.
    pub fn mock_api() -> Self {
        Self::new(mock_api_deals()).with_revenue_bound(RevenueBound::Strict)
    }

    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    pub fn find(&self, id: &str) -> Option<&Deal> {
        self.deals.iter().find(|d| d.id == id)
    }
}

#[async_trait]
impl DealSourceTrait for SeedDealSource {
    async fn fetch_deals(&self, criteria: &DealCriteria) -> Result<Vec<Deal>> {
        Ok(criteria.filter_with(&self.deals, self.revenue_bound))
    }
}
