use async_trait::async_trait;

use crate::errors::Result;
use crate::portfolio::portfolio_model::{PortfolioCompany, PortfolioState};

/// Where the company list can be reloaded from.
#[async_trait]
pub trait PortfolioSourceTrait: Send + Sync {
    async fn fetch_portfolio(&self) -> Result<Vec<PortfolioCompany>>;
}

/// Trait for portfolio store operations
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    fn state(&self) -> Result<PortfolioState>;
    fn companies(&self) -> Result<Vec<PortfolioCompany>>;
    /// Sets the selection without checking that the company exists.
    fn select_company(&self, id: &str) -> Result<()>;
    fn selected_company(&self) -> Result<Option<PortfolioCompany>>;
    /// Applies one step of the simulated live KPI feed.
    fn tick(&self) -> Result<()>;
    /// Replaces the company list; returns the number of companies loaded.
    async fn load_from(&self, source: &dyn PortfolioSourceTrait) -> Result<usize>;
}
