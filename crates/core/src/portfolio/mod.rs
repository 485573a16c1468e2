//! Portfolio module - portfolio companies, their KPI history and the
//! simulated live KPI feed.

mod kpi_ticker;
mod portfolio_model;
mod portfolio_seed;
mod portfolio_service;
mod portfolio_traits;

#[cfg(test)]
mod portfolio_service_tests;

pub use kpi_ticker::{KpiTicker, KpiTickerHandle};
pub use portfolio_model::{CompanyStatus, KpiPoint, PortfolioCompany, PortfolioState};
pub use portfolio_seed::seed_companies;
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::{PortfolioServiceTrait, PortfolioSourceTrait};
