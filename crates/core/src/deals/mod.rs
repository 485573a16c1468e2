//! Deals module - lead records, search criteria, the deal-search store and
//! deal scoring.

mod deal_scoring;
mod deals_model;
mod deals_seed;
mod deals_service;
mod deals_source;
mod deals_traits;


pub use deal_scoring::{score_deal, score_deal_with_team, DealScore, Recommendation};
pub use deals_model::{Deal, DealCriteria, DealFilters, DealSearchState, RevenueBound};
pub use deals_seed::{mock_api_deals, pipeline_leads};
pub use deals_service::DealSearchService;
pub use deals_source::SeedDealSource;
pub use deals_traits::{DealSearchServiceTrait, DealSourceTrait};
