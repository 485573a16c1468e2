use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use dealdesk_core::portfolio::{PortfolioCompany, PortfolioServiceTrait};

use crate::{error::ApiResult, main_lib::AppState};

/// Current companies, including whatever the KPI feed has applied so far.
async fn get_portfolio(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<PortfolioCompany>>> {
    state.simulate_latency().await;
    let companies = state.portfolio_service.companies()?;
    Ok(Json(companies))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/portfolio", get(get_portfolio))
}
