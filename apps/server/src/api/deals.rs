use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use dealdesk_core::deals::{score_deal, Deal, DealCriteria, DealScore, DealSourceTrait};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

/// Query keys: `sector`, `round`, `revenueMin`, `geo`.
async fn get_deals(
    State(state): State<Arc<AppState>>,
    Query(criteria): Query<DealCriteria>,
) -> ApiResult<Json<Vec<Deal>>> {
    let deals = state.deal_source.fetch_deals(&criteria).await?;
    tracing::debug!("Deal query {:?} matched {}", criteria, deals.len());
    state.simulate_latency().await;
    Ok(Json(deals))
}

async fn get_deal_score(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DealScore>> {
    let deal = state.deal_source.find(&id).ok_or(ApiError::NotFound)?.clone();
    state.simulate_latency().await;
    let score = score_deal(&deal, &mut rand::thread_rng());
    Ok(Json(score))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/deals", get(get_deals))
        .route("/deals/{id}/score", get(get_deal_score))
}
